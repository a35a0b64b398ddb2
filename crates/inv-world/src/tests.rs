//! Unit tests for inv-world.
//!
//! All tests use hand-written maps; file-based tests go through `tempfile`.

#[cfg(test)]
mod helpers {
    use crate::{World, WorldBuilder};

    /// city1 ⇄ city2, city1 → city3, city2 → city3; city3 is a dead end.
    pub fn triangle() -> World {
        let mut b = WorldBuilder::new();
        b.declare("city1", [("east", "city2"), ("west", "city3")]).unwrap();
        b.declare("city2", [("west", "city1"), ("south", "city3")]).unwrap();
        b.build()
    }
}

// ── Builder & structure ───────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use inv_core::CityId;

    use crate::{WorldBuilder, WorldError};

    #[test]
    fn empty_build() {
        let w = WorldBuilder::new().build();
        assert_eq!(w.city_count(), 0);
        assert!(w.is_empty());
    }

    #[test]
    fn auto_creates_targets() {
        let w = super::helpers::triangle();
        assert_eq!(w.city_count(), 3);
        let c3 = w.city_id("city3").unwrap();
        assert!(w.city(c3).is_dead_end());
        assert_eq!(w.city(c3).name, "city3");
    }

    #[test]
    fn arena_order_is_first_mention() {
        let w = super::helpers::triangle();
        assert_eq!(w.city_id("city1"), Some(CityId(0)));
        assert_eq!(w.city_id("city2"), Some(CityId(1)));
        assert_eq!(w.city_id("city3"), Some(CityId(2)));
    }

    #[test]
    fn late_declaration_of_auto_created_city_keeps_id() {
        let mut b = WorldBuilder::new();
        b.declare("a", [("north", "b")]).unwrap();
        let b_id = b.declare("b", [("south", "a")]).unwrap();
        let w = b.build();
        assert_eq!(b_id, CityId(1));
        assert_eq!(w.out_degree(b_id), 1);
        assert_eq!(w.city_count(), 2);
    }

    #[test]
    fn duplicate_declaration_rejected() {
        let mut b = WorldBuilder::new();
        b.add_city("a").unwrap();
        let err = b.add_city("a").unwrap_err();
        assert!(matches!(err, WorldError::DuplicateCity(name) if name == "a"));
    }

    #[test]
    fn asymmetric_edges_allowed() {
        let mut b = WorldBuilder::new();
        b.declare("a", [("north", "b")]).unwrap();
        let w = b.build();
        let a = w.city_id("a").unwrap();
        let bb = w.city_id("b").unwrap();
        assert_eq!(w.out_degree(a), 1);
        assert_eq!(w.out_degree(bb), 0);
        assert_eq!(w.incoming_count(bb), 1);
        assert_eq!(w.incoming_count(a), 0);
    }

    #[test]
    fn snapshot_resolves_names() {
        let w = super::helpers::triangle();
        let snap = w.snapshot();
        assert_eq!(snap.len(), 3);
        assert_eq!(snap[0].name, "city1");
        assert_eq!(snap[0].edges[0].direction, "east");
        assert_eq!(snap[0].edges[0].to, "city2");
        assert!(!snap[2].destroyed);
    }
}

// ── Mutators ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mutators {
    use inv_core::AlienId;

    #[test]
    fn relocate_moves_by_identity() {
        let mut w = super::helpers::triangle();
        let c1 = w.city_id("city1").unwrap();
        let c2 = w.city_id("city2").unwrap();
        w.place(AlienId(0), c1);
        w.place(AlienId(1), c1);
        w.relocate(AlienId(1), c1, c2);
        assert_eq!(w.city(c1).occupants, vec![AlienId(0)]);
        assert_eq!(w.city(c2).occupants, vec![AlienId(1)]);
    }

    #[test]
    fn self_loop_relocation_keeps_single_entry() {
        let mut w = super::helpers::triangle();
        let c1 = w.city_id("city1").unwrap();
        w.place(AlienId(3), c1);
        w.relocate(AlienId(3), c1, c1);
        assert_eq!(w.city(c1).occupants, vec![AlienId(3)]);
    }

    #[test]
    fn destroy_prunes_everything() {
        let mut w = super::helpers::triangle();
        let c1 = w.city_id("city1").unwrap();
        let c3 = w.city_id("city3").unwrap();
        w.place(AlienId(0), c3);
        w.place(AlienId(1), c3);

        let casualties = w.destroy(c3);
        assert_eq!(casualties, vec![AlienId(0), AlienId(1)]);

        let city = w.city(c3);
        assert!(city.destroyed);
        assert!(city.edges.is_empty());
        assert!(city.occupants.is_empty());
        assert_eq!(city.destroyed_by, casualties);
        assert_eq!(w.incoming_count(c3), 0);
        assert_eq!(w.out_degree(c1), 1, "city1 keeps only its edge to city2");
        assert_eq!(w.destroyed_count(), 1);
        assert_eq!(w.city_count(), 3, "tombstones stay in the arena");
    }

    #[test]
    fn destroy_clears_outgoing_edges() {
        let mut w = super::helpers::triangle();
        let c1 = w.city_id("city1").unwrap();
        let c2 = w.city_id("city2").unwrap();
        w.destroy(c1);
        assert!(w.city(c1).edges.is_empty());
        assert_eq!(w.incoming_count(c1), 0);
        // city2 keeps south=city3 only.
        assert_eq!(w.out_degree(c2), 1);
        assert_eq!(w.surviving_ids().len(), 2);
    }

    #[test]
    fn destroy_twice_is_noop() {
        let mut w = super::helpers::triangle();
        let c2 = w.city_id("city2").unwrap();
        w.place(AlienId(0), c2);
        assert_eq!(w.destroy(c2), vec![AlienId(0)]);
        assert!(w.destroy(c2).is_empty());
        assert_eq!(w.city(c2).destroyed_by, vec![AlienId(0)]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{WorldError, load_world, load_world_reader};

    const MAP: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo west=Bee
";

    #[test]
    fn parses_sample_map() {
        let w = load_world_reader(Cursor::new(MAP)).unwrap();
        // Foo, Bar, Baz, Qu-ux, Bee
        assert_eq!(w.city_count(), 5);
        let foo = w.city_id("Foo").unwrap();
        assert_eq!(w.out_degree(foo), 3);
        let bee = w.city_id("Bee").unwrap();
        assert!(w.city(bee).is_dead_end());
    }

    #[test]
    fn tolerates_blank_lines_and_extra_spaces() {
        let map = "a  north=b\n\n   \nb south=a   \n";
        let w = load_world_reader(Cursor::new(map)).unwrap();
        assert_eq!(w.city_count(), 2);
        assert_eq!(w.out_degree(w.city_id("a").unwrap()), 1);
        assert_eq!(w.out_degree(w.city_id("b").unwrap()), 1);
    }

    #[test]
    fn city_with_no_edges() {
        let w = load_world_reader(Cursor::new("Lonely\n")).unwrap();
        assert_eq!(w.city_count(), 1);
        assert!(w.city(w.city_id("Lonely").unwrap()).is_dead_end());
    }

    #[test]
    fn crlf_line_endings() {
        let w = load_world_reader(Cursor::new("a north=b\r\nb south=a\r\n")).unwrap();
        assert_eq!(w.city_id("b").map(|b| w.out_degree(b)), Some(1));
        assert!(w.city_id("b\r").is_none());
    }

    #[test]
    fn malformed_edge_is_rejected() {
        let err = load_world_reader(Cursor::new("a north=b\nb southa\n")).unwrap_err();
        match err {
            WorldError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("southa"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_target_is_rejected() {
        assert!(load_world_reader(Cursor::new("a north=\n")).is_err());
        assert!(load_world_reader(Cursor::new("a =b\n")).is_err());
    }

    #[test]
    fn edge_in_name_position_is_rejected() {
        assert!(load_world_reader(Cursor::new("north=b a\n")).is_err());
    }

    #[test]
    fn duplicate_line_is_rejected() {
        let err = load_world_reader(Cursor::new("a north=b\na south=b\n")).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateCity(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("cities.txt");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(MAP.as_bytes()))
            .unwrap();
        let w = load_world(&path).unwrap();
        assert_eq!(w.city_count(), 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_world(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WorldError::Io(_)));
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use std::io::Cursor;

    use crate::{load_world_reader, render_map};

    #[test]
    fn renders_in_arena_order() {
        let w = super::helpers::triangle();
        let text = w.to_string();
        assert_eq!(
            text,
            "city1 east=city2 west=city3\ncity2 west=city1 south=city3\ncity3\n"
        );
    }

    #[test]
    fn omits_destroyed_cities_and_edges() {
        let mut w = super::helpers::triangle();
        let c3 = w.city_id("city3").unwrap();
        w.destroy(c3);
        let mut out = Vec::new();
        render_map(&w, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "city1 east=city2\ncity2 west=city1\n"
        );
    }

    #[test]
    fn rendered_map_loads_back() {
        let w = super::helpers::triangle();
        let reloaded = load_world_reader(Cursor::new(w.to_string())).unwrap();
        assert_eq!(reloaded.snapshot(), w.snapshot());
    }
}
