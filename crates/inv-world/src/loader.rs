//! Text map loader.
//!
//! # Format
//!
//! One city per line: the city name followed by zero or more space-separated
//! `direction=target` edges.
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! Blank lines are skipped and repeated spaces are tolerated.  Targets that
//! never appear as the first token of a line are created as dead-end cities.
//! City names must not contain `=`.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::{World, WorldBuilder, WorldError, WorldResult};

/// Load a [`World`] from a map file.
pub fn load_world(path: &Path) -> WorldResult<World> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_world_reader(file)
}

/// Like [`load_world`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded maps.
pub fn load_world_reader<R: Read>(reader: R) -> WorldResult<World> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut builder = WorldBuilder::new();
    let mut record = StringRecord::new();

    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        let mut fields = record.iter().filter(|f| !f.is_empty());

        let Some(name) = fields.next() else {
            continue;
        };
        if name.contains('=') {
            return Err(parse_err(line, format!("line must start with a city name, got {name:?}")));
        }

        let edges = fields
            .map(|token| parse_edge(token).ok_or_else(|| {
                parse_err(line, format!("invalid edge {token:?}: expected direction=city"))
            }))
            .collect::<WorldResult<Vec<_>>>()?;

        builder.declare(name, edges)?;
    }

    Ok(builder.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_edge(token: &str) -> Option<(&str, &str)> {
    let (direction, target) = token.split_once('=')?;
    if direction.is_empty() || target.is_empty() || target.contains('=') {
        return None;
    }
    Some((direction, target))
}

fn parse_err(line: u64, message: String) -> WorldError {
    WorldError::Parse { line, message }
}
