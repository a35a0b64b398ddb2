//! Tests for inv-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AlienStateRow, DestructionRow, RoundSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("destructions.csv").exists());
        assert!(dir.path().join("round_summaries.csv").exists());
        assert!(dir.path().join("alien_states.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("first");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("destructions.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "destructions.csv"), ["round", "city", "aliens"]);
        assert_eq!(
            headers(&dir, "round_summaries.csv"),
            ["round", "eligible", "moves", "stalled", "skipped", "destructions"]
        );
        assert_eq!(headers(&dir, "alien_states.csv"), ["alien", "city", "visits", "dead", "stuck"]);
    }

    #[test]
    fn csv_destruction_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_destruction(&DestructionRow { round: 4, city: "Bar".into(), aliens: vec![2, 7] })
            .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "destructions.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "Bar");
        assert_eq!(&rows[0][2], "2;7");
    }

    #[test]
    fn csv_round_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = RoundSummaryRow {
            round:        3,
            eligible:     5,
            moves:        3,
            stalled:      1,
            skipped:      1,
            destructions: 1,
        };
        w.write_round_summary(&row).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "round_summaries.csv");
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "5", "3", "1", "1", "1"]);
    }

    #[test]
    fn csv_alien_flags_as_integers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_alien_states(&[
            AlienStateRow { alien: 0, city: "Foo".into(), visits: 3, dead: true, stuck: false },
            AlienStateRow { alien: 1, city: "Qu-ux".into(), visits: 0, dead: false, stuck: true },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "alien_states.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "1");
        assert_eq!(&rows[0][4], "0");
        assert_eq!(&rows[1][1], "Qu-ux");
        assert_eq!(&rows[1][4], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_alien_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_alien_states(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use inv_core::SimConfig;
    use inv_sim::SimBuilder;
    use inv_world::{World, WorldBuilder};

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{AlienStateRow, DestructionRow, RoundSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn pair_world() -> World {
        let mut b = WorldBuilder::new();
        b.declare("a", [("east", "b")]).unwrap();
        b.declare("b", [("west", "a")]).unwrap();
        b.build()
    }

    fn config(seed: u64) -> SimConfig {
        SimConfig { seed, visit_cap: 100, num_threads: Some(2) }
    }

    /// Accepts rows in memory and fails every write after the first `ok`.
    #[derive(Default)]
    struct Flaky {
        ok:       usize,
        writes:   usize,
        finished: usize,
    }

    impl Flaky {
        fn tick(&mut self) -> OutputResult<()> {
            self.writes += 1;
            if self.writes > self.ok {
                Err(OutputError::Io(std::io::Error::other(format!("write {} failed", self.writes))))
            } else {
                Ok(())
            }
        }
    }

    impl OutputWriter for Flaky {
        fn write_destruction(&mut self, _row: &DestructionRow) -> OutputResult<()> {
            self.tick()
        }

        fn write_round_summary(&mut self, _row: &RoundSummaryRow) -> OutputResult<()> {
            self.tick()
        }

        fn write_alien_states(&mut self, _rows: &[AlienStateRow]) -> OutputResult<()> {
            self.tick()
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let dir = TempDir::new().unwrap();
        let mut sim = SimBuilder::new(config(9), pair_world(), 2).build().unwrap();

        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let report = sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(report.rounds, 1);

        let read = |file: &str| -> Vec<csv::StringRecord> {
            let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
            rdr.records().map(|r| r.unwrap()).collect()
        };

        let destructions = read("destructions.csv");
        assert_eq!(destructions.len(), 1);
        assert_eq!(&destructions[0][0], "1");
        assert!(["a", "b"].contains(&&destructions[0][1]));

        let summaries = read("round_summaries.csv");
        assert_eq!(summaries.len(), 1);
        let fields: Vec<&str> = summaries[0].iter().collect();
        // Second mover is already dead when its task runs.
        assert_eq!(fields, ["1", "2", "1", "0", "1", "1"]);

        let aliens = read("alien_states.csv");
        assert_eq!(aliens.len(), 2);
        assert!(aliens.iter().all(|r| &r[3] == "1"));
        assert_eq!(&aliens[0][1], &destructions[0][1]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(config(1), pair_world(), 2).build().unwrap();
        let mut obs = SimOutputObserver::new(Flaky { ok: 1, ..Flaky::default() });
        sim.run(&mut obs);

        let err = obs.take_error().expect("write error stored");
        assert_eq!(err.to_string(), "I/O error: write 2 failed");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.writes, 3, "destruction, summary, alien states");
        assert_eq!(writer.finished, 1);
    }
}
