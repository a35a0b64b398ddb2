//! invasion — unleash N aliens on a map of cities and watch them fight.
//!
//! Reads the map (default `cities.txt`), prints it, runs the simulation until
//! every alien is dead, stuck or exhausted, announces each destroyed city as
//! it happens, and prints what is left of the world.
//!
//! ```text
//! invasion 4 --map cities.txt --seed 7 --output ./out
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;

use inv_core::{AlienId, SimConfig};
use inv_output::{CsvWriter, OutputWriter, SimOutputObserver};
use inv_sim::{Destruction, Invasion, InvasionReport, RoundSummary, SimBuilder, SimObserver};
use inv_world::{World, load_world, render_map};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Alien invasion simulator
#[derive(Parser)]
#[command(name = "invasion")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of aliens to unleash (1 ..= number of cities)
    aliens: usize,

    /// Map file: one city per line, `Name dir=Target ...`
    #[arg(short, long, value_name = "FILE", default_value = "cities.txt")]
    map: PathBuf,

    /// JSON file with `seed`, `visit_cap` and `num_threads`; flags override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed (default: derived from the clock and logged)
    #[arg(long)]
    seed: Option<u64>,

    /// Moves after which an alien stops roaming
    #[arg(long)]
    visit_cap: Option<u32>,

    /// Worker threads for the round pool (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Directory for destructions.csv, round_summaries.csv and alien_states.csv
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

// ── Observers ─────────────────────────────────────────────────────────────────

/// Prints every destruction as it is reported.
struct Announcer<W: OutputWriter> {
    csv: Option<SimOutputObserver<W>>,
}

impl<W: OutputWriter> SimObserver for Announcer<W> {
    fn on_round_start(&mut self, round: u64, eligible: &[AlienId]) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_round_start(round, eligible);
        }
    }

    fn on_destruction(&mut self, round: u64, event: &Destruction, world: &World) {
        println!("{}", event.describe(world));
        if let Some(csv) = self.csv.as_mut() {
            csv.on_destruction(round, event, world);
        }
    }

    fn on_round_end(&mut self, summary: &RoundSummary) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_round_end(summary);
        }
    }

    fn on_converged(&mut self, report: &InvasionReport, invasion: &Invasion) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_converged(report, invasion);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = build_config(&cli)?;
    tracing::info!(seed = config.seed, visit_cap = config.visit_cap, "configuration");

    let world = load_world(&cli.map)
        .with_context(|| format!("failed to load map {}", cli.map.display()))?;
    if cli.aliens > world.city_count() {
        bail!(
            "number of aliens ({}) must not exceed the number of cities ({})",
            cli.aliens,
            world.city_count()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "World before attack:")?;
    render_map(&world, &mut out)?;
    drop(out);

    let csv = match &cli.output {
        Some(dir) => Some(SimOutputObserver::new(
            CsvWriter::new(dir).with_context(|| format!("failed to open {}", dir.display()))?,
        )),
        None => None,
    };
    let mut announcer = Announcer { csv };

    let t0 = Instant::now();
    let mut sim = SimBuilder::new(config, world, cli.aliens).build()?;
    let report = sim.run(&mut announcer);
    tracing::info!(
        rounds    = report.rounds,
        destroyed = report.destroyed.len(),
        elapsed   = ?t0.elapsed(),
        "simulation finished",
    );

    if let Some(err) = announcer.csv.as_mut().and_then(SimOutputObserver::take_error) {
        tracing::error!("output error: {err}");
    }

    let mut out = stdout.lock();
    writeln!(out)?;
    writeln!(out, "World after attack:")?;
    render_map(sim.world(), &mut out)?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
    Ok(())
}

/// File config first, then flags on top.
fn build_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SimConfig { seed: clock_seed(), ..SimConfig::default() },
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(cap) = cli.visit_cap {
        config.visit_cap = cap;
    }
    if cli.threads.is_some() {
        config.num_threads = cli.threads;
    }
    config.validate()?;
    Ok(config)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
