//! Batch self-play simulator for the Starving Artist rules engine.
//!
//! Plays a run of seeded games with a scripted policy and prints a JSON
//! summary. Logs go to stderr so stdout stays machine-readable.
//!
//! ```text
//! starving-sim --games 200 --players 3 --seed 1000 --out results.json
//! ```

mod policy;
mod report;
mod runner;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use starving_content::{ContentFactory, GameContent};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::policy::{Heuristic, Policy};
use crate::report::BatchReport;
use crate::runner::{RunSettings, Runner};

/// Simulate Starving Artist games and report the results
#[derive(Parser, Debug)]
#[command(name = "starving-sim")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value_t = 100)]
    games: u32,

    /// Seats per game
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=6))]
    players: u16,

    /// Seed of the first game; game `i` uses `seed + i`
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Write the JSON summary here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Stop a game after this many dispatched actions
    #[arg(long, default_value_t = 10_000)]
    max_actions: u32,

    /// Content directory (config.toml, catalog.ron, decks.ron); built-in content when absent
    #[arg(long, env = "STARVING_DATA_DIR")]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for STARVING_DATA_DIR and RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let content = match &cli.data {
        Some(dir) => ContentFactory::new(dir).load_all()?,
        None => GameContent::builtin(),
    };

    let runner = Runner::new(
        &content,
        Heuristic,
        RunSettings {
            players: usize::from(cli.players),
            max_actions: cli.max_actions,
        },
    );

    let results = (0..u64::from(cli.games))
        .map(|offset| runner.play(cli.seed.wrapping_add(offset)))
        .collect::<Result<Vec<_>>>()?;
    let batch = BatchReport::new(
        usize::from(cli.players),
        cli.seed,
        runner.policy().name(),
        results,
    );

    tracing::info!(
        games = batch.games,
        win_rate = batch.win_rate,
        avg_turns = batch.avg_turns,
        "batch complete"
    );
    write_report(&batch, cli.out.as_ref())
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn write_report(batch: &BatchReport, out: Option<&PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, batch)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, batch)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["starving-sim"]).unwrap();
        assert_eq!(cli.games, 100);
        assert_eq!(cli.players, 2);
        assert!(cli.out.is_none());
    }

    #[test]
    fn cli_rejects_empty_tables() {
        assert!(Cli::try_parse_from(["starving-sim", "--players", "0"]).is_err());
    }

    #[test]
    fn report_file_is_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        let batch = BatchReport::new(1, 5, "heuristic", Vec::new());

        write_report(&batch, Some(&path)).unwrap();

        let json: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(json["seed_start"], 5);
        assert_eq!(json["games"], 0);
    }
}
