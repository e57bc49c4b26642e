//! Kingdoms playout runner.
//!
//! Plays whole matches with random players and logs winners and gold:
//! - `kingdoms-playout --players 3 --matches 10`
//! - `kingdoms-playout --config roster.json`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kingdoms::core::{GameRng, MatchConfig};
use kingdoms::playout::{play_match, PlayoutConfig, RandomPolicy};

#[derive(Parser)]
#[command(name = "kingdoms-playout")]
#[command(about = "Play random matches through the rules engine", version)]
struct Cli {
    /// Number of seats when no roster file is given
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=4))]
    players: u8,

    /// Seed for the first match; later matches use consecutive seeds
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of matches to play
    #[arg(short, long, default_value_t = 1)]
    matches: u32,

    /// JSON roster file (overrides --players)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let base = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            MatchConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => MatchConfig::seated(cli.seed, usize::from(cli.players)),
    };

    let mut players_rng = GameRng::new(cli.seed);
    for round in 0..u64::from(cli.matches) {
        let seed = cli.seed.wrapping_add(round);
        let config = base.clone().with_seed(seed);
        let mut policy = RandomPolicy::from_rng(players_rng.fork());

        let report = play_match(&config, &mut policy, PlayoutConfig::default())?;
        let winner = report.winner().map_or_else(|| "none".to_string(), ToString::to_string);
        let gold = report
            .gold()
            .iter()
            .map(|(id, gold)| format!("{id}={gold}"))
            .collect::<Vec<_>>()
            .join(" ");

        tracing::info!(seed, actions = report.actions, %winner, %gold, "match complete");
    }

    Ok(())
}
