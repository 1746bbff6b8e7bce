//! Pellet Hunter - Entry Point
//!
//! Reads the map once, then loops: read a round from stdin, decide, print one
//! command line to stdout. All diagnostics go to stderr.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pellet_hunter::core::config::{load_config, BotConfig};
use pellet_hunter::core::error::Result;
use pellet_hunter::driver::Bot;
use pellet_hunter::protocol::{write_batch, InputReader};

/// Heuristic pellet-chasing bot
#[derive(Parser, Debug)]
#[command(name = "pellet_hunter")]
#[command(about = "Decide pac commands for a toroidal pellet-chasing contest")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic wandering
    #[arg(long)]
    seed: Option<u64>,

    /// Threat search depth
    #[arg(long)]
    horizon: Option<u32>,

    /// Append decision intent to MOVE commands
    #[arg(long)]
    annotate: bool,
}

fn main() {
    // stdout belongs to the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pellet_hunter=info")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!(error = %e, "bot stopped");
        std::process::exit(1);
    }
}

fn build_config(args: &Args) -> Result<BotConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => BotConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(horizon) = args.horizon {
        config.threat_horizon = horizon;
    }
    if args.annotate {
        config.annotate_commands = true;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let annotate = config.annotate_commands;

    let stdin = io::stdin();
    let mut reader = InputReader::new(stdin.lock());
    let mut out = BufWriter::new(io::stdout().lock());

    let map = reader.read_map()?;
    let mut bot = Bot::new(map, config);

    let mut round = 0;
    while let Some(snapshot) = reader.read_round(round)? {
        let batch = bot.play_round(&snapshot);
        let line = write_batch(&mut out, &batch, annotate)?;
        tracing::debug!(round, "{}", line);
        round += 1;
    }

    tracing::info!(rounds = round, "input closed");
    Ok(())
}
