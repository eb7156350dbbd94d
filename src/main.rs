use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::arena::{Arena, OpponentKind};
use connect_four::config::AppConfig;
use connect_four::game::Player;

/// Play headless Connect Four matches against the minimax AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four against a minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override number of rounds
    #[arg(long)]
    rounds: Option<usize>,

    /// Override the agent playing the human side
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Let the AI open the first round
    #[arg(long)]
    ai_first: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print a config file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration
    let config_found = cli.config.exists();
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rounds) = cli.rounds {
        app_config.arena.rounds = rounds;
    }
    if let Some(opponent) = cli.opponent {
        app_config.arena.opponent = opponent;
    }
    if cli.seed.is_some() {
        app_config.arena.seed = cli.seed;
    }
    if cli.ai_first {
        app_config.session.first_player = Player::Ai;
    }
    app_config.validate().context("validating configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app_config.logging.filter))
        .context("parsing log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if !config_found {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let mut opponent = app_config.arena.build_opponent();
    let arena = Arena::new(app_config.session.clone(), app_config.arena.clone());
    let report = arena.run(opponent.as_mut()).context("running match")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
