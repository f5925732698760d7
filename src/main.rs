use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_n::arena::play_match;
use connect_n::config::AppConfig;

/// Play connect-N games between two configured strategies.
#[derive(Parser)]
#[command(name = "connect_n", about = "Play connect-N games between two strategies")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the seed used by random strategies
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.play.games = games;
    }
    if let Some(seed) = cli.seed {
        config.play.seed = Some(seed);
    }
    config.validate().context("validating overrides")?;

    let mut board = config.board.build().context("building board")?;
    // Offset Yellow's seed so two random players do not mirror each other
    let mut red = config.red.build(config.play.seed);
    let mut yellow = config.yellow.build(config.play.seed.map(|s| s.wrapping_add(1)));

    log::info!(
        "{} (Red) vs {} (Yellow) on {}x{}, connect {}, {} game(s)",
        red.name(),
        yellow.name(),
        board.width(),
        board.height(),
        board.tokens_to_connect(),
        config.play.games
    );

    let tally = play_match(&mut board, red.as_mut(), yellow.as_mut(), config.play.games)?;
    log::info!("{tally}");
    Ok(())
}
