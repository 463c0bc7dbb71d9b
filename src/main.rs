use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mastermind::build_info;
use mastermind::{GameConfig, GameSession, SecretSource, TerminalConsole};

/// Crack the hidden four-colour code.
#[derive(Parser)]
#[command(name = "mastermind", version = build_info::VERSION, about = "Terminal Mastermind")]
struct Cli {
    /// Number of guesses allowed
    #[arg(long)]
    rows: Option<usize>,

    /// Play against a fixed secret code, e.g. 1526
    #[arg(long, conflicts_with = "seed")]
    secret: Option<String>,

    /// Derive the secret code from this seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to JSON config file (default: ~/.mastermind/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable coloured pegs
    #[arg(long)]
    no_color: bool,

    /// Don't clear the screen between rounds
    #[arg(long)]
    no_clear: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<(GameConfig, PathBuf)> {
    let (mut config, path) = match &cli.config {
        Some(path) => {
            let config = GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, path.clone())
        }
        None => {
            let path = GameConfig::default_path()?;
            let config = GameConfig::load_or_default(&path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, path)
        }
    };

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(secret) = &cli.secret {
        config.secret = SecretSource::parse_literal(secret)?;
    }
    if let Some(seed) = cli.seed {
        config.secret = SecretSource::Seeded(seed);
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }
    config.validate()?;

    Ok((config, path))
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (config, path) = load_config(&cli)?;

    if cli.save_config {
        config
            .save(&path)
            .with_context(|| format!("saving config to {}", path.display()))?;
        println!("Saved config to {}", path.display());
        return Ok(());
    }

    log::info!(
        "starting game: {} rows, secret source {}",
        config.rows,
        match config.secret {
            SecretSource::Random => "random",
            SecretSource::Seeded(_) => "seeded",
            SecretSource::Literal(_) => "literal",
        }
    );

    let mut session = GameSession::new(config.rows, config.secret.resolve())?;
    let mut console = TerminalConsole::stdio()
        .with_color(config.color)
        .with_clear_screen(config.clear_screen);

    let status = session.run(&mut console).context("game ended unexpectedly")?;
    log::debug!("final status: {:?}", status);

    Ok(())
}
