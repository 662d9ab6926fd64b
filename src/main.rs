//! Entry point: parse CLI, load settings, prepare the schema, run the menu.

use anyhow::Context;
use clap::Parser;
use players_selection::{cli::Args, console::Console, storage::Database, DatabaseConfig};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let config =
        DatabaseConfig::load(args.config.as_deref()).context("Failed to load database settings")?;
    let db = Database::new(&config).context("Invalid database settings")?;
    db.initialize()
        .with_context(|| format!("Failed to initialize database at {}", db.path().display()))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(&db, stdin.lock(), stdout.lock())
        .run()
        .context("Console session failed")?;

    Ok(())
}
