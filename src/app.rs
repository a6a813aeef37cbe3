pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod inspector;
pub mod models;

use anyhow::{Context, Result};
use clap::Parser;

use self::cli::Cli;
use self::config::{AppConfig, load_dotenv, resolve_config};
use self::formatter::OutputGenerator;
use self::inspector::{MenuStore, MongoStore, audit_collection};

/// Read `.env`, then the command line (which falls back to the environment).
pub fn parse_args() -> Cli {
    load_dotenv();
    Cli::parse()
}

// Scans the store (closing it when done) and formats the report.
pub async fn generate_report<S: MenuStore>(store: S) -> Result<String> {
    let result = audit_collection(store)
        .await
        .context("Failed to audit menu item images")?;

    let output = OutputGenerator::generate_text(&result)?;

    Ok(output)
}

pub async fn run(args: Cli) -> Result<()> {
    // 1. Resolve Config
    let config: AppConfig = resolve_config(args);

    // 2. Connect
    let store = MongoStore::connect(&config)
        .await
        .context("Failed to connect to database")?;

    // 3. Scan, Close, Format
    let output = generate_report(store).await?;

    // 4. Output
    print!("{}", output);

    Ok(())
}
