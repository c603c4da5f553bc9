// src/main.rs

use anyhow::Context;
use log::info;

use ntuple::cli::{Command, USAGE};
use ntuple::config::{self, Config};

/// Main entry point for the `ntuple` command.
fn main() -> anyhow::Result<()> {
    // Load before the logger exists, report once it does.
    let outcome = Config::try_load();
    let filter = match &outcome {
        Ok(Some(loaded)) => loaded.logging.filter.clone(),
        _ => Config::default().logging.filter,
    };

    // RUST_LOG overrides the configured filter.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_micros()
        .init();

    let config = config::install(Config::report(outcome));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let command = Command::parse(&args).context("Failed to parse arguments")?;
    info!("Tolerance settings: {:?}", config.tolerance);
    let result = command.run(config)?;
    println!("{}", result);
    Ok(())
}
