use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use corsair::config::Config;
use corsair::logging;
use corsair::ui::runtime;

/// Terminal roster manager for a pirate crew and its armoury.
#[derive(Debug, Parser)]
#[command(name = "corsair", version, about)]
struct Args {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "starting corsair");
    runtime::run(config)?;
    tracing::info!("corsair exited");
    Ok(())
}
