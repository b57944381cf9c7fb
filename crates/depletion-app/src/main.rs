use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use depletion_app::config::HostConfig;
use depletion_app::game_loop;

fn main() -> Result<()> {
    let config = HostConfig::parse();

    let default_level = if config.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    game_loop::run_app(&config)
}
