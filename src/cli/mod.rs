pub mod commands;
pub mod utils;

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::PathBuf;

use gocrud_gen::{Config, logging};

/// Loads layered configuration, applies command-line overrides and
/// installs logging. Flags win over `gocrud.toml` and `GOCRUD_*` variables.
pub fn load_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if let Some(root) = matches.get_one::<PathBuf>("root") {
        config.output.root = root.clone();
    }
    if matches.get_flag("verbose") {
        config.logging.level = "debug".to_string();
    }

    logging::init(&config.logging);
    tracing::debug!(root = %config.output.root.display(), "Configuration loaded");

    Ok(config)
}
