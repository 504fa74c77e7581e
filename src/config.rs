use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

pub const CONFIG_FILE: &str = "gocrud.toml";

/// Main configuration structure for gocrud-gen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where generated files are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub root: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(), // pretty, compact, json
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with precedence:
    /// 1. Short environment aliases (GOCRUD_ROOT, GOCRUD_LOG)
    /// 2. Structured environment variables (GOCRUD_OUTPUT_ROOT, ...)
    /// 3. gocrud.toml in the current directory (if exists)
    /// 4. Default values
    pub fn load() -> Result<Self> {
        let dir = std::env::current_dir().map_err(|e| {
            GenError::Configuration(format!("cannot resolve current directory: {}", e))
        })?;
        Self::load_from_dir(&dir)
    }

    /// Load configuration from a specific directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let config_file = dir.join(CONFIG_FILE);
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file));
        }

        builder = builder.add_source(
            Environment::with_prefix("GOCRUD")
                .separator("_")
                .try_parsing(true),
        );

        let mut result: Config = builder.build()?.try_deserialize()?;
        result.merge_env_aliases();

        Ok(result)
    }

    fn merge_env_aliases(&mut self) {
        if let Ok(root) = std::env::var("GOCRUD_ROOT") {
            self.output.root = PathBuf::from(root);
        }
        if let Ok(level) = std::env::var("GOCRUD_LOG") {
            self.logging.level = level;
        }
    }
}
