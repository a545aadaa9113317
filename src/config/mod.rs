pub mod models;

pub use models::{Config, ConfigLayer};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use validator::Validate;

use self::models::NO_OUTPUT;
use crate::api::cloudflare::API_BASE_URL;

pub const DEFAULT_DEBUG: u8 = 1;

impl ConfigLayer {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Resolves defaults, loads the exceptions file and validates the result.
    pub fn resolve(layer: ConfigLayer) -> Result<Self> {
        let exceptions = match &layer.exceptions_file {
            Some(path) => load_exceptions(path)?,
            None => HashSet::new(),
        };

        let output_file = layer
            .output_file
            .filter(|f| f != NO_OUTPUT)
            .map(PathBuf::from);

        let api_tokens = layer
            .api_tokens
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.trim().to_string())
            .collect();

        let config = Config {
            api_tokens,
            debug: layer.debug.unwrap_or(DEFAULT_DEBUG),
            output_file,
            exceptions,
            api_base_url: layer
                .api_base_url
                .unwrap_or_else(|| API_BASE_URL.to_string()),
        };

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Default log filter for this verbosity, used when `RUST_LOG` is unset.
    /// Only this crate gets louder; dependencies stay at `warn`.
    pub fn log_filter(&self) -> &'static str {
        match self.debug {
            0 => "warn",
            1 => "warn,cfdns_report=info",
            2 => "warn,cfdns_report=debug",
            _ => "warn,cfdns_report=trace",
        }
    }
}

/// Reads one hostname per line. Surrounding whitespace is trimmed and blank
/// lines are ignored.
pub fn load_exceptions(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read exceptions file: {}", path.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
