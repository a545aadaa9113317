use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use validator::{Validate, ValidationError};

/// Value of `--output-file` that disables file output.
pub const NO_OUTPUT: &str = "none";

/// One source of settings. The YAML file and the command line each produce a
/// layer; later layers win field by field.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub api_tokens: Option<Vec<String>>,
    #[serde(default)]
    pub debug: Option<u8>,
    #[serde(default)]
    pub output_file: Option<String>,
    #[serde(default)]
    pub exceptions_file: Option<PathBuf>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl ConfigLayer {
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            api_tokens: over.api_tokens.or(self.api_tokens),
            debug: over.debug.or(self.debug),
            output_file: over.output_file.or(self.output_file),
            exceptions_file: over.exceptions_file.or(self.exceptions_file),
            api_base_url: over.api_base_url.or(self.api_base_url),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(
        length(min = 1, message = "At least one API token is required"),
        custom(function = "validate_tokens")
    )]
    pub api_tokens: Vec<String>,

    pub debug: u8,

    /// `None` when no report file was requested.
    pub output_file: Option<PathBuf>,

    pub exceptions: HashSet<String>,

    #[validate(length(min = 1, message = "API base URL cannot be empty"))]
    pub api_base_url: String,
}

fn validate_tokens(tokens: &Vec<String>) -> Result<(), ValidationError> {
    if tokens.iter().any(|t| t.trim().is_empty()) {
        let mut err = ValidationError::new("empty_token");
        err.message = Some("API token cannot be empty".into());
        return Err(err);
    }
    Ok(())
}
