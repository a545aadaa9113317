mod api;
mod config;
mod inventory;
mod report;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::info;
use std::io;
use std::path::PathBuf;

use config::{Config, ConfigLayer};
use inventory::Inventory;

#[derive(Parser, Debug)]
#[command(name = "cfdns-report")]
#[command(version)]
#[command(about = "List proxied and unproxied A/CNAME records across Cloudflare zones")]
struct Cli {
    /// Bearer token for the Cloudflare API, or a comma-separated list of tokens
    #[arg(env = "CLOUDFLARE_API_TOKEN", value_delimiter = ',', hide_env_values = true)]
    tokens: Vec<String>,

    /// Debug level (0 silent, 1 record table, 2 request log, 3 exception matching)
    #[arg(long)]
    debug: Option<u8>,

    /// Output file name (.xls, .xlsx, .htm, .html), or "none"
    #[arg(long)]
    output_file: Option<String>,

    /// File listing hostnames excluded from red-row highlighting in HTML output
    #[arg(long)]
    exceptions: Option<PathBuf>,

    /// Optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cloudflare API base URL
    #[arg(long)]
    api_url: Option<String>,
}

impl Cli {
    fn into_layer(self) -> ConfigLayer {
        ConfigLayer {
            api_tokens: (!self.tokens.is_empty()).then_some(self.tokens),
            debug: self.debug,
            output_file: self.output_file,
            exceptions_file: self.exceptions,
            api_base_url: self.api_url,
        }
    }
}

/// Token problems are usage errors, so they go through clap and print the
/// usage line like any other bad argument.
fn require_tokens(layer: &ConfigLayer) -> Result<(), clap::Error> {
    let mut cmd = Cli::command();
    match layer.api_tokens.as_deref() {
        None | Some([]) => Err(cmd.error(
            ErrorKind::MissingRequiredArgument,
            "an API token is required: pass <TOKENS>, set CLOUDFLARE_API_TOKEN or list api_tokens in --config",
        )),
        Some(tokens) if tokens.iter().any(|t| t.trim().is_empty()) => Err(cmd.error(
            ErrorKind::InvalidValue,
            "API token cannot be empty",
        )),
        Some(_) => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_layer = match &cli.config {
        Some(path) => ConfigLayer::load(path)?,
        None => ConfigLayer::default(),
    };
    let config_path = cli.config.clone();
    let layer = file_layer.merge(cli.into_layer());
    if let Err(e) = require_tokens(&layer) {
        e.exit();
    }
    let config = Config::resolve(layer)?;

    // RUST_LOG takes precedence over --debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    if let Some(path) = config_path {
        info!("Loaded configuration from: {}", path.display());
    }
    info!(
        "Processing {} token(s), {} exception(s) loaded",
        config.api_tokens.len(),
        config.exceptions.len()
    );

    let mut inventory = Inventory::new(config, io::stdout());
    inventory.run().await?;

    Ok(())
}
