use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

use crate::api::{CloudflareClient, DnsApiClient, DnsRecord, FetchError, RecordType};
use crate::config::Config;
use crate::report::{self, console, OutputFormat, ReportError, FORMAT_HINT};

/// A unit of work whose fetch failed. `zone_id` is `None` when the zone list
/// itself could not be read, in which case the whole token was skipped.
#[derive(Debug)]
pub struct SkippedSlice {
    pub token_index: usize,
    pub zone_id: Option<String>,
    pub record_type: Option<RecordType>,
    pub error: FetchError,
}

#[derive(Debug, Default)]
pub struct Sweep {
    pub records: Vec<DnsRecord>,
    pub skipped: Vec<SkippedSlice>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Export {
    NotRequested,
    NothingToWrite,
    Unsupported(PathBuf),
    Written(PathBuf),
}

pub struct Inventory<W: Write> {
    config: Config,
    http: reqwest::Client,
    out: W,
}

impl<W: Write> Inventory<W> {
    /// `out` receives the console table and user-facing messages.
    pub fn new(config: Config, out: W) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            out,
        }
    }

    pub async fn run(&mut self) -> Result<Sweep> {
        let sweep = self.sweep().await?;

        info!("Collected {} record(s)", sweep.records.len());
        for skipped in &sweep.skipped {
            warn!(
                "Skipped token #{} zone {} type {}: {}",
                skipped.token_index + 1,
                skipped.zone_id.as_deref().unwrap_or("*"),
                skipped.record_type.map(|t| t.as_str()).unwrap_or("*"),
                skipped.error
            );
        }

        match self.export(&sweep.records)? {
            Export::Written(path) => info!("Report written to {}", path.display()),
            Export::Unsupported(path) => warn!("No report written for {}", path.display()),
            Export::NothingToWrite => info!("No records collected, no report written"),
            Export::NotRequested => {}
        }

        Ok(sweep)
    }

    /// Visits every token in order, each with its own client.
    pub async fn sweep(&mut self) -> Result<Sweep> {
        if self.config.debug >= 1 {
            console::write_header(&mut self.out).context("Failed to write console output")?;
        }

        let mut sweep = Sweep::default();
        let tokens = self.config.api_tokens.clone();
        for (index, token) in tokens.iter().enumerate() {
            let client = CloudflareClient::with_http(
                self.http.clone(),
                self.config.api_base_url.as_str(),
                token.as_str(),
            );
            self.sweep_token(index, &client, &mut sweep).await?;
        }

        Ok(sweep)
    }

    /// Lists the token's zones, then fetches A and CNAME records zone by zone.
    /// Failed fetches are recorded in `sweep.skipped` and never abort the run.
    pub async fn sweep_token<C: DnsApiClient + Sync>(
        &mut self,
        token_index: usize,
        client: &C,
        sweep: &mut Sweep,
    ) -> Result<()> {
        let zones = match client.list_zones().await {
            Ok(zones) => zones,
            Err(e) => {
                sweep.skipped.push(SkippedSlice {
                    token_index,
                    zone_id: None,
                    record_type: None,
                    error: e,
                });
                return Ok(());
            }
        };
        info!("Token #{}: {} zone(s)", token_index + 1, zones.len());

        for zone in &zones {
            debug!("Fetching records for zone {} ({})", zone.name, zone.id);
            for record_type in RecordType::ALL {
                let records = match client.list_records(&zone.id, record_type).await {
                    Ok(records) => records,
                    Err(e) => {
                        sweep.skipped.push(SkippedSlice {
                            token_index,
                            zone_id: Some(zone.id.clone()),
                            record_type: Some(record_type),
                            error: e,
                        });
                        continue;
                    }
                };

                for record in records.into_iter().filter(report::is_reportable) {
                    if self.config.debug >= 1 {
                        console::write_row(&mut self.out, &record)
                            .context("Failed to write console output")?;
                    }
                    sweep.records.push(record);
                }
            }
        }

        Ok(())
    }

    /// Writes the report file once, if one was requested and anything was
    /// collected. An unsupported extension prints a hint and writes nothing.
    pub fn export(&mut self, records: &[DnsRecord]) -> Result<Export> {
        let Some(path) = self.config.output_file.clone() else {
            return Ok(Export::NotRequested);
        };
        if records.is_empty() {
            return Ok(Export::NothingToWrite);
        }

        let format = match OutputFormat::from_path(&path) {
            Ok(format) => format,
            Err(ReportError::UnsupportedFormat(path)) => {
                writeln!(self.out, "{}", FORMAT_HINT)?;
                writeln!(self.out, "Example: ")?;
                writeln!(
                    self.out,
                    "{} <token>[,<token>...] --debug 2 --output-file output_file.xlsx --exceptions exceptions.txt",
                    env!("CARGO_PKG_NAME")
                )?;
                return Ok(Export::Unsupported(path));
            }
            Err(e) => return Err(e.into()),
        };

        format
            .write(&path, records, &self.config.exceptions)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(Export::Written(path))
    }
}
