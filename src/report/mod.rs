//! Filtering and rendering of collected records.
//!
//! The console table is written as records arrive; file reports are written
//! once, after the sweep, in the format chosen by the destination's extension.

pub mod console;
pub mod html;
pub mod spreadsheet;

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::api::DnsRecord;

/// Records whose content carries this marker are DKIM keys listed under A/CNAME.
pub const DKIM_MARKER: &str = "domainkey";

pub const HEADERS: [&str; 4] = ["Type", "Name", "Content", "Proxy Enabled"];

pub const FORMAT_HINT: &str =
    "Format not supported on filename. Please use .xls, .xlsx or .htm .html format for output.";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to render report: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to write workbook: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

pub fn is_reportable(record: &DnsRecord) -> bool {
    !record.content.contains(DKIM_MARKER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Spreadsheet,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("htm") | Some("html") => Ok(OutputFormat::Html),
            Some("xls") | Some("xlsx") => Ok(OutputFormat::Spreadsheet),
            _ => Err(ReportError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn write(
        &self,
        path: &Path,
        records: &[DnsRecord],
        exceptions: &HashSet<String>,
    ) -> Result<(), ReportError> {
        match self {
            OutputFormat::Html => html::write(path, records, exceptions),
            OutputFormat::Spreadsheet => spreadsheet::write(path, records),
        }
    }
}
