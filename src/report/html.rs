use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, trace};
use serde::Serialize;
use tera::{Context as TeraContext, Tera};

use super::{ReportError, HEADERS};
use crate::api::DnsRecord;

pub const EXCEPTION_CLASS: &str = "gray-row";
pub const UNPROXIED_CLASS: &str = "red-row";

const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("report.html");

/// Exceptions win over the proxy check: an excepted host is informational
/// even when it is not proxied.
pub fn row_class(record: &DnsRecord, exceptions: &HashSet<String>) -> Option<&'static str> {
    trace!("Testing {}", record.name);
    if exceptions.contains(&record.name) {
        trace!("Exception found for record: {}", record.name);
        Some(EXCEPTION_CLASS)
    } else if !record.proxied {
        Some(UNPROXIED_CLASS)
    } else {
        None
    }
}

#[derive(Serialize)]
struct Row<'a> {
    class: Option<&'static str>,
    record_type: &'static str,
    name: &'a str,
    content: &'a str,
    proxied: bool,
}

#[derive(Serialize)]
struct Page<'a> {
    headers: [&'static str; 4],
    rows: Vec<Row<'a>>,
}

/// Renders the report page. The template name ends in `.html`, so tera
/// escapes every interpolated value.
pub fn render(records: &[DnsRecord], exceptions: &HashSet<String>) -> Result<String, ReportError> {
    let page = Page {
        headers: HEADERS,
        rows: records
            .iter()
            .map(|record| Row {
                class: row_class(record, exceptions),
                record_type: record.r#type.as_str(),
                name: &record.name,
                content: &record.content,
                proxied: record.proxied,
            })
            .collect(),
    };

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
    let context = TeraContext::from_serialize(&page)?;
    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

pub fn write(
    path: &Path,
    records: &[DnsRecord],
    exceptions: &HashSet<String>,
) -> Result<(), ReportError> {
    debug!("Writing output to html file: {}", path.display());
    debug!("Exceptions loaded: {:?}", exceptions);
    fs::write(path, render(records, exceptions)?)?;
    Ok(())
}
