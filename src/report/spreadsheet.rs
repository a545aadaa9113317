use std::path::Path;

use log::debug;
use rust_xlsxwriter::{Format, Workbook};

use super::{ReportError, HEADERS};
use crate::api::DnsRecord;

pub const SHEET_NAME: &str = "DNS Records";

/// Always produces an OOXML workbook, whichever of `.xls`/`.xlsx` was asked for.
pub fn write(path: &Path, records: &[DnsRecord]) -> Result<(), ReportError> {
    debug!("Writing output to workbook: {}", path.display());

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, header) in HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, record.r#type.as_str())?;
            sheet.write_string(row, 1, &record.name)?;
            sheet.write_string(row, 2, &record.content)?;
            sheet.write_boolean(row, 3, record.proxied)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
