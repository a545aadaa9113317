use std::io::{self, Write};

use crate::api::DnsRecord;

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:<50}{:<120}{:<10}",
        "Type", "Name", "Content", "Proxy_Enabled"
    )
}

pub fn write_row<W: Write>(out: &mut W, record: &DnsRecord) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:<50}{:<120}{:<10}",
        record.r#type.as_str(),
        record.name,
        record.content,
        record.proxied
    )
}
