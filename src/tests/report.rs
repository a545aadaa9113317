use std::collections::HashSet;
use std::path::Path;

use super::record;
use crate::api::RecordType;
use crate::report::{console, html, is_reportable, OutputFormat, ReportError};

#[test]
fn test_dkim_content_is_not_reportable() {
    let dkim = record(RecordType::Cname, "s1._domainkey.example.com", "s1.domainkey.u123.wl.sendgrid.net", false);
    let plain = record(RecordType::A, "www.example.com", "192.0.2.1", true);
    // match is on content, and case-sensitive
    let upper = record(RecordType::Cname, "x.example.com", "s1.DomainKey.example.net", true);

    assert!(!is_reportable(&dkim));
    assert!(is_reportable(&plain));
    assert!(is_reportable(&upper));
}

#[test]
fn test_format_from_extension() {
    assert_eq!(OutputFormat::from_path(Path::new("out.html")).unwrap(), OutputFormat::Html);
    assert_eq!(OutputFormat::from_path(Path::new("out.HTM")).unwrap(), OutputFormat::Html);
    assert_eq!(OutputFormat::from_path(Path::new("out.xls")).unwrap(), OutputFormat::Spreadsheet);
    assert_eq!(OutputFormat::from_path(Path::new("dir/out.XLSX")).unwrap(), OutputFormat::Spreadsheet);

    for bad in ["report.pdf", "report", "report.html.bak"] {
        assert!(matches!(
            OutputFormat::from_path(Path::new(bad)),
            Err(ReportError::UnsupportedFormat(_))
        ));
    }
}

#[test]
fn test_row_class_exception_takes_precedence() {
    let exceptions = HashSet::from(["foo.example.com".to_string()]);

    let excepted_unproxied = record(RecordType::A, "foo.example.com", "192.0.2.1", false);
    let excepted_proxied = record(RecordType::A, "foo.example.com", "192.0.2.1", true);
    let unproxied = record(RecordType::A, "bar.example.com", "192.0.2.2", false);
    let proxied = record(RecordType::Cname, "baz.example.com", "bar.example.com", true);

    assert_eq!(html::row_class(&excepted_unproxied, &exceptions), Some("gray-row"));
    assert_eq!(html::row_class(&excepted_proxied, &exceptions), Some("gray-row"));
    assert_eq!(html::row_class(&unproxied, &exceptions), Some("red-row"));
    assert_eq!(html::row_class(&proxied, &exceptions), None);
}

#[test]
fn test_html_render_structure() {
    let records = vec![
        record(RecordType::A, "bar.example.com", "192.0.2.2", false),
        record(RecordType::Cname, "baz.example.com", "<script>", true),
    ];
    let page = html::render(&records, &HashSet::new()).unwrap();

    assert!(page.contains("<link rel=\"stylesheet\" type=\"text/css\" href=\"styles.css\">"));
    assert!(page.contains(
        "<tr><th>Type</th><th>Name</th><th>Content</th><th>Proxy Enabled</th></tr>"
    ));
    assert!(page.contains(
        "<tr class=\"red-row\"><td>A</td><td>bar.example.com</td><td>192.0.2.2</td><td>false</td></tr>"
    ));
    assert!(page.contains(
        "<tr><td>CNAME</td><td>baz.example.com</td><td>&lt;script&gt;</td><td>true</td></tr>"
    ));
    assert!(!page.contains("<style"));
}

#[test]
fn test_html_escapes_cell_text() {
    let exceptions = HashSet::from(["a&b.example.com".to_string()]);
    let records = vec![record(RecordType::Cname, "a&b.example.com", "\"quoted\".example.net", false)];
    let page = html::render(&records, &exceptions).unwrap();

    assert!(page.contains(
        "<tr class=\"gray-row\"><td>CNAME</td><td>a&amp;b.example.com</td><td>&quot;quoted&quot;.example.net</td><td>false</td></tr>\n</table>"
    ));
    assert_eq!(page.matches("<tr").count(), 2);
}

#[test]
fn test_console_columns() {
    let mut out = Vec::new();
    console::write_header(&mut out).unwrap();
    console::write_row(&mut out, &record(RecordType::Cname, "www.example.com", "example.com", true)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(&lines[0][..10], "Type      ");
    assert_eq!(&lines[0][10..14], "Name");
    assert_eq!(&lines[0][60..67], "Content");
    assert_eq!(&lines[0][180..], "Proxy_Enabled");

    assert_eq!(&lines[1][..10], "CNAME     ");
    assert_eq!(lines[1][10..60].trim_end(), "www.example.com");
    assert_eq!(lines[1][60..180].trim_end(), "example.com");
    assert_eq!(&lines[1][180..], "true      ");
}
