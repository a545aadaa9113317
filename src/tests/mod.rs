mod report;

use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::api::{DnsRecord, RecordType};
use crate::config::Config;

pub(crate) fn record(r#type: RecordType, name: &str, content: &str, proxied: bool) -> DnsRecord {
    DnsRecord {
        r#type,
        name: name.to_string(),
        content: content.to_string(),
        proxied,
    }
}

/// A record as the API returns it, extra fields included.
pub(crate) fn record_json(r#type: &str, name: &str, content: &str, proxied: bool) -> Value {
    json!({
        "id": format!("{}-{}", name, r#type),
        "type": r#type,
        "name": name,
        "content": content,
        "proxied": proxied,
        "ttl": 1,
        "proxiable": true
    })
}

pub(crate) fn envelope(result: Value) -> Value {
    json!({
        "result": result,
        "success": true,
        "errors": [],
        "messages": []
    })
}

pub(crate) fn test_config(tokens: &[&str], base_url: &str) -> Config {
    Config {
        api_tokens: tokens.iter().map(|t| t.to_string()).collect(),
        debug: 1,
        output_file: None,
        exceptions: HashSet::new(),
        api_base_url: base_url.to_string(),
    }
}

pub(crate) fn with_output(mut config: Config, path: PathBuf) -> Config {
    config.output_file = Some(path);
    config
}
