use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RecordType {
    A,
    #[serde(rename = "CNAME")]
    Cname,
}

impl RecordType {
    /// Fetch order within a zone.
    pub const ALL: [RecordType; 2] = [RecordType::A, RecordType::Cname];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Cname => "CNAME",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsRecord {
    pub r#type: RecordType,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub proxied: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

fn default_success() -> bool {
    true
}
