pub mod client;
pub mod cloudflare;
pub mod error;
pub mod models;

pub use client::DnsApiClient;
pub use cloudflare::CloudflareClient;
pub use error::FetchError;
pub use models::{DnsRecord, RecordType};
