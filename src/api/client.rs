use super::{error::FetchError, models::*};
use async_trait::async_trait;

/// Read-only view of one account's zones and records, scoped to a single token.
#[async_trait]
pub trait DnsApiClient {
    async fn list_zones(&self) -> Result<Vec<Zone>, FetchError>;
    async fn list_records(
        &self,
        zone_id: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, FetchError>;
}
