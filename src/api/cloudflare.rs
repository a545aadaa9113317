use super::{client::DnsApiClient, error::FetchError, models::*};
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

const ZONES_PER_PAGE: u32 = 400;
const RECORDS_PER_PAGE: u32 = 100;

pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn list_zones(&self) -> Result<Vec<Zone>, FetchError> {
        let url = format!("{}/zones", self.base_url);
        let params = [("per_page", ZONES_PER_PAGE.to_string())];
        debug!("Making request to {} with params {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if status != StatusCode::OK {
            return Err(FetchError::from_status(status, text));
        }

        Self::parse_result(&text)
    }

    async fn list_records(
        &self,
        zone_id: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, FetchError> {
        let url = format!("{}/zones/{}/dns_records", self.base_url, zone_id);
        let params = [
            ("type", record_type.to_string()),
            ("page", "1".to_string()),
            ("per_page", RECORDS_PER_PAGE.to_string()),
        ];
        debug!("Making request to {} with params {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if status != StatusCode::OK {
            return Err(FetchError::from_status(status, text));
        }

        Self::parse_result(&text)
    }
}

impl CloudflareClient {
    /// Builds a client that reuses an existing connection pool, so one
    /// `reqwest::Client` can serve every token in a run.
    pub fn with_http(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }

    fn parse_result<T: serde::de::DeserializeOwned>(text: &str) -> Result<Vec<T>, FetchError> {
        let parsed: ApiResponse<Vec<T>> = serde_json::from_str(text)?;

        if !parsed.success {
            return Err(FetchError::Api(format!("{:?}", parsed.errors)));
        }

        Ok(parsed.result.unwrap_or_default())
    }
}
