//! REST client for the hosted resort table.
//!
//! The table is served by a PostgREST endpoint (`/rest/v1/<table>`), which
//! authenticates with the project's anonymous key in both the `apikey` and
//! `Authorization` headers.

use crate::resort::Resort;
use anyhow::Context;
use log::info;
use reqwest::Client;
use std::time::Duration;

/// Table holding one row per resort.
pub const DEFAULT_TABLE: &str = "onthesnow";

/// PostgREST ordering by display name, ascending.
pub const ORDER_BY_NAME: &str = "\"Ski Resort\".asc";

/// Client for `fetch-all-ordered-by-name` against the hosted table.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl RestClient {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(RestClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
            client,
        })
    }

    /// Endpoint of the resort table, without query parameters.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Fetch every row of the table, ordered by display name ascending.
    ///
    /// Transport errors and non-success statuses are returned as errors;
    /// no partial result is ever produced.
    pub async fn fetch_all_ordered_by_name(&self) -> anyhow::Result<Vec<Resort>> {
        let url = self.table_url();
        info!("Fetching resorts from {}", url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&[("select", "*"), ("order", ORDER_BY_NAME)])
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?
            .error_for_status()?;
        let body = response.text().await?;
        let resorts = Resort::parse_resort_json(&body).context("unexpected resort payload")?;
        info!("Fetched {} resorts", resorts.len());
        Ok(resorts)
    }
}
