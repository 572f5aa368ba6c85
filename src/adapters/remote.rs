//! HTTP adapter for an external scraper service.
//!
//! Each retailer's scraping runs as a separate service that exposes its
//! extracted listings as JSON. This adapter fetches that JSON; it owns
//! its own request timeout since the core imposes none.

use std::time::Duration;

use crate::adapters::SourceAdapter;
use crate::config::ScoutConfig;
use crate::error::{Result, ScoutError};
use crate::models::RawListing;
use crate::retailer::RetailerId;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Adapter backed by a remote scraper endpoint returning
/// `Vec<RawListing>` JSON.
pub struct RemoteAdapter {
    retailer: RetailerId,
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteAdapter {
    pub fn new(retailer: RetailerId, endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("CardScout/1.0")
            .build()
            .unwrap_or_default();
        RemoteAdapter {
            retailer,
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait::async_trait]
impl SourceAdapter for RemoteAdapter {
    fn retailer(&self) -> RetailerId {
        self.retailer
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}?q={}", self.endpoint, urlencoding::encode(query))
    }

    async fn fetch_listings(&self, query: &str, config: &ScoutConfig) -> Result<Vec<RawListing>> {
        let url = format!(
            "{}?q={}&allowFoil={}&allowOutOfStock={}",
            self.endpoint,
            urlencoding::encode(query),
            config.allow_foil,
            config.allow_out_of_stock
        );

        log::debug!("[{}] Fetching listings from: {}", self.retailer, url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ScoutError::HttpStatus(response.status()));
        }

        // Decode via serde_json so a bad body is a Parse error, not Network
        let body = response.text().await?;
        let mut listings: Vec<RawListing> = serde_json::from_str(&body)?;
        // Contract says every record carries this adapter's retailer id;
        // re-tag in case the remote service forgot
        for raw in &mut listings {
            raw.retailer = self.retailer;
        }

        log::debug!(
            "[{}] Fetched {} raw listings for {:?}",
            self.retailer,
            listings.len(),
            query
        );

        Ok(listings)
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
