use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::logic::query::{build_request_url, build_shop_query};
use crate::model::Location;

/// Public Overpass interpreter endpoint
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// A map node tagged as a shop, as returned by Overpass
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shop {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
    // Free-form OSM tags; only `name` and `shop` are read
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl Shop {
    pub fn name(&self) -> Option<&str> {
        self.tags.get("name").map(String::as_str)
    }

    pub fn shop_type(&self) -> Option<&str> {
        self.tags.get("shop").map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<Shop>,
}

#[derive(Clone)]
pub struct OverpassClient {
    base_url: String,
    client: Client,
}

impl OverpassClient {
    /// Build a client for the given interpreter endpoint.
    ///
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(base_url: String, user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    /// Full GET url for a shop search around `location`
    pub fn shops_url(&self, location: Location, radius: u32) -> String {
        let query = build_shop_query(location.lat, location.lon, radius);
        build_request_url(&self.base_url, &query)
    }

    /// Fetch every shop node within `radius` meters of `location`.
    ///
    /// Non-2xx statuses and bodies without an `elements` array are errors.
    pub async fn fetch_shops(&self, location: Location, radius: u32) -> Result<Vec<Shop>> {
        let url = self.shops_url(location, radius);
        tracing::debug!(%url, "Overpass request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach Overpass API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "Overpass API returned {}: {}",
                status,
                body.trim()
            ));
        }

        let parsed: OverpassResponse = response
            .json()
            .await
            .context("Failed to parse Overpass response")?;

        Ok(parsed.elements)
    }
}
