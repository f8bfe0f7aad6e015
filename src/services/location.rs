//! Locator Service
//!
//! A terminal has no built-in geolocation, so the capability is pluggable:
//! - `FixedLocator`: coordinates from the config file or `--lat/--lon`
//! - `IpLocator`: approximate position from an IP geolocation endpoint
//! - `NoLocator`: capability absent
//!
//! Location is requested exactly once at start-up; there is no subscription.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::model::Location;

/// Default IP geolocation endpoint (ip-api.com JSON format)
pub const DEFAULT_IP_LOOKUP_URL: &str = "http://ip-api.com/json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("geolocation capability is not available")]
    Unsupported,

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// One-shot "get current position" capability
pub trait Locator {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// Coordinates supplied up front
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl FixedLocator {
    pub fn new(lat: Option<f64>, lon: Option<f64>) -> Self {
        Self { lat, lon }
    }
}

impl Locator for FixedLocator {
    async fn locate(&self) -> Result<Location, LocationError> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(Location { lat, lon }),
            _ => Err(LocationError::Unavailable(
                "fixed provider without coordinates".to_string(),
            )),
        }
    }
}

/// Capability absent
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocator;

impl Locator for NoLocator {
    async fn locate(&self) -> Result<Location, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Accepts both `lat`/`lon` (ip-api.com) and `latitude`/`longitude` (ipapi.co)
#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, alias = "latitude")]
    lat: Option<f64>,
    #[serde(default, alias = "longitude")]
    lon: Option<f64>,
}

/// Approximate position from the caller's public IP
#[derive(Clone)]
pub struct IpLocator {
    url: String,
    client: Client,
}

impl IpLocator {
    pub fn new(url: String, user_agent: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            url,
            client: builder.build()?,
        })
    }
}

impl Locator for IpLocator {
    async fn locate(&self) -> Result<Location, LocationError> {
        let unavailable = |e: reqwest::Error| LocationError::Unavailable(e.to_string());

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;

        let body: IpLookupResponse = response.json().await.map_err(unavailable)?;

        if let Some(status) = body.status.as_deref() {
            if status != "success" {
                return Err(LocationError::Unavailable(
                    body.message.unwrap_or_else(|| format!("lookup status {}", status)),
                ));
            }
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Ok(Location { lat, lon }),
            _ => Err(LocationError::Unavailable(
                "lookup response without coordinates".to_string(),
            )),
        }
    }
}

/// Run `locator` once in the background and deliver the single result
pub fn spawn_locator<L>(locator: L) -> mpsc::UnboundedReceiver<Result<Location, LocationError>>
where
    L: Locator + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        debug!("requesting current position");
        let result = locator.locate().await;
        match &result {
            Ok(location) => info!(lat = location.lat, lon = location.lon, "position acquired"),
            Err(e) => warn!("position unavailable: {}", e),
        }
        let _ = tx.send(result);
    });

    rx
}
