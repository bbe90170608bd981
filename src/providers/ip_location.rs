//! Approximate position from the caller's public IP address.
//!
//! Terminals have no positioning hardware to ask, so the `ip` location
//! source stands in for a device geolocation API.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use crate::core::fetch::FetchError;
use crate::core::geo::{Locator, Position};
use crate::providers::http::HttpClient;

pub const DEFAULT_IP_LOCATION_BASE_URL: &str = "https://ipapi.co";

#[derive(Deserialize, Debug)]
struct IpLookup {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

pub struct IpLocator {
    http: HttpClient,
    base_url: String,
}

impl IpLocator {
    pub fn new(http: HttpClient, base_url: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_IP_LOCATION_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl Locator for IpLocator {
    async fn locate(&self) -> Result<Position, FetchError> {
        let lookup: IpLookup = self
            .http
            .get_json(&format!("{}/json/", self.base_url), &[])
            .await
            .map_err(|e| {
                warn!("IP location lookup failed: {}", e);
                FetchError::Unavailable
            })?;

        match (lookup.latitude, lookup.longitude) {
            (Some(latitude), Some(longitude)) => {
                debug!("IP location resolved to {:.2}, {:.2}", latitude, longitude);
                Ok(Position {
                    latitude,
                    longitude,
                })
            }
            _ => Err(FetchError::Unavailable),
        }
    }
}
