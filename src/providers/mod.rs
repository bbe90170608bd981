//! # Providers
//!
//! Async clients for every remote endpoint. Each one sits behind a trait
//! from `core` (or [`provider`]) so pages and tests can swap them.

pub mod animals;
pub mod github;
pub mod http;
pub mod ip_location;
pub mod provider;
pub mod types;
pub mod users;
pub mod weather;

use std::sync::Arc;

use log::info;

pub use animals::AnimalClient;
pub use github::GitHubClient;
pub use http::HttpClient;
pub use ip_location::IpLocator;
pub use provider::{RepositoryHost, Services, WeatherService};
pub use users::JsonPlaceholderClient;
pub use weather::OpenWeatherClient;

use crate::core::config::{LocationSource, ResolvedConfig};
use crate::core::geo::{CachedLocator, DeniedLocator, FixedLocator, GeoOptions, Locator};

impl Services {
    /// Builds the live clients described by `config`, sharing one HTTP client.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let http = HttpClient::new();

        let locator: Arc<dyn Locator> = match config.location_source {
            LocationSource::Ip => Arc::new(CachedLocator::new(
                Arc::new(IpLocator::new(
                    http.clone(),
                    config.ip_location_base_url.clone(),
                )),
                GeoOptions::default(),
            )),
            LocationSource::Fixed => Arc::new(CachedLocator::new(
                Arc::new(FixedLocator::new(config.fixed_position)),
                GeoOptions::default(),
            )),
            LocationSource::Off => Arc::new(DeniedLocator),
        };
        info!("Location source: {:?}", config.location_source);

        Self {
            users: Arc::new(JsonPlaceholderClient::new(
                http.clone(),
                config.users_base_url.clone(),
            )),
            repos: Arc::new(GitHubClient::new(
                http.clone(),
                config.github_base_url.clone(),
                config.github_username.clone(),
            )),
            animals: Arc::new(AnimalClient::new(
                http.clone(),
                config.cat_base_url.clone(),
                config.dog_base_url.clone(),
            )),
            weather: Arc::new(OpenWeatherClient::new(
                http,
                config.weather_base_url.clone(),
                config.weather_api_key.clone(),
            )),
            locator,
        }
    }
}
