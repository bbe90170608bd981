use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::core::action::{FetchKind, Payload};
use crate::core::fetch::FetchError;
use crate::core::geo::{Locator, Position};
use crate::core::remote_list::ListSource;
use crate::core::pages::weather::PROBE_CITY;
use crate::core::single::ResourceSource;
use super::types::{
    AnimalImage, CurrentWeather, Place, RepoListing, Species, User, WeatherReport, WeatherSelector,
};

/// A source-code host exposing one account's profile and repositories.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetches the profile, then the repository list. Fails if either fails.
    async fn listing(&self) -> Result<RepoListing, FetchError>;
}

/// Current weather plus forecast for a selector, and reverse geocoding.
#[async_trait]
pub trait WeatherService: ResourceSource<WeatherSelector, WeatherReport> {
    /// Resolves coordinates to a human-readable place.
    async fn place_name(&self, at: Position) -> Result<Place, FetchError>;

    /// Current conditions only, one request. Used to test the API key.
    async fn probe(&self, city: &str) -> Result<CurrentWeather, FetchError>;

    /// The configured API key, shortened for display.
    fn masked_key(&self) -> String;
}

/// Every remote dependency the pages use, injected at startup.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn ListSource<User>>,
    pub repos: Arc<dyn RepositoryHost>,
    pub animals: Arc<dyn ResourceSource<Species, AnimalImage>>,
    pub weather: Arc<dyn WeatherService>,
    pub locator: Arc<dyn Locator>,
}

impl Services {
    /// Performs one fetch. Every failure is carried inside the payload.
    pub async fn perform(&self, kind: FetchKind) -> Payload {
        debug!("Performing {:?}", kind);
        match kind {
            FetchKind::Users => Payload::Users(self.users.fetch_list().await),
            FetchKind::Repos => Payload::Repos(self.repos.listing().await),
            FetchKind::Animal(species) => Payload::Animal(self.animals.fetch_one(&species).await),
            FetchKind::Weather(selector) => {
                Payload::Weather(self.weather.fetch_one(&selector).await)
            }
            FetchKind::Locate => Payload::Located(self.locate_place().await),
            FetchKind::Probe => Payload::Probe(self.weather.probe(PROBE_CITY).await),
        }
    }

    /// Locates the user and names the place they are in.
    async fn locate_place(&self) -> Result<Place, FetchError> {
        let position = self.locator.locate().await?;
        self.weather.place_name(position).await
    }
}
