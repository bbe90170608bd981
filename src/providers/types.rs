//! Domain records returned by the providers.
//!
//! Field names follow the upstream JSON where the payload is used as-is
//! (users, GitHub). Weather is normalized from OpenWeatherMap's nested shape
//! into flat records in `providers::weather`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::favorites::Identified;
use crate::core::geo::Position;
use crate::core::remote_list::Searchable;

// ============================================================================
// User directory
// ============================================================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
    pub address: Address,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Address {
    pub city: String,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.company.name.as_str(),
        ]
    }
}

impl Identified for User {
    type Id = u64;
    fn id(&self) -> u64 {
        self.id
    }
}

impl User {
    /// Upper-cased first letter of the name, used as an avatar.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}

// ============================================================================
// Source hosting
// ============================================================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub html_url: String,
    pub blog: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }

    /// The profile's website; GitHub reports an unset one as `""`.
    pub fn website(&self) -> Option<&str> {
        self.blog.as_deref().filter(|b| !b.is_empty())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub fork: bool,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    pub homepage: Option<String>,
}

impl Searchable for Repository {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }
}

impl Identified for Repository {
    type Id = u64;
    fn id(&self) -> u64 {
        self.id
    }
}

impl Repository {
    pub fn demo_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.is_empty())
    }
}

/// Profile plus its repositories, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoListing {
    pub profile: Profile,
    pub repos: Vec<Repository>,
}

// ============================================================================
// Animal images
// ============================================================================

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Cat,
    Dog,
}

impl Species {
    pub fn other(self) -> Species {
        match self {
            Species::Cat => Species::Dog,
            Species::Dog => Species::Cat,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimalImage {
    pub id: String,
    pub url: String,
    pub species: Species,
}

impl Identified for AnimalImage {
    type Id = String;
    fn id(&self) -> String {
        self.id.clone()
    }
}

// ============================================================================
// Weather
// ============================================================================

/// Which weather to fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherSelector {
    City(String),
    Coordinates(Position),
}

impl WeatherSelector {
    /// Name used in messages and for the placeholder dataset.
    pub fn label(&self) -> String {
        match self {
            WeatherSelector::City(name) => name.clone(),
            WeatherSelector::Coordinates(p) => format!("{:.2}, {:.2}", p.latitude, p.longitude),
        }
    }
}

/// A human-readable place resolved from coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub country: Option<String>,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(cc) => write!(f, "{}, {}", self.name, cc),
            None => f.write_str(&self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub name: String,
    pub country: Option<String>,
    /// Degrees Celsius.
    pub temp: f64,
    pub feels_like: f64,
    /// Percent.
    pub humidity: u8,
    /// hPa.
    pub pressure: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
    /// m/s.
    pub wind_speed: f64,
    /// Meters.
    pub visibility: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub dt: DateTime<Utc>,
    pub temp: f64,
    pub main: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastEntry>,
    /// Set on placeholder data shown when the live fetch failed.
    pub is_demo: bool,
}

impl Identified for WeatherReport {
    type Id = String;
    fn id(&self) -> String {
        match &self.current.country {
            Some(cc) => format!("{}, {}", self.current.name, cc),
            None => self.current.name.clone(),
        }
    }
}
