//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::geo::Position;
use crate::core::route::Route;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub users: UsersConfig,
    #[serde(default)]
    pub animals: AnimalsConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_page: Option<String>,
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub default_city: Option<String>,
    pub demo_fallback: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GitHubConfig {
    pub username: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UsersConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimalsConfig {
    pub cat_base_url: Option<String>,
    pub dog_base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LocationConfig {
    pub source: Option<LocationSource>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Where "use my location" gets its coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Approximate position from the public IP address.
    #[default]
    Ip,
    /// `[location] latitude/longitude` from this file.
    Fixed,
    /// Location access is refused.
    Off,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CITY: &str = "Ho Chi Minh City";
pub const DEFAULT_GITHUB_USER: &str = "octocat";

const DEFAULT_PROFILE_NAME: &str = "Your Name";
const DEFAULT_PROFILE_TITLE: &str = "Software Developer";
const DEFAULT_PROFILE_BIO: &str = "I build fast, friendly software and enjoy turning \
    rough ideas into polished tools.";
const DEFAULT_PROFILE_EMAIL: &str = "hello@example.com";
const DEFAULT_PROFILE_TAGS: [&str; 6] = ["Rust", "TypeScript", "HTML5 / CSS3", "Git", "Figma", "SQL"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_page: Route,
    pub dark_mode: bool,
    pub weather_api_key: String,
    pub weather_base_url: Option<String>,
    pub default_city: String,
    pub demo_fallback: bool,
    pub github_username: String,
    pub github_base_url: Option<String>,
    pub users_base_url: Option<String>,
    pub cat_base_url: Option<String>,
    pub dog_base_url: Option<String>,
    pub location_source: LocationSource,
    pub fixed_position: Option<Position>,
    pub ip_location_base_url: Option<String>,
    pub profile: ResolvedProfile,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&FolioConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line; `None` means not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub page: Option<String>,
    pub city: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `explicit` or `~/.folio/config.toml`.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an I/O error. A malformed file is `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<FolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config sections: weather key set = {}", config.weather.api_key.is_some());
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = "/"                   # "/", "/skills", "/projects", "/contact",
#                                    # "/users", "/github", "/animals", "/weather"
# dark_mode = false

# [weather]
# api_key = "..."                    # Or set OPENWEATHER_API_KEY env var
# default_city = "Ho Chi Minh City"  # Or FOLIO_DEFAULT_CITY / --city
# demo_fallback = true               # Show demo data when a lookup fails
# base_url = "https://api.openweathermap.org"

# [github]
# username = "octocat"               # Or set FOLIO_GITHUB_USER env var
# base_url = "https://api.github.com"

# [users]
# base_url = "https://jsonplaceholder.typicode.com"

# [animals]
# cat_base_url = "https://api.thecatapi.com"
# dog_base_url = "https://dog.ceo"

# [location]
# source = "ip"                      # "ip", "fixed" or "off"
# latitude = 10.82
# longitude = 106.63
# base_url = "https://ipapi.co"

# [profile]
# name = "Your Name"
# title = "Software Developer"
# bio = "A sentence or two about you."
# email = "hello@example.com"
# phone = "+1 555 0100"
# tags = ["Rust", "TypeScript"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with the environment supplied by `env`.
pub fn resolve_with(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start page: CLI → config → "/"
    let start_page = cli
        .page
        .as_deref()
        .or(config.general.start_page.as_deref())
        .and_then(|p| {
            let route = Route::from_path(p);
            if route.is_none() {
                warn!("Unknown start page {:?}, using /", p);
            }
            route
        })
        .unwrap_or_default();

    // City: CLI → env → config → default
    let default_city = cli
        .city
        .clone()
        .or_else(|| env("FOLIO_DEFAULT_CITY"))
        .or_else(|| config.weather.default_city.clone())
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CITY.to_string());

    // Weather key: env → config. An empty key still reaches the provider,
    // which answers 401 and the page falls back to demo data.
    let weather_api_key = env("OPENWEATHER_API_KEY")
        .or_else(|| config.weather.api_key.clone())
        .unwrap_or_default();
    if weather_api_key.is_empty() {
        warn!("No OpenWeatherMap API key configured");
    }

    let github_username = env("FOLIO_GITHUB_USER")
        .or_else(|| config.github.username.clone())
        .unwrap_or_else(|| DEFAULT_GITHUB_USER.to_string());

    let location_source = config.location.source.unwrap_or_default();
    let fixed_position = match (config.location.latitude, config.location.longitude) {
        (Some(latitude), Some(longitude)) => Some(Position {
            latitude,
            longitude,
        }),
        _ => None,
    };

    ResolvedConfig {
        start_page,
        dark_mode: config.general.dark_mode.unwrap_or(false),
        weather_api_key,
        weather_base_url: config.weather.base_url.clone(),
        default_city,
        demo_fallback: config.weather.demo_fallback.unwrap_or(true),
        github_username,
        github_base_url: config.github.base_url.clone(),
        users_base_url: config.users.base_url.clone(),
        cat_base_url: config.animals.cat_base_url.clone(),
        dog_base_url: config.animals.dog_base_url.clone(),
        location_source,
        fixed_position,
        ip_location_base_url: config.location.base_url.clone(),
        profile: resolve_profile(&config.profile),
    }
}

fn resolve_profile(profile: &ProfileConfig) -> ResolvedProfile {
    ResolvedProfile {
        name: profile
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
        title: profile
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_TITLE.to_string()),
        bio: profile
            .bio
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_BIO.to_string()),
        email: profile
            .email
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_EMAIL.to_string()),
        phone: profile.phone.clone(),
        tags: profile
            .tags
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_TAGS.iter().map(|t| t.to_string()).collect()),
    }
}
