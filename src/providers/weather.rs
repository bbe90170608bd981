//! OpenWeatherMap current conditions, 5-day forecast and reverse lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Deserialize;

use crate::core::fetch::FetchError;
use crate::core::geo::Position;
use crate::core::single::ResourceSource;
use crate::providers::http::HttpClient;
use crate::providers::provider::WeatherService;
use crate::providers::types::{CurrentWeather, ForecastEntry, Place, WeatherReport, WeatherSelector};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// The forecast comes in 3-hour steps; one entry in eight is one per day.
const FORECAST_STRIDE: usize = 8;
const FORECAST_DAYS: usize = 5;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct OwmCurrent {
    name: String,
    #[serde(default)]
    sys: Option<OwmSys>,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    #[serde(default)]
    wind: Option<OwmWind>,
    #[serde(default)]
    visibility: Option<u32>,
}

#[derive(Deserialize, Debug)]
struct OwmSys {
    country: Option<String>,
}

#[derive(Deserialize, Debug)]
struct OwmMain {
    temp: f64,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    humidity: Option<u8>,
    #[serde(default)]
    pressure: Option<u32>,
}

#[derive(Deserialize, Debug)]
struct OwmCondition {
    main: String,
    #[serde(default)]
    description: String,
    icon: String,
}

#[derive(Deserialize, Debug)]
struct OwmWind {
    speed: f64,
}

#[derive(Deserialize, Debug)]
struct OwmForecast {
    list: Vec<OwmForecastItem>,
}

#[derive(Deserialize, Debug)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

impl OwmCurrent {
    fn country(&self) -> Option<String> {
        self.sys.as_ref().and_then(|s| s.country.clone())
    }

    fn into_current(self) -> CurrentWeather {
        let country = self.country();
        let condition = self.weather.into_iter().next();
        let (main, description, icon) = match condition {
            Some(c) => (c.main, c.description, c.icon),
            None => (String::new(), String::new(), String::new()),
        };
        CurrentWeather {
            name: self.name,
            country,
            temp: self.main.temp,
            feels_like: self.main.feels_like.unwrap_or(self.main.temp),
            humidity: self.main.humidity.unwrap_or_default(),
            pressure: self.main.pressure.unwrap_or_default(),
            main,
            description,
            icon,
            wind_speed: self.wind.map(|w| w.speed).unwrap_or_default(),
            visibility: self.visibility.unwrap_or_default(),
        }
    }
}

/// Keeps every 8th entry, at most five.
fn daily_entries(forecast: OwmForecast) -> Vec<ForecastEntry> {
    forecast
        .list
        .into_iter()
        .step_by(FORECAST_STRIDE)
        .take(FORECAST_DAYS)
        .filter_map(|item| {
            let dt = DateTime::<Utc>::from_timestamp(item.dt, 0)?;
            let condition = item.weather.into_iter().next();
            let (main, icon) = condition.map(|c| (c.main, c.icon)).unwrap_or_default();
            Some(ForecastEntry {
                dt,
                temp: item.main.temp,
                main,
                icon,
            })
        })
        .collect()
}

// ============================================================================
// Client
// ============================================================================

pub struct OpenWeatherClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(http: HttpClient, base_url: Option<String>, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
            api_key,
        }
    }

    fn query(&self, selector: &WeatherSelector) -> Vec<(&'static str, String)> {
        let mut query = match selector {
            WeatherSelector::City(name) => vec![("q", name.clone())],
            WeatherSelector::Coordinates(p) => vec![
                ("lat", p.latitude.to_string()),
                ("lon", p.longitude.to_string()),
            ],
        };
        query.push(("appid", self.api_key.clone()));
        query.push(("units", "metric".to_string()));
        query.push(("lang", "en".to_string()));
        query
    }

    async fn fetch_current(&self, selector: &WeatherSelector) -> Result<OwmCurrent, FetchError> {
        self.http
            .get_json(
                &format!("{}/data/2.5/weather", self.base_url),
                &self.query(selector),
            )
            .await
    }

    pub async fn current(&self, selector: &WeatherSelector) -> Result<CurrentWeather, FetchError> {
        Ok(self.fetch_current(selector).await?.into_current())
    }

    pub async fn forecast(&self, selector: &WeatherSelector) -> Result<Vec<ForecastEntry>, FetchError> {
        let forecast: OwmForecast = self
            .http
            .get_json(
                &format!("{}/data/2.5/forecast", self.base_url),
                &self.query(selector),
            )
            .await?;
        Ok(daily_entries(forecast))
    }
}

#[async_trait]
impl ResourceSource<WeatherSelector, WeatherReport> for OpenWeatherClient {
    /// Current conditions are required; the forecast is best effort.
    async fn fetch_one(&self, selector: &WeatherSelector) -> Result<WeatherReport, FetchError> {
        let current = self.current(selector).await?;
        let forecast = match self.forecast(selector).await {
            Ok(days) => days,
            Err(e) => {
                warn!("Forecast for {} unavailable: {}", selector.label(), e);
                Vec::new()
            }
        };
        info!(
            "Fetched weather for {}: {:.1}°C, {} forecast days",
            current.name,
            current.temp,
            forecast.len()
        );
        Ok(WeatherReport {
            current,
            forecast,
            is_demo: false,
        })
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn place_name(&self, at: Position) -> Result<Place, FetchError> {
        let current = self.fetch_current(&WeatherSelector::Coordinates(at)).await?;
        let country = current.country();
        Ok(Place {
            name: current.name,
            country,
        })
    }

    async fn probe(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        self.current(&WeatherSelector::City(city.to_string())).await
    }

    fn masked_key(&self) -> String {
        mask_key(&self.api_key)
    }
}

/// First eight characters followed by `...`; `"(not set)"` when empty.
pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let head: String = key.chars().take(8).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("0123456789abcdef"), "01234567...");
        assert_eq!(mask_key("abc"), "abc...");
        assert_eq!(mask_key(""), "(not set)");
    }

    #[test]
    fn test_current_flattens_nested_payload() {
        let json = r#"{
            "name": "London",
            "sys": {"country": "GB"},
            "main": {"temp": 12.3, "feels_like": 10.1, "humidity": 81, "pressure": 1009},
            "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}],
            "wind": {"speed": 4.6},
            "visibility": 9000
        }"#;
        let raw: OwmCurrent = serde_json::from_str(json).unwrap();
        let current = raw.into_current();
        assert_eq!(current.name, "London");
        assert_eq!(current.country.as_deref(), Some("GB"));
        assert_eq!(current.humidity, 81);
        assert_eq!(current.main, "Rain");
        assert_eq!(current.icon, "10d");
        assert_eq!(current.visibility, 9000);
    }

    #[test]
    fn test_daily_entries_takes_every_eighth() {
        let list: Vec<String> = (0..40)
            .map(|i| {
                format!(
                    r#"{{"dt": {}, "main": {{"temp": {}}}, "weather": [{{"main": "Clear", "icon": "01d"}}]}}"#,
                    1_700_000_000 + i * 10_800,
                    i
                )
            })
            .collect();
        let json = format!(r#"{{"list": [{}]}}"#, list.join(","));
        let forecast: OwmForecast = serde_json::from_str(&json).unwrap();
        let days = daily_entries(forecast);
        let temps: Vec<f64> = days.iter().map(|d| d.temp).collect();
        assert_eq!(temps, vec![0.0, 8.0, 16.0, 24.0, 32.0]);
    }

    #[test]
    fn test_daily_entries_short_list() {
        let json = r#"{"list": [{"dt": 1700000000, "main": {"temp": 5}, "weather": []}]}"#;
        let forecast: OwmForecast = serde_json::from_str(json).unwrap();
        let days = daily_entries(forecast);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].main, "");
    }

    #[test]
    fn test_query_by_coordinates_carries_units_and_key() {
        let client = OpenWeatherClient::new(HttpClient::new(), None, "k".to_string());
        let query = client.query(&WeatherSelector::Coordinates(Position {
            latitude: 10.5,
            longitude: 106.25,
        }));
        let keys: Vec<&str> = query.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["lat", "lon", "appid", "units", "lang"]);
        assert_eq!(query[3].1, "metric");
    }
}
