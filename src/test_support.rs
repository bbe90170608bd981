//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::providers::types::{
    Address, AnimalImage, Company, CurrentWeather, ForecastEntry, Profile, Repository, Species,
    User, WeatherReport,
};

/// Creates a test App on the About page with default settings.
pub fn test_app() -> App {
    App::new(ResolvedConfig::default(), "testkey1...".to_string())
}

pub fn sample_user(id: u64, name: &str, email: &str, company: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.to_lowercase(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        website: "example.com".to_string(),
        company: Company {
            name: company.to_string(),
        },
        address: Address {
            city: "Springfield".to_string(),
        },
    }
}

/// Three users; only Ana matches "acme".
pub fn sample_users() -> Vec<User> {
    vec![
        sample_user(1, "Ana", "ana@acme.io", "Acme Corp"),
        sample_user(2, "Bo", "bo@globex.com", "Globex"),
        sample_user(3, "Cy", "cy@initech.com", "Initech"),
    ]
}

pub fn sample_image(id: &str, species: Species) -> AnimalImage {
    AnimalImage {
        id: id.to_string(),
        url: format!("https://img.example/{id}.jpg"),
        species,
    }
}

pub fn sample_report(city: &str) -> WeatherReport {
    WeatherReport {
        current: CurrentWeather {
            name: city.to_string(),
            country: Some("XX".to_string()),
            temp: 21.4,
            feels_like: 20.9,
            humidity: 60,
            pressure: 1012,
            main: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            icon: "03d".to_string(),
            wind_speed: 2.1,
            visibility: 10_000,
        },
        forecast: vec![ForecastEntry {
            dt: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            temp: 23.0,
            main: "Clear".to_string(),
            icon: "01d".to_string(),
        }],
        is_demo: false,
    }
}

pub fn sample_profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: format!("https://avatars.example/{login}"),
        bio: Some("Tentacles everywhere".to_string()),
        public_repos: 2,
        followers: 10,
        following: 0,
        html_url: format!("https://github.com/{login}"),
        blog: None,
    }
}

pub fn sample_repo(id: u64, name: &str, description: Option<&str>, stars: u32) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        fork: false,
        stargazers_count: stars,
        forks_count: 0,
        language: Some("Rust".to_string()),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        html_url: format!("https://github.com/octocat/{name}"),
        homepage: None,
    }
}
