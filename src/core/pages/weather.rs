//! # Weather Page
//!
//! Current conditions and a 5-day forecast for a city typed by the user or
//! found through "use my location", plus a list of favorite places.
//!
//! When a lookup fails the page still shows something: a demo report for the
//! requested city, flagged `is_demo`, with the failure reason alongside it.
//! `weather.demo_fallback = false` turns the substitution off.
//!
//! While an error is showing, a diagnostics panel offers the masked API key,
//! a retest of the current city and a connectivity probe against London.

use chrono::{DateTime, Duration, Utc};
use log::{info, warn};

use crate::core::action::{Action, FetchKind};
use crate::core::fallback::FallbackPolicy;
use crate::core::favorites::Identified;
use crate::core::fetch::{FailureKind, FetchError, RequestTracker, Ticket};
use crate::core::single::SingleResourceRefresh;
use crate::providers::types::{
    CurrentWeather, ForecastEntry, Place, WeatherReport, WeatherSelector,
};

use super::{Command, edit_text, step_selection};

/// City used by the connectivity probe.
pub const PROBE_CITY: &str = "London";

// ============================================================================
// Failure reasons and the demo dataset
// ============================================================================

/// User-facing reason for a failed lookup of `city`.
pub fn describe_weather_failure(city: &str, error: &FetchError) -> String {
    match error.kind() {
        FailureKind::NotFound => format!("City \"{city}\" not found"),
        FailureKind::Unauthorized => "Invalid or expired API key".to_string(),
        FailureKind::RateLimited => {
            "API rate limit exceeded. Try again in a few minutes".to_string()
        }
        FailureKind::Network => "Network error. Check your internet connection".to_string(),
        FailureKind::Other => error.to_string(),
    }
}

/// Placeholder report for `city`, with five daily forecast entries from `now`.
pub fn demo_report(city: &str, now: DateTime<Utc>) -> WeatherReport {
    let days = [
        (29.0, "Sunny", "01d"),
        (27.0, "Clouds", "02d"),
        (26.0, "Rain", "10d"),
        (30.0, "Clear", "01d"),
        (28.0, "Clouds", "03d"),
    ];
    let forecast = days
        .iter()
        .enumerate()
        .map(|(i, (temp, main, icon))| ForecastEntry {
            dt: now + Duration::days(i as i64),
            temp: *temp,
            main: main.to_string(),
            icon: icon.to_string(),
        })
        .collect();

    WeatherReport {
        current: CurrentWeather {
            name: city.to_string(),
            country: None,
            temp: 28.0,
            feels_like: 32.0,
            humidity: 75,
            pressure: 1013,
            main: "Clear".to_string(),
            description: "clear sky (demo data)".to_string(),
            icon: "01d".to_string(),
            wind_speed: 3.5,
            visibility: 10_000,
        },
        forecast,
        is_demo: true,
    }
}

/// Substitutes the demo report for every failure, when enabled.
pub struct WeatherFallback<'a> {
    pub city: &'a str,
    pub enabled: bool,
    pub now: DateTime<Utc>,
}

impl FallbackPolicy<WeatherReport> for WeatherFallback<'_> {
    fn reason(&self, error: &FetchError) -> String {
        describe_weather_failure(self.city, error)
    }

    fn placeholder(&self, _error: &FetchError) -> Option<WeatherReport> {
        self.enabled.then(|| demo_report(self.city, self.now))
    }
}

// ============================================================================
// Presentation helpers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    VeryHot,
    Hot,
    Warm,
    Mild,
    Cool,
    Cold,
}

impl TemperatureBand {
    pub fn from_celsius(temp: f64) -> Self {
        if temp >= 35.0 {
            TemperatureBand::VeryHot
        } else if temp >= 30.0 {
            TemperatureBand::Hot
        } else if temp >= 25.0 {
            TemperatureBand::Warm
        } else if temp >= 20.0 {
            TemperatureBand::Mild
        } else if temp >= 15.0 {
            TemperatureBand::Cool
        } else {
            TemperatureBand::Cold
        }
    }
}

/// What the diagnostics panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<'a> {
    pub masked_key: &'a str,
    pub error: &'a str,
    pub city: String,
}

// ============================================================================
// Page Store
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherFocus {
    Search,
    Favorites,
}

pub struct WeatherPage {
    pub view: SingleResourceRefresh<WeatherSelector, WeatherReport>,
    /// Search box contents.
    pub input: String,
    pub focus: WeatherFocus,
    pub favorite_selected: usize,
    pub masked_key: String,
    /// Ticket of the location lookup in flight, if any.
    pub locating: Option<Ticket>,
    pub location_error: Option<String>,
    pub probing: Option<Ticket>,
    demo_fallback: bool,
    locate_tracker: RequestTracker,
    probe_tracker: RequestTracker,
}

impl WeatherPage {
    pub fn new(default_city: &str, demo_fallback: bool, masked_key: String) -> Self {
        Self {
            view: SingleResourceRefresh::new(WeatherSelector::City(default_city.to_string())),
            input: String::new(),
            focus: WeatherFocus::Search,
            favorite_selected: 0,
            masked_key,
            locating: None,
            location_error: None,
            probing: None,
            demo_fallback,
            locate_tracker: RequestTracker::new(),
            probe_tracker: RequestTracker::new(),
        }
    }

    pub fn enter(&mut self) -> Command {
        self.refetch()
    }

    fn refetch(&mut self) -> Command {
        let selector = self.view.selector().clone();
        Command::Fetch(self.view.fetch_current(), FetchKind::Weather(selector))
    }

    fn show_city(&mut self, city: String) -> Command {
        let selector = WeatherSelector::City(city);
        Command::Fetch(
            self.view.change_selector(selector.clone()),
            FetchKind::Weather(selector),
        )
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        match action {
            Action::FocusNext | Action::FocusPrev => {
                self.focus = match self.focus {
                    WeatherFocus::Search => WeatherFocus::Favorites,
                    WeatherFocus::Favorites => WeatherFocus::Search,
                };
                Command::None
            }
            Action::Submit => match self.focus {
                WeatherFocus::Search => self.search(),
                WeatherFocus::Favorites => self.open_selected_favorite(),
            },
            Action::Refresh => {
                self.locating = None;
                self.location_error = None;
                self.refetch()
            }
            Action::Locate => self.locate(),
            Action::Probe => self.probe(),
            Action::AddFavorite => self.add_favorite(),
            Action::RemoveFavorite => self.remove_selected_favorite(),
            Action::SelectNext => {
                self.favorite_selected =
                    step_selection(self.favorite_selected, self.view.favorites().len(), true);
                Command::None
            }
            Action::SelectPrev => {
                self.favorite_selected =
                    step_selection(self.favorite_selected, self.view.favorites().len(), false);
                Command::None
            }
            _ if self.focus == WeatherFocus::Search => {
                edit_text(&mut self.input, action);
                Command::None
            }
            _ => Command::None,
        }
    }

    /// Looks up the typed city. A blank search does nothing.
    pub fn search(&mut self) -> Command {
        let city = self.input.trim().to_string();
        if city.is_empty() {
            return Command::Notify("Type a city name first".to_string());
        }
        // A typed search wins over a location lookup still in flight.
        self.locating = None;
        self.location_error = None;
        self.show_city(city)
    }

    fn open_selected_favorite(&mut self) -> Command {
        let Some(city) = self
            .view
            .favorites()
            .get(self.favorite_selected)
            .map(|report| report.current.name.clone())
        else {
            return Command::None;
        };
        self.input = city.clone();
        self.locating = None;
        self.show_city(city)
    }

    fn add_favorite(&mut self) -> Command {
        let Some(name) = self.view.current().map(|r| r.current.name.clone()) else {
            return Command::None;
        };
        if self.is_showing_demo() {
            return Command::Notify(format!("Demo data for {name} can't be saved as a favorite"));
        }
        if self.view.add_to_favorites() {
            Command::Notify(format!("Added {name} to favorites"))
        } else {
            Command::Notify(format!("{name} is already a favorite"))
        }
    }

    fn remove_selected_favorite(&mut self) -> Command {
        let Some(report) = self.view.favorites().get(self.favorite_selected).cloned() else {
            return Command::None;
        };
        self.view.remove_from_favorites(&report.id());
        self.favorite_selected = self
            .favorite_selected
            .min(self.view.favorites().len().saturating_sub(1));
        Command::Notify(format!("Removed {} from favorites", report.current.name))
    }

    pub fn locate(&mut self) -> Command {
        let ticket = self.locate_tracker.issue();
        self.locating = Some(ticket);
        self.location_error = None;
        Command::Fetch(ticket, FetchKind::Locate)
    }

    pub fn probe(&mut self) -> Command {
        let ticket = self.probe_tracker.issue();
        self.probing = Some(ticket);
        info!("Probing weather API with {PROBE_CITY}");
        Command::Fetch(ticket, FetchKind::Probe)
    }

    pub fn settle_weather(&mut self, ticket: Ticket, result: Result<WeatherReport, FetchError>) -> bool {
        let city = self.view.selector().label();
        if let Err(e) = &result
            && e.kind() == FailureKind::Unauthorized
        {
            warn!("Weather API rejected the configured key ({}): {}", self.masked_key, e);
        }
        let policy = WeatherFallback {
            city: &city,
            enabled: self.demo_fallback,
            now: Utc::now(),
        };
        self.view.settle_with_fallback(ticket, result, &policy)
    }

    /// A resolved position becomes a city search; a failure is reported.
    pub fn settle_located(&mut self, ticket: Ticket, result: Result<Place, FetchError>) -> Command {
        if self.locating != Some(ticket) {
            return Command::None;
        }
        self.locating = None;
        match result {
            Ok(place) => {
                info!("Location resolved to {place}");
                self.input = place.to_string();
                self.show_city(place.name)
            }
            Err(e) => {
                let reason = match e {
                    FetchError::Permission | FetchError::Unavailable | FetchError::Timeout => {
                        e.to_string()
                    }
                    other => format!("Could not get weather for your location: {other}"),
                };
                self.location_error = Some(reason.clone());
                Command::Notify(reason)
            }
        }
    }

    pub fn settle_probe(&mut self, ticket: Ticket, result: Result<CurrentWeather, FetchError>) -> Command {
        if self.probing != Some(ticket) {
            return Command::None;
        }
        self.probing = None;
        match result {
            Ok(current) => {
                info!("Weather API probe succeeded");
                Command::Notify(format!(
                    "API test passed: {} {:.0}°C",
                    current.name, current.temp
                ))
            }
            Err(e) => {
                warn!("Weather API probe failed: {e}");
                Command::Notify(format!("API test failed: {e}"))
            }
        }
    }

    /// Present while the last lookup failed, whether or not demo data is shown.
    pub fn diagnostics(&self) -> Option<Diagnostics<'_>> {
        self.view.notice().map(|error| Diagnostics {
            masked_key: &self.masked_key,
            error,
            city: self.view.selector().label(),
        })
    }

    pub fn is_showing_demo(&self) -> bool {
        self.view.current().is_some_and(|r| r.is_demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::FetchState;
    use crate::test_support::sample_report;

    fn status(code: u16) -> FetchError {
        FetchError::Status {
            status: code,
            body: String::new(),
        }
    }

    fn page() -> WeatherPage {
        WeatherPage::new("Hanoi", true, "abcd1234...".to_string())
    }

    fn ticket_of(command: Command) -> Ticket {
        match command {
            Command::Fetch(ticket, _) => ticket,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    fn type_city(page: &mut WeatherPage, city: &str) {
        for c in city.chars() {
            page.handle(&Action::Input(c));
        }
    }

    macro_rules! failure_reason_tests {
        ($($name:ident: $error:expr => $expected:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(describe_weather_failure("Atlantis", &$error), $expected);
                }
            )*
        };
    }

    failure_reason_tests! {
        test_reason_not_found: status(404) => "City \"Atlantis\" not found",
        test_reason_unauthorized: status(401) => "Invalid or expired API key",
        test_reason_rate_limited: status(429) => "API rate limit exceeded. Try again in a few minutes",
        test_reason_network: FetchError::Transport("dns".to_string()) => "Network error. Check your internet connection",
        test_reason_other: status(500) => "API error (HTTP 500)",
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(TemperatureBand::from_celsius(35.0), TemperatureBand::VeryHot);
        assert_eq!(TemperatureBand::from_celsius(34.9), TemperatureBand::Hot);
        assert_eq!(TemperatureBand::from_celsius(25.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_celsius(20.5), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_celsius(15.0), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::from_celsius(-3.0), TemperatureBand::Cold);
    }

    #[test]
    fn test_demo_report_has_five_daily_entries() {
        let now = Utc::now();
        let report = demo_report("Hue", now);
        assert!(report.is_demo);
        assert_eq!(report.current.name, "Hue");
        assert_eq!(report.forecast.len(), 5);
        assert_eq!(report.forecast[4].dt - report.forecast[0].dt, Duration::days(4));
    }

    #[test]
    fn test_every_failure_falls_back_with_reason() {
        for error in [status(404), status(401), status(429), status(503), FetchError::Transport("x".into())] {
            let mut page = page();
            let ticket = ticket_of(page.enter());
            let expected = describe_weather_failure("Hanoi", &error);
            assert!(page.settle_weather(ticket, Err(error)));
            assert!(page.is_showing_demo());
            assert_eq!(page.view.notice(), Some(expected.as_str()));
            assert!(page.diagnostics().is_some());
        }
    }

    #[test]
    fn test_fallback_can_be_disabled() {
        let mut page = WeatherPage::new("Hanoi", false, String::new());
        let ticket = ticket_of(page.enter());
        page.settle_weather(ticket, Err(status(404)));
        assert_eq!(
            page.view.state(),
            &FetchState::Failed("City \"Hanoi\" not found".to_string())
        );
    }

    #[test]
    fn test_live_result_clears_diagnostics() {
        let mut page = page();
        let ticket = ticket_of(page.enter());
        page.settle_weather(ticket, Err(status(500)));
        let ticket = ticket_of(page.handle(&Action::Refresh));
        page.settle_weather(ticket, Ok(sample_report("Hanoi")));
        assert!(!page.is_showing_demo());
        assert!(page.diagnostics().is_none());
    }

    #[test]
    fn test_city_a_then_b_shows_b_in_either_order() {
        for b_first in [true, false] {
            let mut page = page();
            page.enter();
            type_city(&mut page, "Paris");
            let a = ticket_of(page.handle(&Action::Submit));
            page.input.clear();
            type_city(&mut page, "Rome");
            let b = ticket_of(page.handle(&Action::Submit));

            let results = [(a, sample_report("Paris")), (b, sample_report("Rome"))];
            let order: Vec<_> = if b_first {
                results.into_iter().rev().collect()
            } else {
                results.into_iter().collect()
            };
            for (ticket, report) in order {
                page.settle_weather(ticket, Ok(report));
            }
            assert_eq!(page.view.current().map(|r| r.current.name.as_str()), Some("Rome"));
        }
    }

    #[test]
    fn test_blank_search_is_rejected() {
        let mut page = page();
        type_city(&mut page, "   ");
        assert_eq!(
            page.handle(&Action::Submit),
            Command::Notify("Type a city name first".to_string())
        );
    }

    #[test]
    fn test_location_resolves_to_city_search() {
        let mut page = page();
        let ticket = ticket_of(page.handle(&Action::Locate));
        let command = page.settle_located(
            ticket,
            Ok(Place {
                name: "Da Nang".to_string(),
                country: Some("VN".to_string()),
            }),
        );
        assert!(matches!(
            command,
            Command::Fetch(_, FetchKind::Weather(WeatherSelector::City(ref c))) if c == "Da Nang"
        ));
        assert_eq!(page.input, "Da Nang, VN");
        assert!(page.locating.is_none());
    }

    #[test]
    fn test_location_errors_are_distinct() {
        let mut reasons = Vec::new();
        for error in [FetchError::Permission, FetchError::Unavailable, FetchError::Timeout] {
            let mut page = page();
            let ticket = ticket_of(page.locate());
            page.settle_located(ticket, Err(error));
            reasons.push(page.location_error.clone().unwrap());
        }
        reasons.dedup();
        assert_eq!(reasons.len(), 3);
    }

    #[test]
    fn test_typed_search_cancels_pending_location() {
        let mut page = page();
        let locate = ticket_of(page.locate());
        type_city(&mut page, "Oslo");
        page.handle(&Action::Submit);
        let command = page.settle_located(
            locate,
            Ok(Place {
                name: "Hue".to_string(),
                country: None,
            }),
        );
        assert_eq!(command, Command::None);
        assert_eq!(page.view.selector(), &WeatherSelector::City("Oslo".to_string()));
    }

    #[test]
    fn test_refresh_cancels_pending_location() {
        let mut page = page();
        let ticket = ticket_of(page.enter());
        page.settle_weather(ticket, Ok(sample_report("Hanoi")));

        let locate = ticket_of(page.locate());
        let refresh = ticket_of(page.handle(&Action::Refresh));
        assert!(page.locating.is_none());
        page.settle_weather(refresh, Ok(sample_report("Hanoi")));

        let command = page.settle_located(
            locate,
            Ok(Place {
                name: "Hue".to_string(),
                country: None,
            }),
        );
        assert_eq!(command, Command::None);
        assert_eq!(page.view.selector(), &WeatherSelector::City("Hanoi".to_string()));
        assert_eq!(page.view.current().map(|r| r.current.name.as_str()), Some("Hanoi"));
    }

    #[test]
    fn test_demo_report_cannot_be_favorited() {
        let mut page = WeatherPage::new("Nowhere123", true, String::new());
        let ticket = ticket_of(page.enter());
        page.settle_weather(ticket, Err(status(404)));
        assert!(page.is_showing_demo());

        assert_eq!(
            page.handle(&Action::AddFavorite),
            Command::Notify("Demo data for Nowhere123 can't be saved as a favorite".to_string())
        );
        assert!(page.view.favorites().is_empty());
    }

    #[test]
    fn test_favorites_open_their_city() {
        let mut page = page();
        let ticket = ticket_of(page.enter());
        page.settle_weather(ticket, Ok(sample_report("Hanoi")));
        page.handle(&Action::AddFavorite);
        assert_eq!(
            page.handle(&Action::AddFavorite),
            Command::Notify("Hanoi is already a favorite".to_string())
        );

        page.handle(&Action::FocusNext);
        assert_eq!(page.focus, WeatherFocus::Favorites);
        let command = page.handle(&Action::Submit);
        assert!(matches!(
            command,
            Command::Fetch(_, FetchKind::Weather(WeatherSelector::City(ref c))) if c == "Hanoi"
        ));

        page.handle(&Action::RemoveFavorite);
        assert!(page.view.favorites().is_empty());
    }

    #[test]
    fn test_stale_probe_is_ignored() {
        let mut page = page();
        let first = ticket_of(page.probe());
        let second = ticket_of(page.probe());
        assert_eq!(page.settle_probe(first, Err(status(401))), Command::None);
        assert!(page.probing.is_some());
        assert!(matches!(
            page.settle_probe(second, Err(status(401))),
            Command::Notify(ref m) if m.starts_with("API test failed")
        ));
    }
}
