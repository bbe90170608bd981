//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User presses F7? That's `Action::Navigate(Route::Animals)`.
//! A provider answers? That's `Action::Fetched { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` describing the I/O the adapter should
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Stale results
//!
//! Every fetch carries the page epoch it was started in and the ticket its
//! view-model issued. A result from an older epoch (the user navigated away)
//! is dropped here; a superseded ticket is dropped by the view-model.

use log::{debug, info};

use crate::core::fetch::{FetchError, Ticket};
use crate::core::pages::{Command, Page};
use crate::core::route::Route;
use crate::core::state::App;
use crate::providers::types::{
    AnimalImage, CurrentWeather, Place, RepoListing, Species, User, WeatherReport, WeatherSelector,
};

#[derive(Debug)]
pub enum Action {
    Quit,
    Navigate(Route),
    NextPage,
    PrevPage,

    // Page input
    Input(char),
    Backspace,
    Paste(String),
    Submit,
    Refresh,
    FocusNext,
    FocusPrev,
    SelectNext,
    SelectPrev,
    CycleLeft,
    CycleRight,
    AddFavorite,
    RemoveFavorite,
    Locate,
    Probe,
    ToggleTheme,

    /// A background fetch finished.
    Fetched {
        epoch: u64,
        ticket: Ticket,
        payload: Payload,
    },
}

/// What a background fetch should do.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchKind {
    Users,
    Repos,
    Animal(Species),
    Weather(WeatherSelector),
    /// Locate the user, then resolve the position to a place name.
    Locate,
    /// Connectivity check against a well-known city.
    Probe,
}

/// The outcome of a background fetch, one variant per [`FetchKind`].
#[derive(Debug)]
pub enum Payload {
    Users(Result<Vec<User>, FetchError>),
    Repos(Result<RepoListing, FetchError>),
    Animal(Result<AnimalImage, FetchError>),
    Weather(Result<WeatherReport, FetchError>),
    Located(Result<Place, FetchError>),
    Probe(Result<CurrentWeather, FetchError>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub epoch: u64,
    pub ticket: Ticket,
    pub kind: FetchKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Fetch(FetchRequest),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Navigate(route) => navigate(app, route),
        Action::NextPage => navigate(app, app.route().next()),
        Action::PrevPage => navigate(app, app.route().prev()),
        Action::ToggleTheme => {
            app.dark_mode = !app.dark_mode;
            app.status_message = if app.dark_mode {
                "Dark mode".to_string()
            } else {
                "Light mode".to_string()
            };
            Effect::None
        }
        Action::Fetched {
            epoch,
            ticket,
            payload,
        } => {
            if epoch != app.epoch {
                debug!(
                    "Dropping result {ticket} from page epoch {epoch} (now {})",
                    app.epoch
                );
                return Effect::None;
            }
            let command = app.page.settle(ticket, payload);
            apply(app, command)
        }
        other => {
            let command = app.page.handle(&other);
            apply(app, command)
        }
    }
}

/// Discards the current page store and builds a fresh one for `route`.
fn navigate(app: &mut App, route: Route) -> Effect {
    app.epoch += 1;
    info!("Navigating to {} (epoch {})", route, app.epoch);
    app.page = Page::build(route, &app.config, &app.masked_key);
    app.status_message = route.title().to_string();
    let command = app.page.enter();
    apply(app, command)
}

fn apply(app: &mut App, command: Command) -> Effect {
    match command {
        Command::None => Effect::None,
        Command::Fetch(ticket, kind) => Effect::Fetch(FetchRequest {
            epoch: app.epoch,
            ticket,
            kind,
        }),
        Command::Navigate(route) => navigate(app, route),
        Command::Notify(message) => {
            app.status_message = message;
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::FetchState;
    use crate::core::pages::weather::PROBE_CITY;
    use crate::test_support::{sample_image, sample_report, sample_users, test_app};

    fn expect_fetch(effect: Effect) -> FetchRequest {
        match effect {
            Effect::Fetch(request) => request,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_navigate_to_static_page_needs_no_fetch() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Navigate(Route::Skills));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.route(), Route::Skills);
        assert_eq!(app.status_message, "Skills");
    }

    #[test]
    fn test_navigate_to_users_starts_a_load() {
        let mut app = test_app();
        let request = expect_fetch(update(&mut app, Action::Navigate(Route::Users)));
        assert_eq!(request.kind, FetchKind::Users);
        assert_eq!(request.epoch, app.epoch);
    }

    #[test]
    fn test_next_page_wraps() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Weather));
        update(&mut app, Action::NextPage);
        assert_eq!(app.route(), Route::About);
        update(&mut app, Action::PrevPage);
        assert_eq!(app.route(), Route::Weather);
    }

    #[test]
    fn test_result_from_previous_page_is_dropped() {
        let mut app = test_app();
        let users = expect_fetch(update(&mut app, Action::Navigate(Route::Users)));
        update(&mut app, Action::Navigate(Route::Users));

        let effect = update(
            &mut app,
            Action::Fetched {
                epoch: users.epoch,
                ticket: users.ticket,
                payload: Payload::Users(Ok(sample_users())),
            },
        );
        assert_eq!(effect, Effect::None);
        match &app.page {
            Page::Users(page) => assert!(page.list.state().is_loading()),
            _ => panic!("expected the users page"),
        }
    }

    #[test]
    fn test_users_result_settles_current_page() {
        let mut app = test_app();
        let request = expect_fetch(update(&mut app, Action::Navigate(Route::Users)));
        update(
            &mut app,
            Action::Fetched {
                epoch: request.epoch,
                ticket: request.ticket,
                payload: Payload::Users(Ok(sample_users())),
            },
        );
        for c in "acme".chars() {
            update(&mut app, Action::Input(c));
        }
        match &app.page {
            Page::Users(page) => {
                let names: Vec<&str> = page.list.visible().iter().map(|u| u.name.as_str()).collect();
                assert_eq!(names, vec!["Ana"]);
            }
            _ => panic!("expected the users page"),
        }
    }

    #[test]
    fn test_rapid_species_toggles_show_only_last() {
        let mut app = test_app();
        let first = expect_fetch(update(&mut app, Action::Navigate(Route::Animals)));
        let mut requests = vec![first];
        for _ in 0..3 {
            requests.push(expect_fetch(update(&mut app, Action::CycleRight)));
        }
        let species: Vec<FetchKind> = requests.iter().map(|r| r.kind.clone()).collect();
        assert_eq!(
            species,
            vec![
                FetchKind::Animal(Species::Cat),
                FetchKind::Animal(Species::Dog),
                FetchKind::Animal(Species::Cat),
                FetchKind::Animal(Species::Dog),
            ]
        );

        // Resolve newest first, then the stale ones.
        for (i, request) in requests.iter().enumerate().rev() {
            let species = if i % 2 == 0 { Species::Cat } else { Species::Dog };
            update(
                &mut app,
                Action::Fetched {
                    epoch: request.epoch,
                    ticket: request.ticket,
                    payload: Payload::Animal(Ok(sample_image(&format!("img-{i}"), species))),
                },
            );
        }

        match &app.page {
            Page::Animals(page) => {
                let shown = page.view.current().unwrap();
                assert_eq!(shown.id, "img-3");
                assert_eq!(shown.species, Species::Dog);
            }
            _ => panic!("expected the animals page"),
        }
    }

    #[test]
    fn test_weather_not_found_falls_back_to_demo() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Weather));
        for c in "Nowhere123".chars() {
            update(&mut app, Action::Input(c));
        }
        let request = expect_fetch(update(&mut app, Action::Submit));
        assert_eq!(
            request.kind,
            FetchKind::Weather(WeatherSelector::City("Nowhere123".to_string()))
        );

        update(
            &mut app,
            Action::Fetched {
                epoch: request.epoch,
                ticket: request.ticket,
                payload: Payload::Weather(Err(FetchError::Status {
                    status: 404,
                    body: "city not found".to_string(),
                })),
            },
        );

        match &app.page {
            Page::Weather(page) => {
                let report = page.view.current().unwrap();
                assert!(report.is_demo);
                assert_eq!(report.current.name, "Nowhere123");
                assert_eq!(page.view.notice(), Some("City \"Nowhere123\" not found"));
            }
            _ => panic!("expected the weather page"),
        }
    }

    #[test]
    fn test_probe_reports_through_status() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Weather));
        let request = expect_fetch(update(&mut app, Action::Probe));
        assert_eq!(request.kind, FetchKind::Probe);

        update(
            &mut app,
            Action::Fetched {
                epoch: request.epoch,
                ticket: request.ticket,
                payload: Payload::Probe(Ok(sample_report(PROBE_CITY).current)),
            },
        );
        assert!(app.status_message.contains("API test passed"));
        assert!(app.status_message.contains(PROBE_CITY));
    }

    #[test]
    fn test_about_call_to_action_navigates() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::About));
        update(&mut app, Action::CycleRight);
        update(&mut app, Action::Submit);
        assert_eq!(app.route(), Route::Contact);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        let before = app.dark_mode;
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.dark_mode, !before);
    }

    #[test]
    fn test_failed_users_load_can_be_retried() {
        let mut app = test_app();
        let request = expect_fetch(update(&mut app, Action::Navigate(Route::Users)));
        update(
            &mut app,
            Action::Fetched {
                epoch: request.epoch,
                ticket: request.ticket,
                payload: Payload::Users(Err(FetchError::Transport("offline".to_string()))),
            },
        );
        match &app.page {
            Page::Users(page) => assert!(matches!(page.list.state(), FetchState::Failed(_))),
            _ => panic!("expected the users page"),
        }
        let retry = expect_fetch(update(&mut app, Action::Refresh));
        assert_eq!(retry.kind, FetchKind::Users);
        assert!(retry.ticket > request.ticket);
    }
}
