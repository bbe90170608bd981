//! # Page Stores
//!
//! One store per route. A store is built fresh on every navigation and
//! dropped when the user leaves, so nothing leaks from one visit to the next.
//!
//! Stores never perform I/O. They answer each action with a [`Command`];
//! `update()` turns fetch commands into effects tagged with the page epoch.

pub mod about;
pub mod animals;
pub mod contact;
pub mod github;
pub mod projects;
pub mod skills;
pub mod users;
pub mod weather;

use log::debug;

use crate::core::action::{Action, FetchKind, Payload};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::Ticket;
use crate::core::remote_list::{RemoteListView, Searchable};
use crate::core::route::Route;

pub use about::AboutPage;
pub use animals::AnimalsPage;
pub use contact::ContactPage;
pub use github::GitHubPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;
pub use users::UsersPage;
pub use weather::WeatherPage;

/// What a page store asks of the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Fetch(Ticket, FetchKind),
    Navigate(Route),
    /// Show a transient message in the status bar.
    Notify(String),
}

pub enum Page {
    About(AboutPage),
    Skills(SkillsPage),
    Projects(ProjectsPage),
    Contact(ContactPage),
    Users(UsersPage),
    GitHub(GitHubPage),
    Animals(AnimalsPage),
    Weather(WeatherPage),
}

impl Page {
    pub fn build(route: Route, config: &ResolvedConfig, masked_key: &str) -> Page {
        match route {
            Route::About => Page::About(AboutPage::new(config.profile.clone())),
            Route::Skills => Page::Skills(SkillsPage::new()),
            Route::Projects => Page::Projects(ProjectsPage::new()),
            Route::Contact => Page::Contact(ContactPage::new(
                &config.profile,
                &config.github_username,
            )),
            Route::Users => Page::Users(UsersPage::new()),
            Route::GitHub => Page::GitHub(GitHubPage::new(config.github_username.clone())),
            Route::Animals => Page::Animals(AnimalsPage::new()),
            Route::Weather => Page::Weather(WeatherPage::new(
                &config.default_city,
                config.demo_fallback,
                masked_key.to_string(),
            )),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::About(_) => Route::About,
            Page::Skills(_) => Route::Skills,
            Page::Projects(_) => Route::Projects,
            Page::Contact(_) => Route::Contact,
            Page::Users(_) => Route::Users,
            Page::GitHub(_) => Route::GitHub,
            Page::Animals(_) => Route::Animals,
            Page::Weather(_) => Route::Weather,
        }
    }

    /// Called once after the page is built; remote pages start loading.
    pub fn enter(&mut self) -> Command {
        match self {
            Page::Users(page) => page.enter(),
            Page::GitHub(page) => page.enter(),
            Page::Animals(page) => page.enter(),
            Page::Weather(page) => page.enter(),
            _ => Command::None,
        }
    }

    /// True while anything on the page is waiting on the network.
    pub fn is_busy(&self) -> bool {
        match self {
            Page::Users(page) => page.list.state().is_loading(),
            Page::GitHub(page) => page.repos.state().is_loading(),
            Page::Animals(page) => page.view.state().is_loading(),
            Page::Weather(page) => {
                page.view.state().is_loading() || page.locating.is_some() || page.probing.is_some()
            }
            _ => false,
        }
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        match self {
            Page::About(page) => page.handle(action),
            Page::Skills(page) => page.handle(action),
            Page::Projects(page) => page.handle(action),
            Page::Contact(page) => page.handle(action),
            Page::Users(page) => page.handle(action),
            Page::GitHub(page) => page.handle(action),
            Page::Animals(page) => page.handle(action),
            Page::Weather(page) => page.handle(action),
        }
    }

    /// Routes a finished fetch to the store that asked for it.
    pub fn settle(&mut self, ticket: Ticket, payload: Payload) -> Command {
        match (self, payload) {
            (Page::Users(page), Payload::Users(result)) => {
                page.list.settle(ticket, result);
                Command::None
            }
            (Page::GitHub(page), Payload::Repos(result)) => {
                page.settle(ticket, result);
                Command::None
            }
            (Page::Animals(page), Payload::Animal(result)) => {
                page.view.settle(ticket, result);
                Command::None
            }
            (Page::Weather(page), Payload::Weather(result)) => {
                page.settle_weather(ticket, result);
                Command::None
            }
            (Page::Weather(page), Payload::Located(result)) => page.settle_located(ticket, result),
            (Page::Weather(page), Payload::Probe(result)) => page.settle_probe(ticket, result),
            (page, payload) => {
                debug!(
                    "Ignoring {:?} result {ticket} on {} page",
                    payload,
                    page.route()
                );
                Command::None
            }
        }
    }
}

/// Moves `selected` one step within `len` items, clamping at both ends.
pub(crate) fn step_selection(selected: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}

/// Applies text-editing actions to `text`. Returns true if `action` was one.
pub(crate) fn edit_text(text: &mut String, action: &Action) -> bool {
    match action {
        Action::Input(c) => {
            text.push(*c);
            true
        }
        Action::Backspace => {
            text.pop();
            true
        }
        Action::Paste(pasted) => {
            text.extend(pasted.chars().filter(|c| !c.is_control()));
            true
        }
        _ => false,
    }
}

/// Search-box editing and row selection shared by the list pages.
///
/// Returns true when `action` asks for the list to be reloaded.
pub(crate) fn list_input<T: Searchable>(
    list: &mut RemoteListView<T>,
    selected: &mut usize,
    action: &Action,
) -> bool {
    match action {
        Action::Refresh => return true,
        Action::SelectNext => *selected = step_selection(*selected, list.visible().len(), true),
        Action::SelectPrev => *selected = step_selection(*selected, list.visible().len(), false),
        _ => {
            let mut term = list.filter().to_string();
            if edit_text(&mut term, action) {
                list.set_filter(term);
                *selected = 0;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_selection_clamps() {
        assert_eq!(step_selection(0, 3, false), 0);
        assert_eq!(step_selection(2, 3, true), 2);
        assert_eq!(step_selection(1, 3, true), 2);
        assert_eq!(step_selection(5, 0, true), 0);
    }

    #[test]
    fn test_edit_text() {
        let mut text = String::from("ab");
        assert!(edit_text(&mut text, &Action::Input('c')));
        assert!(edit_text(&mut text, &Action::Backspace));
        assert!(edit_text(&mut text, &Action::Paste("d\ne".to_string())));
        assert!(!edit_text(&mut text, &Action::Submit));
        assert_eq!(text, "abde");
    }

    #[test]
    fn test_every_route_builds_its_page() {
        let config = ResolvedConfig::default();
        for route in Route::ALL {
            assert_eq!(Page::build(route, &config, "k...").route(), route);
        }
    }
}
