//! The route table: eight pages, each with a path and a title.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    About,
    Skills,
    Projects,
    Contact,
    Users,
    GitHub,
    Animals,
    Weather,
}

impl Route {
    /// Navigation order, as shown in the nav bar.
    pub const ALL: [Route; 8] = [
        Route::About,
        Route::Skills,
        Route::Projects,
        Route::Contact,
        Route::Users,
        Route::GitHub,
        Route::Animals,
        Route::Weather,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::About => "/",
            Route::Skills => "/skills",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
            Route::Users => "/users",
            Route::GitHub => "/github",
            Route::Animals => "/animals",
            Route::Weather => "/weather",
        }
    }

    /// Accepts `/skills`, `skills` and a trailing slash; case-insensitive.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_matches('/').to_ascii_lowercase();
        Route::ALL
            .into_iter()
            .find(|r| r.path().trim_start_matches('/') == trimmed)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::About => "About",
            Route::Skills => "Skills",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
            Route::Users => "Users",
            Route::GitHub => "GitHub",
            Route::Animals => "Animals",
            Route::Weather => "Weather",
        }
    }

    pub fn index(self) -> usize {
        Route::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Route> {
        Route::ALL.get(index).copied()
    }

    pub fn next(self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn prev(self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_round_trips_every_route() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_is_lenient() {
        assert_eq!(Route::from_path("weather"), Some(Route::Weather));
        assert_eq!(Route::from_path("/GitHub/"), Some(Route::GitHub));
        assert_eq!(Route::from_path(""), Some(Route::About));
        assert_eq!(Route::from_path("/blog"), None);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Route::Weather.next(), Route::About);
        assert_eq!(Route::About.prev(), Route::Weather);
        assert_eq!(Route::Users.next(), Route::GitHub);
    }
}
