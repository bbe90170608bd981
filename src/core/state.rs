//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── config: ResolvedConfig    // settings, passed into every page
//! ├── page: Page                // the active page store
//! ├── epoch: u64                // bumped on every navigation
//! ├── status_message: String    // status bar text and notifications
//! ├── dark_mode: bool           // theme
//! └── masked_key: String        // weather API key, display-safe
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::pages::Page;
use crate::core::route::Route;

pub struct App {
    pub config: ResolvedConfig,
    pub page: Page,
    /// Identifies the lifetime of `page`. Results tagged with another epoch
    /// belong to a page that no longer exists.
    pub epoch: u64,
    pub status_message: String,
    pub dark_mode: bool,
    pub masked_key: String,
}

impl App {
    /// Builds the start page without starting its fetches; dispatch
    /// `Action::Navigate(app.route())` to enter it.
    pub fn new(config: ResolvedConfig, masked_key: String) -> Self {
        let page = Page::build(config.start_page, &config, &masked_key);
        Self {
            dark_mode: config.dark_mode,
            config,
            page,
            epoch: 0,
            status_message: String::from("Welcome to Folio!"),
            masked_key,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }
}
