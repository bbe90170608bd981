//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view-models (fetch,  │
//!                    │    filter, favorites)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Fetch
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ── spawns ─────────────▶ │ Providers  │
//!     │  Adapter   │ ◀── Action::Fetched ──── │ (reqwest)  │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`fetch`]: `FetchState`, `FetchError` and request tickets
//! - [`remote_list`]: searchable list view-model
//! - [`single`]: single-resource view-model with favorites
//! - [`pages`]: one store per route

pub mod action;
pub mod config;
pub mod content;
pub mod fallback;
pub mod favorites;
pub mod fetch;
pub mod geo;
pub mod pages;
pub mod remote_list;
pub mod route;
pub mod single;
pub mod state;
