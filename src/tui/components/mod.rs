//! # TUI Components
//!
//! One component per region of the screen. Components never touch `App`
//! directly: `ui.rs` borrows the pieces each one needs and hands them over
//! as props.
//!
//! ## Component Architecture
//!
//! Every component follows the transient-wrapper pattern: a short-lived
//! struct that borrows its props, built each frame and rendered through
//! the [`Component`](crate::tui::component::Component) trait.
//!
//! ```rust,ignore
//! UserList::new(&page.list, page.selected, theme).render(frame, area);
//! ```
//!
//! Selection and scroll positions live in the core page stores, so the
//! wrappers hold nothing worth keeping between frames.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, shared helpers)
//! ├── nav_bar.rs       (page tabs and status line)
//! ├── fetch_status.rs  (loading / failed placeholders)
//! ├── static_pages.rs  (About, Skills, Projects)
//! ├── contact_form.rs  (contact methods and form)
//! ├── user_list.rs     (user directory)
//! ├── repo_list.rs     (GitHub profile and repositories)
//! ├── animal_view.rs   (cat/dog images and gallery)
//! └── weather_view.rs  (weather, forecast, diagnostics)
//! ```

pub mod animal_view;
pub mod contact_form;
pub mod fetch_status;
pub mod nav_bar;
pub mod repo_list;
pub mod static_pages;
pub mod user_list;
pub mod weather_view;

pub use animal_view::AnimalView;
pub use contact_form::ContactView;
pub use fetch_status::FetchStatus;
pub use nav_bar::{HelpBar, NavBar};
pub use repo_list::RepoList;
pub use static_pages::{AboutView, ProjectsView, SkillsView};
pub use user_list::UserList;
pub use weather_view::WeatherView;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to `max_width` terminal columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hello", 2), "..");
    }

    #[test]
    fn test_truncate_counts_wide_chars_as_two_columns() {
        // Each CJK char takes two columns
        assert_eq!(truncate_str("東京都庁舎", 7), "東京...");
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
