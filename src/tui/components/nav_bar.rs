//! # NavBar and HelpBar
//!
//! The top line lists every page with its function key and highlights the
//! current one. The bottom line shows the status message on the left and
//! the key hints for the current page on the right.
//!
//! Both are stateless: all data arrives as props.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct NavBar {
    pub current: Route,
    pub dark_mode: bool,
    pub theme: Theme,
}

impl NavBar {
    pub fn new(current: Route, dark_mode: bool, theme: Theme) -> Self {
        Self {
            current,
            dark_mode,
            theme,
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" Folio ", self.theme.accent()), Span::raw(" ")];
        for route in Route::ALL {
            let label = format!(" F{} {} ", route.index() + 1, route.title());
            let style = if route == self.current {
                self.theme.selected()
            } else {
                self.theme.muted()
            };
            spans.push(Span::styled(label, style));
        }
        let mode = if self.dark_mode { " ☾ dark" } else { " ☀ light" };
        spans.push(Span::styled(mode, self.theme.muted()));

        frame.render_widget(Line::from(spans), area);
    }
}

pub struct HelpBar<'a> {
    pub status_message: &'a str,
    pub hints: &'a str,
    pub theme: Theme,
}

impl<'a> HelpBar<'a> {
    pub fn new(status_message: &'a str, hints: &'a str, theme: Theme) -> Self {
        Self {
            status_message,
            hints,
            theme,
        }
    }
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints_width = (self.hints.chars().count() as u16).min(area.width / 2);
        let [status_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        let status = super::truncate_str(self.status_message, status_area.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(status, self.theme.text())),
            status_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(self.hints, self.theme.muted())),
            hints_area,
        );
    }
}
