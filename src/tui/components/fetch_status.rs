//! Placeholder shown in place of remote content that is not ready yet.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::fetch::FetchState;
use crate::tui::component::Component;
use crate::tui::components::centered_rect;
use crate::tui::theme::Theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

enum Status<'a> {
    Loading,
    Failed(&'a str),
}

pub struct FetchStatus<'a> {
    subject: &'a str,
    status: Status<'a>,
    spinner_frame: usize,
    theme: Theme,
}

impl<'a> FetchStatus<'a> {
    /// `None` when the state holds data, i.e. the real content should render.
    pub fn for_state<T>(
        state: &'a FetchState<T>,
        subject: &'a str,
        spinner_frame: usize,
        theme: Theme,
    ) -> Option<Self> {
        let status = match state {
            FetchState::Idle | FetchState::Loading => Status::Loading,
            FetchState::Failed(reason) => Status::Failed(reason),
            FetchState::Ready(_) => return None,
        };
        Some(Self {
            subject,
            status,
            spinner_frame,
            theme,
        })
    }
}

impl Component for FetchStatus<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = match self.status {
            Status::Loading => vec![Line::from(vec![
                Span::styled(spinner(self.spinner_frame), self.theme.accent()),
                Span::styled(format!(" Loading {}...", self.subject), self.theme.text()),
            ])],
            Status::Failed(reason) => vec![
                Line::from(Span::styled(
                    format!("Could not load {}", self.subject),
                    self.theme.accent().fg(self.theme.error),
                )),
                Line::from(Span::styled(reason.to_string(), self.theme.text())),
                Line::default(),
                Line::from(Span::styled("Ctrl+R to retry", self.theme.muted())),
            ],
        };

        let box_area = centered_rect(70, 50, area);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border()),
            );
        frame.render_widget(paragraph, box_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_ready_state_renders_nothing() {
        let state = FetchState::Ready(vec![1, 2, 3]);
        assert!(FetchStatus::for_state(&state, "users", 0, Theme::DARK).is_none());
    }

    #[test]
    fn test_loading_shows_spinner_and_subject() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let state: FetchState<Vec<u8>> = FetchState::Loading;

        terminal
            .draw(|f| {
                if let Some(mut status) = FetchStatus::for_state(&state, "users", 3, Theme::DARK) {
                    status.render(f, f.area());
                }
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Loading users..."));
        assert!(text.contains(spinner(3)));
    }

    #[test]
    fn test_failure_shows_reason_and_retry_hint() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let state: FetchState<Vec<u8>> = FetchState::Failed("HTTP 500".to_string());

        terminal
            .draw(|f| {
                if let Some(mut status) = FetchStatus::for_state(&state, "repos", 0, Theme::DARK) {
                    status.render(f, f.area());
                }
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Could not load repos"));
        assert!(text.contains("HTTP 500"));
        assert!(text.contains("Ctrl+R to retry"));
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER.len()));
    }
}
