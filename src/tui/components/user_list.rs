//! # UserList Component
//!
//! Search box, result counts and the filtered user rows for the Users page.
//!
//! Filtering happens in the core (`RemoteListView::visible`); this component
//! only draws what it is handed. Rows show an initial "avatar", the name,
//! email, company and city.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::remote_list::RemoteListView;
use crate::providers::types::User;
use crate::tui::component::Component;
use crate::tui::components::{FetchStatus, truncate_str};
use crate::tui::theme::Theme;

pub struct UserList<'a> {
    list: &'a RemoteListView<User>,
    selected: usize,
    spinner_frame: usize,
    theme: Theme,
}

impl<'a> UserList<'a> {
    pub fn new(
        list: &'a RemoteListView<User>,
        selected: usize,
        spinner_frame: usize,
        theme: Theme,
    ) -> Self {
        Self {
            list,
            selected,
            spinner_frame,
            theme,
        }
    }

    fn row(&self, user: &User, width: usize) -> ListItem<'static> {
        let name_width = 24.min(width / 3);
        let email_width = 28.min(width / 3);
        let line = Line::from(vec![
            Span::styled(format!("({}) ", user.initial()), self.theme.accent()),
            Span::styled(
                format!("{:<name_width$}", truncate_str(&user.name, name_width)),
                self.theme.text(),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:<email_width$}", truncate_str(&user.email, email_width)),
                self.theme.muted(),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{} · {}", user.company.name, user.address.city),
                self.theme.muted(),
            ),
        ]);
        ListItem::new(line)
    }
}

impl Component for UserList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let stats = format!(
            " Showing {} of {} users ",
            self.list.visible().len(),
            self.list.total()
        );
        let search = Paragraph::new(Line::from(vec![
            Span::styled("Search: ", self.theme.muted()),
            Span::styled(format!("{}▏", self.list.filter()), self.theme.text()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(" Users ")
                .title_bottom(Line::from(Span::styled(stats, self.theme.muted())).right_aligned()),
        );
        frame.render_widget(search, search_area);

        if let Some(mut status) =
            FetchStatus::for_state(self.list.state(), "users", self.spinner_frame, self.theme)
        {
            status.render(frame, body_area);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .padding(Padding::horizontal(1));

        if self.list.shows_no_results() {
            let notice = Paragraph::new(Span::styled(
                format!("No users match \"{}\"", self.list.filter()),
                self.theme.muted(),
            ))
            .block(block);
            frame.render_widget(notice, body_area);
            return;
        }

        let width = body_area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .list
            .visible()
            .into_iter()
            .map(|user| self.row(user, width))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.selected());
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, body_area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::FetchError;
    use crate::tui::components::buffer_text;
    use crate::test_support::sample_users;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn loaded(filter: &str) -> RemoteListView<User> {
        let mut list = RemoteListView::new();
        let ticket = list.load();
        list.settle(ticket, Ok(sample_users()));
        list.set_filter(filter);
        list
    }

    fn draw(list: &RemoteListView<User>) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| UserList::new(list, 0, 0, Theme::DARK).render(f, f.area()))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_renders_all_users_with_counts() {
        let text = draw(&loaded(""));
        assert!(text.contains("(A) Ana"));
        assert!(text.contains("Bo"));
        assert!(text.contains("Cy"));
        assert!(text.contains("Showing 3 of 3 users"));
    }

    #[test]
    fn test_filter_narrows_rows() {
        let text = draw(&loaded("acme"));
        assert!(text.contains("ana@acme.io"));
        assert!(!text.contains("Globex"));
        assert!(text.contains("Showing 1 of 3 users"));
    }

    #[test]
    fn test_no_results_notice() {
        let text = draw(&loaded("zzz"));
        assert!(text.contains("No users match \"zzz\""));
    }

    #[test]
    fn test_failure_shows_reason() {
        let mut list = RemoteListView::new();
        let ticket = list.load();
        list.settle(ticket, Err(FetchError::Status { status: 503, body: String::new() }));
        let text = draw(&list);
        assert!(text.contains("Could not load users"));
    }
}
