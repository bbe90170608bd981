//! Contact page: ways to reach the owner on the left, the form on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::pages::ContactPage;
use crate::core::pages::contact::Field;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct ContactView<'a> {
    page: &'a ContactPage,
    theme: Theme,
}

impl<'a> ContactView<'a> {
    pub fn new(page: &'a ContactPage, theme: Theme) -> Self {
        Self { page, theme }
    }

    fn render_methods(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for method in &self.page.methods {
            lines.push(Line::from(Span::styled(method.title, self.theme.accent())));
            lines.push(Line::from(Span::styled(method.value.clone(), self.theme.text())));
            lines.push(Line::from(Span::styled(method.description, self.theme.muted())));
            lines.push(Line::default());
        }
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(" Contact ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: Field) {
        let focused = self.page.focus == field;
        let error = self.page.errors.iter().find(|e| e.field() == field);

        let border_style = if error.is_some() {
            self.theme.border().fg(self.theme.error)
        } else if focused {
            self.theme.border().fg(self.theme.accent)
        } else {
            self.theme.border()
        };
        let required = if field.required() { " *" } else { "" };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {}{required} ", field.label()));
        if let Some(error) = error {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {error} "),
                self.theme.text().fg(self.theme.error),
            )));
        }

        let mut value = self.page.form.value(field).to_string();
        if focused {
            value.push('▏');
        }
        let paragraph = Paragraph::new(Span::styled(value, self.theme.text()))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Component for ContactView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [methods_area, form_area] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(area);
        self.render_methods(frame, methods_area);

        let [name, email, subject, message, hint] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(form_area);
        for (field, field_area) in Field::ALL.into_iter().zip([name, email, subject, message]) {
            self.render_field(frame, field_area, field);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Tab next field · Enter send",
                self.theme.muted(),
            )),
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::config::ResolvedConfig;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn contact_page() -> ContactPage {
        let config = ResolvedConfig::default();
        ContactPage::new(&config.profile, &config.github_username)
    }

    #[test]
    fn test_form_shows_fields_and_methods() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let page = contact_page();

        terminal
            .draw(|f| ContactView::new(&page, Theme::DARK).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Email"));
        assert!(text.contains("GitHub"));
        assert!(text.contains("Name *"));
        assert!(text.contains("Message *"));
    }

    #[test]
    fn test_validation_errors_render_under_fields() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut page = contact_page();
        page.handle(&Action::Submit);

        terminal
            .draw(|f| ContactView::new(&page, Theme::DARK).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Name is required"));
    }

    #[test]
    fn test_typed_text_is_visible() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut page = contact_page();
        page.handle(&Action::Paste("Grace Hopper".to_string()));

        terminal
            .draw(|f| ContactView::new(&page, Theme::DARK).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Grace Hopper"));
    }
}
