//! Species tabs, the current picture and the favorites gallery.
//!
//! Terminals can't show the picture itself, so the card shows its id and
//! URL for opening in a browser.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::pages::AnimalsPage;
use crate::providers::types::{AnimalImage, Species};
use crate::tui::component::Component;
use crate::tui::components::{FetchStatus, truncate_str};
use crate::tui::theme::Theme;

pub struct AnimalView<'a> {
    page: &'a AnimalsPage,
    spinner_frame: usize,
    theme: Theme,
}

impl<'a> AnimalView<'a> {
    pub fn new(page: &'a AnimalsPage, spinner_frame: usize, theme: Theme) -> Self {
        Self {
            page,
            spinner_frame,
            theme,
        }
    }

    fn tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for species in [Species::Cat, Species::Dog] {
            let style = if species == self.page.species() && !self.page.showing_favorites {
                self.theme.selected()
            } else {
                self.theme.muted()
            };
            spans.push(Span::styled(format!(" {} ", species.label()), style));
            spans.push(Span::raw(" "));
        }
        let gallery_style = if self.page.showing_favorites {
            self.theme.selected()
        } else {
            self.theme.muted()
        };
        spans.push(Span::styled(
            format!(" Favorites ({}) ", self.page.view.favorites().len()),
            gallery_style,
        ));
        Line::from(spans)
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, image: &AnimalImage) {
        let width = area.width.saturating_sub(4) as usize;
        let heart = if self.page.view.current_is_favorite() {
            Span::styled("♥ saved", self.theme.text().fg(self.theme.error))
        } else {
            Span::styled("♡ press f to save", self.theme.muted())
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("Random {}", image.species.label()), self.theme.accent()),
                Span::raw("   "),
                heart,
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("id   ", self.theme.muted()),
                Span::styled(truncate_str(&image.id, width.saturating_sub(5)), self.theme.text()),
            ]),
            Line::from(vec![
                Span::styled("url  ", self.theme.muted()),
                Span::styled(image.url.clone(), self.theme.text()),
            ]),
        ];
        let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .padding(Padding::new(2, 2, 1, 1)),
        );
        frame.render_widget(card, area);
    }

    fn render_gallery(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(" Favorites ")
            .padding(Padding::horizontal(1));
        let favorites = self.page.view.favorites();
        if favorites.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No favorites yet. Press f on a picture you like.",
                    self.theme.muted(),
                ))
                .block(block),
                area,
            );
            return;
        }

        let width = area.width.saturating_sub(12) as usize;
        let items: Vec<ListItem> = favorites
            .items()
            .iter()
            .map(|image| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<5}", image.species.label()), self.theme.accent()),
                    Span::styled(truncate_str(&image.url, width), self.theme.text()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.selected());
        let mut state = ListState::default().with_selected(Some(self.page.favorite_selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Component for AnimalView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(self.tabs()), tabs_area);

        if self.page.showing_favorites {
            self.render_gallery(frame, body_area);
            return;
        }

        let subject = self.page.species().label().to_lowercase();
        match FetchStatus::for_state(self.page.view.state(), &subject, self.spinner_frame, self.theme)
        {
            Some(mut status) => status.render(frame, body_area),
            None => {
                if let Some(image) = self.page.view.current() {
                    self.render_card(frame, body_area, image);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::pages::Command;
    use crate::test_support::sample_image;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn with_cat(id: &str) -> AnimalsPage {
        let mut page = AnimalsPage::new();
        let Command::Fetch(ticket, _) = page.enter() else {
            panic!("entering the page should fetch");
        };
        page.view.settle(ticket, Ok(sample_image(id, Species::Cat)));
        page
    }

    fn draw(page: &AnimalsPage) -> String {
        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| AnimalView::new(page, 0, Theme::DARK).render(f, f.area()))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_card_shows_image_details() {
        let text = draw(&with_cat("abc"));
        assert!(text.contains("Random Cat"));
        assert!(text.contains("https://img.example/abc.jpg"));
        assert!(text.contains("press f to save"));
        assert!(text.contains("Favorites (0)"));
    }

    #[test]
    fn test_saved_picture_shows_heart() {
        let mut page = with_cat("abc");
        page.handle(&Action::AddFavorite);
        let text = draw(&page);
        assert!(text.contains("♥ saved"));
        assert!(text.contains("Favorites (1)"));
    }

    #[test]
    fn test_gallery_lists_favorites() {
        let mut page = with_cat("abc");
        page.handle(&Action::AddFavorite);
        page.handle(&Action::FocusNext);
        let text = draw(&page);
        assert!(text.contains("img.example/abc.jpg"));
        assert!(!text.contains("Random Cat"));
    }

    #[test]
    fn test_empty_gallery_hint() {
        let mut page = AnimalsPage::new();
        page.handle(&Action::FocusNext);
        let text = draw(&page);
        assert!(text.contains("No favorites yet"));
    }

    #[test]
    fn test_loading_shows_spinner() {
        let mut page = AnimalsPage::new();
        page.enter();
        let text = draw(&page);
        assert!(text.contains("Loading cat..."));
    }
}
