//! Profile card, search box and repository rows for the GitHub page.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::pages::GitHubPage;
use crate::providers::types::Repository;
use crate::tui::component::Component;
use crate::tui::components::{FetchStatus, truncate_str};
use crate::tui::theme::Theme;

/// Dot color for a repository's primary language, as GitHub shows it.
pub fn language_color(language: &str) -> Color {
    match language {
        "Rust" => Color::Rgb(222, 165, 132),
        "JavaScript" => Color::Rgb(241, 224, 90),
        "TypeScript" => Color::Rgb(49, 120, 198),
        "Python" => Color::Rgb(53, 114, 165),
        "Go" => Color::Rgb(0, 173, 216),
        "Java" => Color::Rgb(176, 114, 25),
        "C#" => Color::Rgb(23, 134, 0),
        "Dart" => Color::Rgb(0, 180, 171),
        "HTML" => Color::Rgb(227, 76, 38),
        "CSS" => Color::Rgb(86, 61, 124),
        "Ruby" => Color::Rgb(112, 21, 22),
        _ => Color::Gray,
    }
}

pub struct RepoList<'a> {
    page: &'a GitHubPage,
    spinner_frame: usize,
    theme: Theme,
}

impl<'a> RepoList<'a> {
    pub fn new(page: &'a GitHubPage, spinner_frame: usize, theme: Theme) -> Self {
        Self {
            page,
            spinner_frame,
            theme,
        }
    }

    fn render_profile(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(format!(" @{} ", self.page.username))
            .padding(Padding::horizontal(1));

        let Some(profile) = &self.page.profile else {
            frame.render_widget(block, area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(profile.display_name().to_string(), self.theme.accent())),
            Line::from(Span::styled(profile.html_url.clone(), self.theme.muted())),
        ];
        if let Some(bio) = &profile.bio {
            lines.push(Line::from(Span::styled(bio.clone(), self.theme.text())));
        }
        if let Some(site) = profile.website() {
            lines.push(Line::from(Span::styled(site.to_string(), self.theme.muted())));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{}", profile.public_repos), self.theme.accent()),
            Span::styled(" repos  ", self.theme.muted()),
            Span::styled(format!("{}", profile.followers), self.theme.accent()),
            Span::styled(" followers  ", self.theme.muted()),
            Span::styled(format!("{}", profile.following), self.theme.accent()),
            Span::styled(" following  ", self.theme.muted()),
            Span::styled(format!("★ {}", self.page.total_stars()), self.theme.accent()),
            Span::styled(" stars", self.theme.muted()),
        ]));

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            area,
        );
    }

    fn row(&self, repo: &Repository, width: usize) -> ListItem<'static> {
        let mut header = vec![
            Span::styled(truncate_str(&repo.name, width / 2), self.theme.accent()),
            Span::styled(format!("  ★ {}", repo.stargazers_count), self.theme.text()),
            Span::styled(format!("  ⑂ {}", repo.forks_count), self.theme.text()),
        ];
        if let Some(language) = &repo.language {
            header.push(Span::raw("  "));
            header.push(Span::styled("●", self.theme.text().fg(language_color(language))));
            header.push(Span::styled(format!(" {language}"), self.theme.muted()));
        }
        header.push(Span::styled(
            format!("  updated {}", repo.updated_at.format("%Y-%m-%d")),
            self.theme.muted(),
        ));
        if repo.fork {
            header.push(Span::styled("  fork", self.theme.muted()));
        }

        let description = repo.description.as_deref().unwrap_or("No description");
        let mut lines = vec![
            Line::from(header),
            Line::from(Span::styled(
                format!("  {}", truncate_str(description, width.saturating_sub(2))),
                self.theme.text(),
            )),
        ];
        if let Some(demo) = repo.demo_url() {
            lines.push(Line::from(Span::styled(format!("  {demo}"), self.theme.muted())));
        }
        ListItem::new(lines)
    }
}

impl Component for RepoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [profile_area, search_area, body_area] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_profile(frame, profile_area);

        let repos = &self.page.repos;
        let stats = format!(" Showing {} of {} repositories ", repos.visible().len(), repos.total());
        let search = Paragraph::new(Line::from(vec![
            Span::styled("Search: ", self.theme.muted()),
            Span::styled(format!("{}▏", repos.filter()), self.theme.text()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title_bottom(Line::from(Span::styled(stats, self.theme.muted())).right_aligned()),
        );
        frame.render_widget(search, search_area);

        if let Some(mut status) =
            FetchStatus::for_state(repos.state(), "repositories", self.spinner_frame, self.theme)
        {
            status.render(frame, body_area);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(" Repositories ")
            .padding(Padding::horizontal(1));

        if repos.shows_no_results() {
            let notice = Paragraph::new(Span::styled(
                format!("No repositories match \"{}\"", repos.filter()),
                self.theme.muted(),
            ))
            .block(block);
            frame.render_widget(notice, body_area);
            return;
        }

        let width = body_area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = repos
            .visible()
            .into_iter()
            .map(|repo| self.row(repo, width))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.selected());
        let mut state = ListState::default().with_selected(Some(self.page.selected));
        frame.render_stateful_widget(list, body_area, &mut state);
    }
}
