//! The three pages that never touch the network: About, Skills, Projects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::content::ProjectStatus;
use crate::core::pages::about::CALLS_TO_ACTION;
use crate::core::pages::projects::CategoryFilter;
use crate::core::pages::skills::average_level;
use crate::core::pages::{AboutPage, ProjectsPage, SkillsPage};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const BAR_WIDTH: usize = 20;

/// `████████░░░░` for a 0-100 level.
pub fn level_bar(level: u8) -> String {
    let filled = (usize::from(level.min(100)) * BAR_WIDTH).div_ceil(100);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

// ============================================================================
// About
// ============================================================================

pub struct AboutView<'a> {
    page: &'a AboutPage,
    theme: Theme,
}

impl<'a> AboutView<'a> {
    pub fn new(page: &'a AboutPage, theme: Theme) -> Self {
        Self { page, theme }
    }
}

impl Component for AboutView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let profile = &self.page.profile;
        let mut lines = vec![
            Line::from(Span::styled(
                profile.name.clone(),
                self.theme.accent().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(Span::styled(profile.title.clone(), self.theme.text())),
            Line::default(),
            Line::from(Span::styled(profile.bio.clone(), self.theme.text())),
            Line::default(),
        ];

        let tags: Vec<Span> = profile
            .tags
            .iter()
            .flat_map(|tag| {
                [
                    Span::styled(format!("[{tag}]"), self.theme.muted()),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(tags));
        lines.push(Line::default());

        let mut buttons = Vec::new();
        for (i, (label, _)) in CALLS_TO_ACTION.iter().enumerate() {
            let style = if i == self.page.selected {
                self.theme.selected()
            } else {
                self.theme.text()
            };
            buttons.push(Span::styled(format!("  {label}  "), style));
            buttons.push(Span::raw("   "));
        }
        lines.push(Line::from(buttons));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(" About ")
                .padding(Padding::new(2, 2, 1, 1)),
        );
        frame.render_widget(paragraph, area);
    }
}

// ============================================================================
// Skills
// ============================================================================

pub struct SkillsView<'a> {
    page: &'a SkillsPage,
    theme: Theme,
}

impl<'a> SkillsView<'a> {
    pub fn new(page: &'a SkillsPage, theme: Theme) -> Self {
        Self { page, theme }
    }
}

impl Component for SkillsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (i, category) in self.page.categories.iter().enumerate() {
            let title_style = if i == self.page.selected {
                self.theme.selected()
            } else {
                self.theme.accent()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", category.title), title_style),
                Span::styled(
                    format!("  avg {}%", average_level(category)),
                    self.theme.muted(),
                ),
            ]));
            for skill in &category.skills {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<20}", skill.name), self.theme.text()),
                    Span::styled(level_bar(skill.level), self.theme.accent()),
                    Span::styled(format!(" {:>3}%", skill.level), self.theme.muted()),
                ]));
            }
            lines.push(Line::default());
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(" Skills ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(paragraph, area);
    }
}

// ============================================================================
// Projects
// ============================================================================

pub struct ProjectsView<'a> {
    page: &'a ProjectsPage,
    theme: Theme,
}

impl<'a> ProjectsView<'a> {
    pub fn new(page: &'a ProjectsPage, theme: Theme) -> Self {
        Self { page, theme }
    }

    fn filter_tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for filter in CategoryFilter::ALL {
            let style = if filter == self.page.filter {
                self.theme.selected()
            } else {
                self.theme.muted()
            };
            spans.push(Span::styled(format!(" {} ", filter.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Component for ProjectsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(" Projects ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tabs_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
        frame.render_widget(Paragraph::new(self.filter_tabs()), tabs_area);

        let visible = self.page.visible();
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No projects in this category.", self.theme.muted())),
                list_area,
            );
            return;
        }

        let mut lines = Vec::new();
        for (i, project) in visible.iter().enumerate() {
            let title_style = if i == self.page.selected {
                self.theme.selected()
            } else {
                self.theme.accent()
            };
            let status_color = match project.status {
                ProjectStatus::Completed => self.theme.success,
                ProjectStatus::InProgress => self.theme.warning,
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", project.title), title_style),
                Span::raw("  "),
                Span::styled(project.status.label(), self.theme.text().fg(status_color)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", project.description),
                self.theme.text(),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", project.technologies.join(" · ")),
                self.theme.muted(),
            )));
            if let Some(url) = project.repo_url {
                lines.push(Line::from(Span::styled(format!("  {url}"), self.theme.muted())));
            }
            lines.push(Line::default());
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), list_area);
    }
}
