//! Project gallery with a category filter.

use crate::core::action::Action;
use crate::core::content::{Project, ProjectKind, projects};

use super::{Command, step_selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Web,
    App,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 3] = [CategoryFilter::All, CategoryFilter::Web, CategoryFilter::App];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Web => "Web Development",
            CategoryFilter::App => "Applications",
        }
    }

    pub fn matches(self, kind: ProjectKind) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Web => kind == ProjectKind::Web,
            CategoryFilter::App => kind == ProjectKind::App,
        }
    }

    fn index(self) -> usize {
        CategoryFilter::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        CategoryFilter::ALL[(self.index() + 1) % CategoryFilter::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = CategoryFilter::ALL.len();
        CategoryFilter::ALL[(self.index() + len - 1) % len]
    }
}

pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub filter: CategoryFilter,
    pub selected: usize,
}

impl ProjectsPage {
    pub fn new() -> Self {
        Self {
            projects: projects(),
            filter: CategoryFilter::All,
            selected: 0,
        }
    }

    /// Projects in the active category, in catalogue order.
    pub fn visible(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p.kind))
            .collect()
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.selected = 0;
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        match action {
            Action::CycleRight | Action::FocusNext => self.set_filter(self.filter.next()),
            Action::CycleLeft | Action::FocusPrev => self.set_filter(self.filter.prev()),
            Action::SelectNext => {
                self.selected = step_selection(self.selected, self.visible().len(), true);
            }
            Action::SelectPrev => {
                self.selected = step_selection(self.selected, self.visible().len(), false);
            }
            _ => {}
        }
        Command::None
    }
}

impl Default for ProjectsPage {
    fn default() -> Self {
        Self::new()
    }
}
