use crate::core::action::Action;
use crate::core::content::{SkillCategory, skill_categories};

use super::{Command, step_selection};

pub struct SkillsPage {
    pub categories: Vec<SkillCategory>,
    /// Highlighted category.
    pub selected: usize,
}

impl SkillsPage {
    pub fn new() -> Self {
        Self {
            categories: skill_categories(),
            selected: 0,
        }
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        match action {
            Action::SelectNext | Action::FocusNext => {
                self.selected = step_selection(self.selected, self.categories.len(), true);
            }
            Action::SelectPrev | Action::FocusPrev => {
                self.selected = step_selection(self.selected, self.categories.len(), false);
            }
            _ => {}
        }
        Command::None
    }
}

impl Default for SkillsPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean level of a category, rounded down.
pub fn average_level(category: &SkillCategory) -> u8 {
    if category.skills.is_empty() {
        return 0;
    }
    let total: u32 = category.skills.iter().map(|s| u32::from(s.level)).sum();
    (total / category.skills.len() as u32) as u8
}
