//! Landing page: who the owner is, plus two calls to action.

use crate::core::action::Action;
use crate::core::config::ResolvedProfile;
use crate::core::route::Route;

use super::Command;

/// Buttons under the bio, in display order.
pub const CALLS_TO_ACTION: [(&str, Route); 2] = [
    ("View projects", Route::Projects),
    ("Get in touch", Route::Contact),
];

pub struct AboutPage {
    pub profile: ResolvedProfile,
    pub selected: usize,
}

impl AboutPage {
    pub fn new(profile: ResolvedProfile) -> Self {
        Self {
            profile,
            selected: 0,
        }
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        match action {
            Action::CycleLeft | Action::FocusPrev => {
                self.selected = self.selected.saturating_sub(1);
                Command::None
            }
            Action::CycleRight | Action::FocusNext => {
                self.selected = (self.selected + 1).min(CALLS_TO_ACTION.len() - 1);
                Command::None
            }
            Action::Submit => Command::Navigate(CALLS_TO_ACTION[self.selected].1),
            Action::Input('p') => Command::Navigate(Route::Projects),
            Action::Input('c') => Command::Navigate(Route::Contact),
            _ => Command::None,
        }
    }
}
