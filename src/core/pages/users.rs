//! Searchable user directory.

use crate::core::action::{Action, FetchKind};
use crate::core::remote_list::RemoteListView;
use crate::providers::types::User;

use super::{Command, list_input};

pub struct UsersPage {
    pub list: RemoteListView<User>,
    /// Index into the visible rows.
    pub selected: usize,
}

impl UsersPage {
    pub fn new() -> Self {
        Self {
            list: RemoteListView::new(),
            selected: 0,
        }
    }

    pub fn enter(&mut self) -> Command {
        Command::Fetch(self.list.load(), FetchKind::Users)
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        if list_input(&mut self.list, &mut self.selected, action) {
            self.selected = 0;
            return Command::Fetch(self.list.retry(), FetchKind::Users);
        }
        Command::None
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.list.visible().get(self.selected).copied()
    }
}

impl Default for UsersPage {
    fn default() -> Self {
        Self::new()
    }
}
