//! Profile card plus a searchable list of the account's repositories.

use crate::core::action::{Action, FetchKind};
use crate::core::fetch::{FetchError, Ticket};
use crate::core::remote_list::RemoteListView;
use crate::providers::types::{Profile, RepoListing, Repository};

use super::{Command, list_input};

pub struct GitHubPage {
    pub username: String,
    pub profile: Option<Profile>,
    pub repos: RemoteListView<Repository>,
    pub selected: usize,
}

impl GitHubPage {
    pub fn new(username: String) -> Self {
        Self {
            username,
            profile: None,
            repos: RemoteListView::new(),
            selected: 0,
        }
    }

    pub fn enter(&mut self) -> Command {
        Command::Fetch(self.repos.load(), FetchKind::Repos)
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        if list_input(&mut self.repos, &mut self.selected, action) {
            self.selected = 0;
            return Command::Fetch(self.repos.retry(), FetchKind::Repos);
        }
        Command::None
    }

    /// The profile is only replaced together with an applied repository list.
    pub fn settle(&mut self, ticket: Ticket, result: Result<RepoListing, FetchError>) -> bool {
        match result {
            Ok(RepoListing { profile, repos }) => {
                let applied = self.repos.settle(ticket, Ok(repos));
                if applied {
                    self.profile = Some(profile);
                }
                applied
            }
            Err(e) => {
                let applied = self.repos.settle(ticket, Err(e));
                if applied {
                    self.profile = None;
                }
                applied
            }
        }
    }

    pub fn selected_repo(&self) -> Option<&Repository> {
        self.repos.visible().get(self.selected).copied()
    }

    pub fn total_stars(&self) -> u32 {
        self.repos.items().iter().map(|r| r.stargazers_count).sum()
    }
}
