//! Random cat or dog pictures, with a favorites gallery.

use crate::core::action::{Action, FetchKind};
use crate::core::single::SingleResourceRefresh;
use crate::providers::types::{AnimalImage, Species};

use super::{Command, step_selection};

pub struct AnimalsPage {
    pub view: SingleResourceRefresh<Species, AnimalImage>,
    /// Gallery instead of the current picture.
    pub showing_favorites: bool,
    pub favorite_selected: usize,
}

impl AnimalsPage {
    pub fn new() -> Self {
        Self {
            view: SingleResourceRefresh::new(Species::default()),
            showing_favorites: false,
            favorite_selected: 0,
        }
    }

    pub fn species(&self) -> Species {
        *self.view.selector()
    }

    pub fn enter(&mut self) -> Command {
        self.fetch()
    }

    fn fetch(&mut self) -> Command {
        let species = self.species();
        Command::Fetch(self.view.fetch_current(), FetchKind::Animal(species))
    }

    fn switch_to(&mut self, species: Species) -> Command {
        Command::Fetch(self.view.change_selector(species), FetchKind::Animal(species))
    }

    pub fn handle(&mut self, action: &Action) -> Command {
        match action {
            Action::CycleLeft | Action::CycleRight => self.switch_to(self.species().other()),
            Action::Input('c') => self.switch_to(Species::Cat),
            Action::Input('d') => self.switch_to(Species::Dog),
            Action::Refresh | Action::Input('n') | Action::Input(' ') => self.fetch(),
            Action::Submit if !self.showing_favorites => self.fetch(),
            Action::FocusNext | Action::FocusPrev | Action::Input('v') => {
                self.showing_favorites = !self.showing_favorites;
                Command::None
            }
            Action::AddFavorite | Action::Input('f') => self.add_favorite(),
            Action::RemoveFavorite | Action::Input('x') if self.showing_favorites => {
                self.remove_selected_favorite()
            }
            Action::SelectNext => {
                self.favorite_selected =
                    step_selection(self.favorite_selected, self.view.favorites().len(), true);
                Command::None
            }
            Action::SelectPrev => {
                self.favorite_selected =
                    step_selection(self.favorite_selected, self.view.favorites().len(), false);
                Command::None
            }
            _ => Command::None,
        }
    }

    fn add_favorite(&mut self) -> Command {
        if self.view.current().is_none() {
            return Command::None;
        }
        if self.view.add_to_favorites() {
            Command::Notify(format!("Saved to favorites ({})", self.view.favorites().len()))
        } else {
            Command::Notify("Already in favorites".to_string())
        }
    }

    fn remove_selected_favorite(&mut self) -> Command {
        let Some(id) = self
            .view
            .favorites()
            .get(self.favorite_selected)
            .map(|image| image.id.clone())
        else {
            return Command::None;
        };
        self.view.remove_from_favorites(&id);
        self.favorite_selected = self
            .favorite_selected
            .min(self.view.favorites().len().saturating_sub(1));
        Command::Notify("Removed from favorites".to_string())
    }
}

impl Default for AnimalsPage {
    fn default() -> Self {
        Self::new()
    }
}
