//! Terminal events to core actions.

use crate::core::action::Action;
use crate::core::route::Route;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Global key bindings. Page-specific meaning (typing into a search box,
/// cycling a filter) is decided by the page stores in `core::pages`.
pub struct KeyMap;

impl EventHandler for KeyMap {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let action = match event {
            TuiEvent::ForceQuit | TuiEvent::Escape => Action::Quit,
            TuiEvent::Resize => return None,
            TuiEvent::GoTo(index) => Action::Navigate(Route::from_index(*index)?),
            TuiEvent::NextPage => Action::NextPage,
            TuiEvent::PrevPage => Action::PrevPage,
            TuiEvent::ToggleTheme => Action::ToggleTheme,
            TuiEvent::InputChar(c) => Action::Input(*c),
            TuiEvent::Paste(text) => Action::Paste(text.clone()),
            TuiEvent::Backspace => Action::Backspace,
            TuiEvent::Submit => Action::Submit,
            TuiEvent::Refresh => Action::Refresh,
            TuiEvent::FocusNext => Action::FocusNext,
            TuiEvent::FocusPrev => Action::FocusPrev,
            TuiEvent::CursorUp => Action::SelectPrev,
            TuiEvent::CursorDown => Action::SelectNext,
            TuiEvent::CursorLeft => Action::CycleLeft,
            TuiEvent::CursorRight => Action::CycleRight,
            TuiEvent::AddFavorite => Action::AddFavorite,
            TuiEvent::RemoveFavorite => Action::RemoveFavorite,
            TuiEvent::Locate => Action::Locate,
            TuiEvent::Probe => Action::Probe,
        };
        Some(action)
    }
}
