use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Application-wide
    ForceQuit, // Ctrl+C
    Escape,
    Resize,
    GoTo(usize), // F1..F8
    NextPage,    // Ctrl+N
    PrevPage,    // Ctrl+P
    ToggleTheme, // Ctrl+D

    // Page input
    InputChar(char),
    Paste(String),
    Backspace,
    Submit,
    Refresh,        // Ctrl+R
    FocusNext,      // Tab
    FocusPrev,      // Shift+Tab
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    AddFavorite,    // Ctrl+F
    RemoveFavorite, // Delete
    Locate,         // Ctrl+L
    Probe,          // Ctrl+T
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            return None;
        }
    };
    match event {
        // Release events arrive when REPORT_EVENT_TYPES is on
        Event::Key(key_event) if key_event.kind == KeyEventKind::Release => None,
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char(c) => map_control(c.to_ascii_lowercase()),
            _ => None,
        };
    }
    match (modifiers, code) {
        (_, KeyCode::F(n @ 1..=8)) => Some(TuiEvent::GoTo(usize::from(n - 1))),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::RemoveFavorite),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        _ => None,
    }
}

fn map_control(c: char) -> Option<TuiEvent> {
    match c {
        'c' => Some(TuiEvent::ForceQuit),
        'n' => Some(TuiEvent::NextPage),
        'p' => Some(TuiEvent::PrevPage),
        'd' => Some(TuiEvent::ToggleTheme),
        'r' => Some(TuiEvent::Refresh),
        'f' => Some(TuiEvent::AddFavorite),
        'l' => Some(TuiEvent::Locate),
        't' => Some(TuiEvent::Probe),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys_pick_pages() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::F(1)), Some(TuiEvent::GoTo(0)));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::F(8)), Some(TuiEvent::GoTo(7)));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::F(9)), None);
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('l')),
            Some(TuiEvent::Locate)
        );
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('z')), None);
    }

    #[test]
    fn test_control_shift_chords_never_type() {
        let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        assert_eq!(map_key(ctrl_shift, KeyCode::Char('R')), Some(TuiEvent::Refresh));
        assert_eq!(map_key(ctrl_shift, KeyCode::Char('X')), None);
        assert_eq!(
            map_key(KeyModifiers::CONTROL | KeyModifiers::ALT, KeyCode::Char('f')),
            Some(TuiEvent::AddFavorite)
        );
    }

    #[test]
    fn test_shifted_characters_are_text() {
        assert_eq!(
            map_key(KeyModifiers::SHIFT, KeyCode::Char('A')),
            Some(TuiEvent::InputChar('A'))
        );
    }
}
