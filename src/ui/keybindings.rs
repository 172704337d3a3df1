// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map digit/shifted-digit keys to section number (1..2).
pub fn map_key_to_digit(k: &KeyEvent) -> Option<usize> {
    if let KeyCode::Char(c) = k.code {
        match c {
            '1' | '!' => Some(1),
            '2' | '@' => Some(2),
            _ => None,
        }
    } else {
        None
    }
}

/// Check if the key event is a shifted symbol (!, @).
pub fn is_shifted_symbol(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('!') | KeyCode::Char('@'))
}

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    Enter,
    Back,
    Refresh,
    Pin,
    Quit,
    ToggleSection(usize),
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    // Check for section toggle first
    if let Some(d) = map_key_to_digit(key) {
        if key.modifiers.contains(KeyModifiers::SHIFT) || is_shifted_symbol(key) {
            return NavigationAction::ToggleSection(d);
        }
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => NavigationAction::Enter,
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => NavigationAction::Back,
        KeyCode::Char('r') => NavigationAction::Refresh,
        KeyCode::Char('p') => NavigationAction::Pin,
        KeyCode::Char('q') | KeyCode::Esc => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn shifted_digits_toggle_sections() {
        assert_eq!(
            key_to_action(&key(KeyCode::Char('!'), KeyModifiers::NONE)),
            NavigationAction::ToggleSection(1)
        );
        assert_eq!(
            key_to_action(&key(KeyCode::Char('2'), KeyModifiers::SHIFT)),
            NavigationAction::ToggleSection(2)
        );
        assert_eq!(
            key_to_action(&key(KeyCode::Char('2'), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }

    #[test]
    fn vim_and_arrow_keys_agree() {
        for (a, b) in [
            (KeyCode::Down, KeyCode::Char('j')),
            (KeyCode::Up, KeyCode::Char('k')),
            (KeyCode::Right, KeyCode::Char('l')),
            (KeyCode::Left, KeyCode::Char('h')),
        ] {
            assert_eq!(
                key_to_action(&key(a, KeyModifiers::NONE)),
                key_to_action(&key(b, KeyModifiers::NONE))
            );
        }
    }
}
