//! Key bindings
//!
//! Components match raw key events against these constants instead of
//! comparing `KeyCode`s inline, so every shortcut is listed in one place.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key with modifiers.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether `key` triggers this binding. Shift is ignored for characters
    /// and back-tab since it is already part of the key code.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// Several keys bound to the same action.
#[derive(Debug, Clone, Copy)]
pub struct KeySet(pub &'static [KeyBinding]);

impl KeySet {
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.0.iter().any(|binding| binding.matches(key))
    }
}

/// Default key configuration
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::char('q');
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const SEARCH: KeyBinding = KeyBinding::char('/');
    pub const TAB_NEXT: KeySet = KeySet(&[KeyBinding::key(KeyCode::Tab), KeyBinding::char('l')]);
    pub const TAB_PREV: KeySet = KeySet(&[KeyBinding::key(KeyCode::BackTab), KeyBinding::char('H')]);

    // Navigation
    pub const UP: KeySet = KeySet(&[KeyBinding::key(KeyCode::Up), KeyBinding::char('k')]);
    pub const DOWN: KeySet = KeySet(&[KeyBinding::key(KeyCode::Down), KeyBinding::char('j')]);
    pub const FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const BACK: KeySet = KeySet(&[KeyBinding::key(KeyCode::Esc), KeyBinding::key(KeyCode::Backspace)]);
    pub const CANCEL: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Modal lists, where letters are typed into the query
    pub const MODAL_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const MODAL_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);

    // Browser
    pub const REFRESH: KeyBinding = KeyBinding::char('r');
    pub const ZONE_FILE: KeyBinding = KeyBinding::char('f');
    pub const DISTRIBUTION: KeyBinding = KeyBinding::char('x');

    // Domain dashboard
    pub const SECTION_OVERVIEW: KeySet = KeySet(&[KeyBinding::char('o'), KeyBinding::char('O')]);
    pub const SECTION_RECORDS: KeySet = KeySet(&[KeyBinding::char('c'), KeyBinding::char('C')]);
    pub const SECTION_ZONE: KeySet = KeySet(&[KeyBinding::char('z'), KeyBinding::char('Z')]);
    pub const SECTION_DIAGNOSTICS: KeySet = KeySet(&[KeyBinding::char('g'), KeyBinding::char('G')]);
    pub const SECTION_ACTIONS: KeySet = KeySet(&[KeyBinding::char('a'), KeyBinding::char('A')]);
    pub const DASHBOARD_REFRESH: KeyBinding = KeyBinding::char('R');
    pub const DELETE_RECORD: KeyBinding = KeyBinding::char('D');

    // Setup wizard
    pub const CHANGE_CONFIG_DIR: KeyBinding = KeyBinding::char('c');

    // Text input
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn uppercase_with_shift_matches() {
        let key = press(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert!(DefaultKeymap::DASHBOARD_REFRESH.matches(&key));
        assert!(!DefaultKeymap::REFRESH.matches(&key));
    }

    #[test]
    fn ctrl_is_not_ignored() {
        let key = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(DefaultKeymap::FORCE_QUIT.matches(&key));
        assert!(!DefaultKeymap::SECTION_RECORDS.matches(&key));
    }

    #[test]
    fn back_tab_with_shift_matches() {
        let key = press(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(DefaultKeymap::TAB_PREV.matches(&key));
    }

    #[test]
    fn key_sets_match_any_member() {
        assert!(DefaultKeymap::UP.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
        assert!(DefaultKeymap::UP.matches(&press(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(DefaultKeymap::BACK.matches(&press(KeyCode::Backspace, KeyModifiers::NONE)));
    }
}
