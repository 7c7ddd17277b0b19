use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::DefaultKeymap;

const MASK: char = '•';

/// Single-line text field.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    masked: bool,
    limit: usize,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new(256)
    }
}

impl TextInput {
    pub fn new(limit: usize) -> Self {
        Self {
            value: String::new(),
            masked: false,
            limit,
        }
    }

    /// Field whose contents render as `•`.
    pub fn masked(limit: usize) -> Self {
        Self {
            masked: true,
            ..Self::new(limit)
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into().chars().take(self.limit).collect();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Apply an editing key. Returns `false` when the key is not an edit so
    /// the caller can treat it as a command.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if DefaultKeymap::CLEAR_INPUT.matches(key) {
            self.clear();
            return true;
        }
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    /// Insert pasted text; line breaks are dropped.
    pub fn paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| !matches!(c, '\r' | '\n')) {
            self.push(c);
        }
    }

    fn push(&mut self, c: char) {
        if self.value.chars().count() < self.limit {
            self.value.push(c);
        }
    }

    /// Text to render.
    pub fn display(&self) -> String {
        if self.masked {
            MASK.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
