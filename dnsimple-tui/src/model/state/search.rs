use crate::util::fuzzy::{rank, FuzzyMatch};

use super::input::TextInput;

/// Fuzzy domain search modal.
#[derive(Debug, Default)]
pub struct SearchState {
    pub visible: bool,
    pub input: TextInput,
    pub matches: Vec<FuzzyMatch>,
    pub selected: usize,
}

impl SearchState {
    pub fn open<S: AsRef<str>>(&mut self, titles: &[S]) {
        self.visible = true;
        self.selected = 0;
        self.input = TextInput::new(200);
        self.recompute(titles);
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.selected = 0;
        self.matches.clear();
        self.input.clear();
    }

    /// Re-rank against the current query, keeping the selection in range.
    pub fn recompute<S: AsRef<str>>(&mut self, titles: &[S]) {
        self.matches = rank(self.input.value(), titles);
        self.selected = self.selected.min(self.matches.len().saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.matches.len() {
            self.selected += 1;
        }
    }

    /// Item index of the highlighted match.
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.selected).map(|m| m.index)
    }
}
