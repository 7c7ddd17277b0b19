use dnsimple_provider::Identity;

use super::browser::Category;

#[derive(Debug, Default)]
pub struct HomeState {
    pub selected: usize,
    pub identity: Option<Identity>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HomeState {
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            identity,
            ..Self::default()
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(Category::ALL.len() - 1);
    }

    pub fn current(&self) -> Category {
        Category::ALL[self.selected.min(Category::ALL.len() - 1)]
    }
}
