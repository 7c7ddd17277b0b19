use std::collections::HashSet;

use crossterm::event::KeyEvent;
use dnsimple_provider::Identity;

use super::browser::{BrowserState, Category};
use super::help::HelpState;
use super::home::HomeState;
use crate::backend::StoragePaths;
use crate::model::TabId;

/// Tabbed main screen.
#[derive(Debug)]
pub struct ShellState {
    pub active: TabId,
    /// Tabs whose first load has been issued
    pub initialized: HashSet<TabId>,
    pub home: HomeState,
    pub domains: BrowserState,
    pub zones: BrowserState,
    pub records: BrowserState,
    pub help: HelpState,
    pub demo: bool,
}

impl ShellState {
    pub fn new(identity: Option<Identity>, paths: StoragePaths, demo: bool) -> Self {
        Self {
            active: TabId::Home,
            initialized: HashSet::new(),
            home: HomeState::new(identity),
            domains: BrowserState::new(Category::Domains),
            zones: BrowserState::new(Category::Zones),
            records: BrowserState::new(Category::Records),
            help: HelpState { paths, demo },
            demo,
        }
    }

    pub fn browser(&self, category: Category) -> &BrowserState {
        match category {
            Category::Domains => &self.domains,
            Category::Zones => &self.zones,
            Category::Records => &self.records,
        }
    }

    pub fn browser_mut(&mut self, category: Category) -> &mut BrowserState {
        match category {
            Category::Domains => &mut self.domains,
            Category::Zones => &mut self.zones,
            Category::Records => &mut self.records,
        }
    }

    pub fn active_browser(&self) -> Option<&BrowserState> {
        self.active.category().map(|c| self.browser(c))
    }

    pub fn blocks_global_keys(&self) -> bool {
        self.active_browser()
            .is_some_and(BrowserState::blocks_global_keys)
    }

    pub fn captures_key(&self, key: &KeyEvent) -> bool {
        self.active_browser().is_some_and(|b| b.captures_key(key))
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        for category in Category::ALL {
            self.browser_mut(category).viewport = (width, height);
        }
    }
}
