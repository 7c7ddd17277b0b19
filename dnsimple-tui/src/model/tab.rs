use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::Category;

/// Shell tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Home,
    Domains,
    Zones,
    Records,
    Help,
}

impl TabId {
    pub const ALL: [TabId; 5] = [
        TabId::Home,
        TabId::Domains,
        TabId::Zones,
        TabId::Records,
        TabId::Help,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Domains => "Domains",
            Self::Zones => "Zones",
            Self::Records => "Records",
            Self::Help => "Help",
        }
    }

    pub fn digit(self) -> char {
        match self {
            Self::Home => '1',
            Self::Domains => '2',
            Self::Zones => '3',
            Self::Records => '4',
            Self::Help => '5',
        }
    }

    /// Letter mnemonic. `R` is upper case so `r` stays free for refresh.
    pub fn letter(self) -> char {
        match self {
            Self::Home => 'h',
            Self::Domains => 'd',
            Self::Zones => 'z',
            Self::Records => 'R',
            Self::Help => '?',
        }
    }

    /// Tab addressed by a digit or letter key.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key
            .modifiers
            .difference(KeyModifiers::SHIFT)
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        Self::ALL
            .into_iter()
            .find(|tab| tab.digit() == c || tab.letter() == c)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Browser category shown by this tab.
    pub fn category(self) -> Option<Category> {
        match self {
            Self::Domains => Some(Category::Domains),
            Self::Zones => Some(Category::Zones),
            Self::Records => Some(Category::Records),
            Self::Home | Self::Help => None,
        }
    }

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Domains => Self::Domains,
            Category::Zones => Self::Zones,
            Category::Records => Self::Records,
        }
    }
}
