use crossterm::event::KeyEvent;

use super::result::{AuthMessage, BrowserMessage, DashboardMessage, HomeMessage};
use crate::model::state::Category;

/// Top-level message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Nothing to do; stands in for `Option::None`
    Noop,
    Quit,
    /// Poll timeout, advances spinners
    Tick,
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),

    // Task results
    Home(HomeMessage),
    Auth(AuthMessage),
    Browser(Category, BrowserMessage),
    Dashboard(DashboardMessage),
}
