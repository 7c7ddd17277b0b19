//! Per-component state.
//!
//!     shell.rs       active tab, lazy-init set, one state per tab
//!     browser.rs     list explorer shared by Domains / Zones / Records
//!     dashboard.rs   single-domain view and its confirmation modal
//!     search.rs      fuzzy domain search modal
//!     auth.rs        setup wizard
//!     home.rs, help.rs
//!     detail.rs      text of detail panes
//!     input.rs       single-line text field

mod auth;
mod browser;
mod dashboard;
mod detail;
mod help;
mod home;
mod input;
mod search;
mod shell;

pub use auth::{AuthState, AuthStep, TOKEN_HELP_URL};
pub use browser::{BrowserItem, BrowserScreen, BrowserState, Category, ScreenKind};
pub use dashboard::{
    ActionId, ConfirmModal, DashboardSnapshot, DashboardState, MutationKind, Section, CONFIRM_WORD,
};
pub use detail::{
    distribution_lines, domain_lines, record_summary_lines, zone_lines, DetailPane,
};
pub use help::HelpState;
pub use home::HomeState;
pub use input::TextInput;
pub use shell::ShellState;
