//! Model layer: all application state.
//!
//!     App
//!     └── Route
//!         ├── Auth(AuthState)            setup wizard
//!         └── Shell(ShellState)
//!             ├── home: HomeState
//!             ├── domains: BrowserState ── screen: DomainList | DomainDashboard(DashboardState)
//!             ├── zones: BrowserState   ── screen: ZoneList
//!             ├── records: BrowserState ── screen: RecordZones | RecordList { zone }
//!             └── help: HelpState
//!
//! Only the update layer mutates these types; the view layer reads them.

mod app;
pub mod state;
mod tab;

pub use app::{App, Route};
pub use tab::TabId;
