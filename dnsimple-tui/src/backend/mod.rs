//! Backend layer: everything the TUI does outside the terminal.
//!
//!     ┌──────────┐  Vec<Task>   ┌────────────┐  tokio::spawn  ┌──────────────────┐
//!     │  update  │ ───────────▶ │ Dispatcher │ ─────────────▶ │dyn DnsimpleBackend│
//!     └──────────┘              └─────┬──────┘                └────────┬─────────┘
//!          ▲                          │ mpsc (unbounded)               │
//!          └──── app::run drains ◀────┴──────── AppMessage ◀───────────┘
//!
//!     config_store.rs   token file + config.json under the config directory
//!     tasks.rs          Services, Dispatcher, and the async body of every Task
//!
//! The backend itself (live or fixture) lives in `dnsimple-provider` and is
//! chosen once in `main`.

mod config_store;
mod tasks;

pub use config_store::{Config, ConfigStore, StoragePaths, CONFIG_DIR_ENV};
#[cfg(test)]
pub use tasks::execute;
pub use tasks::{Dispatcher, Services};
