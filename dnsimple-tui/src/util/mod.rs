//! Util layer: infrastructure with no knowledge of DNS.
//!
//!     terminal.rs   raw mode + alternate screen, `Term` alias
//!     logging.rs    file subscriber for the `log` macros
//!     window.rs     visible range of a list for the current viewport
//!     fuzzy.rs      subsequence scoring for the domain search
//!     text.rs       truncation and wrapping measured in terminal columns
//!
//! `window` and `fuzzy` are pure and recomputed on every call; nothing here
//! holds state between frames.

pub mod fuzzy;
mod logging;
mod terminal;
pub mod text;
mod window;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use window::window_range;
