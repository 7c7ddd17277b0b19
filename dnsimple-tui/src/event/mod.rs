//! Event layer: terminal input to [`AppMessage`](crate::message::AppMessage).
//!
//!     handler.rs   poll with timeout, filter key presses, Ctrl+C
//!     keymap.rs    every shortcut as a `KeyBinding` / `KeySet` constant
//!
//! Background task results do not pass through here; they arrive on the
//! dispatcher channel drained by the main loop.

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
