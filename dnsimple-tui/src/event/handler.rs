use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;

/// Wait up to `timeout` for a terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message.
///
/// Keys are passed through untouched: which action a key means depends on
/// the route, tab, screen and modal, so the update layer decides. Only
/// Ctrl+C is resolved here because it must work everywhere.
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key) => {
            // Press only; Windows terminals also report release and repeat
            if key.kind != KeyEventKind::Press {
                return AppMessage::Noop;
            }
            if DefaultKeymap::FORCE_QUIT.matches(&key) {
                return AppMessage::Quit;
            }
            AppMessage::Key(key)
        }
        Event::Paste(text) => AppMessage::Paste(text),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}
