//! Main loop
//!
//!     loop {
//!         terminal.draw(view::render)         draw the current model
//!         if app.should_quit { break }
//!         drain results from the dispatcher   each one goes through update()
//!         poll terminal input for 100 ms      key / paste / resize, or Tick
//!         update() -> tasks -> dispatcher     tasks run on the tokio runtime
//!     }
//!
//! `update` never awaits, so the loop stays responsive while requests are in
//! flight; results arrive on the channel as ordinary messages.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Dispatcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Run until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &Dispatcher,
    results: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let size = terminal.size()?;
    update::update(app, AppMessage::Resize(size.width, size.height));
    dispatcher.spawn_all(update::init(app));

    loop {
        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        loop {
            match results.try_recv() {
                Ok(msg) => dispatcher.spawn_all(update::update(app, msg)),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Result channel closed");
                    break;
                }
            }
        }

        let msg = match event::poll_event(POLL_TIMEOUT)? {
            Some(event) => event::handle_event(event),
            None => AppMessage::Tick,
        };
        dispatcher.spawn_all(update::update(app, msg));
    }

    Ok(())
}
