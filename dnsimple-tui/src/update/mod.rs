//! Update layer: the only code that mutates the model.
//!
//!     update(app, msg) -> Vec<Task>
//!       ├── Route::Auth  ─▶ auth.rs
//!       └── Route::Shell ─▶ shell.rs ─┬─▶ home.rs
//!                                     ├─▶ browser.rs ─┬─▶ search.rs
//!                                     │               └─▶ dashboard.rs
//!                                     └─▶ (help has no state to update)
//!
//! Children never reach into their parents. They return an [`Outcome`]: the
//! tasks to run plus an optional signal (`Back`, `Navigate`, `Deleted`, ...)
//! that the parent interprets. Nothing here awaits; backend work is returned
//! as `Task`s for the dispatcher.

mod auth;
mod browser;
mod dashboard;
mod home;
mod search;
mod shell;

use crate::event::DefaultKeymap;
use crate::message::{AppMessage, Task};
use crate::model::state::ShellState;
use crate::model::{App, Route};

/// Result of a component update.
#[derive(Debug)]
pub struct Outcome<S> {
    pub tasks: Vec<Task>,
    pub signal: Option<S>,
}

impl<S> Default for Outcome<S> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            signal: None,
        }
    }
}

impl<S> Outcome<S> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, signal: None }
    }

    pub fn signal(signal: S) -> Self {
        Self {
            tasks: Vec::new(),
            signal: Some(signal),
        }
    }
}

impl<S> From<Vec<Task>> for Outcome<S> {
    fn from(tasks: Vec<Task>) -> Self {
        Self::tasks(tasks)
    }
}

/// Tasks to issue when the app starts on `route`.
pub fn init(app: &mut App) -> Vec<Task> {
    match &mut app.route {
        Route::Shell(shell) => shell::init(shell),
        Route::Auth(_) => Vec::new(),
    }
}

/// Apply one message.
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Task> {
    match msg {
        AppMessage::Noop => Vec::new(),

        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::Tick => {
            app.tick = app.tick.wrapping_add(1);
            Vec::new()
        }

        AppMessage::Resize(width, height) => {
            app.size = (width, height);
            if let Route::Shell(shell) = &mut app.route {
                shell.set_viewport(width, height);
            }
            Vec::new()
        }

        AppMessage::Key(key) => {
            if DefaultKeymap::QUIT.matches(&key) && !app.blocks_global_keys() {
                app.should_quit = true;
                return Vec::new();
            }
            match &mut app.route {
                Route::Auth(auth_state) => {
                    let outcome = auth::handle_key(auth_state, &key);
                    finish_auth(app, outcome)
                }
                Route::Shell(shell_state) => shell::handle_key(shell_state, &key),
            }
        }

        AppMessage::Paste(text) => {
            match &mut app.route {
                Route::Auth(auth_state) => auth::handle_paste(auth_state, &text),
                Route::Shell(shell_state) => shell::handle_paste(shell_state, &text),
            }
            Vec::new()
        }

        AppMessage::Auth(msg) => match &mut app.route {
            Route::Auth(auth_state) => {
                let outcome = auth::handle_result(auth_state, msg);
                finish_auth(app, outcome)
            }
            Route::Shell(_) => Vec::new(),
        },

        msg @ (AppMessage::Home(_) | AppMessage::Browser(..) | AppMessage::Dashboard(_)) => {
            match &mut app.route {
                Route::Shell(shell_state) => shell::handle_result(shell_state, msg),
                Route::Auth(_) => Vec::new(),
            }
        }
    }
}

/// Swap the wizard for the shell once setup completes.
fn finish_auth(app: &mut App, outcome: Outcome<auth::AuthSignal>) -> Vec<Task> {
    let mut tasks = outcome.tasks;
    let Some(auth::AuthSignal::Completed(identity)) = outcome.signal else {
        return tasks;
    };
    let Route::Auth(auth_state) = &app.route else {
        return tasks;
    };

    log::info!("Setup complete, entering the dashboard");
    let mut shell_state = ShellState::new(Some(identity), auth_state.store.paths(), false);
    shell_state.set_viewport(app.size.0, app.size.1);
    tasks.extend(shell::init(&mut shell_state));
    app.route = Route::Shell(Box::new(shell_state));
    tasks
}
