//! simple: a terminal dashboard for DNSimple.
//!
//! ## Architecture
//!
//! The Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: events and task results (`message/`)
//! - **Update**: state transitions, returns tasks (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: terminal input to messages (`event/`)
//! - **Backend**: config files and task execution (`backend/`)
//!
//! ```text
//! main()
//!     resolve config dir       --config-dir, DNSIMPLE_CONFIG_DIR, ~/.config/dnsimplectl
//!     init_logging()           <config dir>/simple.log
//!     pick backend             fixture for `demo`, live otherwise
//!     init_terminal()
//!     app::run()               main loop, see app.rs
//!     restore_terminal()       always, even when the loop failed
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dnsimple_provider::{CredentialSource, FixtureBackend, LiveBackend, LiveOptions};

use backend::{ConfigStore, Dispatcher, Services, CONFIG_DIR_ENV};
use model::state::{AuthState, ShellState};
use model::{App, Route};
use util::{init_logging, init_terminal, restore_terminal};

#[derive(Debug, Parser)]
#[command(name = "simple", version, about = "A TUI for DNSimple.com")]
struct Cli {
    /// Directory holding the token and config.json
    #[arg(long, value_name = "DIR", env = CONFIG_DIR_ENV)]
    config_dir: Option<String>,

    /// Account id to use instead of the first account of the token
    #[arg(long, value_name = "ID")]
    account: Option<String>,

    /// Use the DNSimple sandbox environment
    #[arg(long)]
    sandbox: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run against built-in demo data, no token needed
    Demo,
    /// Remove the stored API token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = Arc::new(
        ConfigStore::resolve(cli.config_dir.as_deref()).context("failed to resolve config directory")?,
    );
    let _log_guard = init_logging(&store.dir())?;
    log::info!("Starting simple {}", env!("CARGO_PKG_VERSION"));

    let (services, route) = match cli.command {
        Some(Command::Logout) => return logout(&store),
        Some(Command::Demo) => demo(&store),
        None => live(&store, &cli)?,
    };

    let (dispatcher, mut results) = Dispatcher::new(services);
    let mut app = App::new(route);

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &dispatcher, &mut results);
    restore_terminal(&mut terminal)?;

    log::info!("Exiting");
    result
}

fn logout(store: &ConfigStore) -> Result<()> {
    let path = store.token_path();
    if store.remove_token()? {
        log::info!("Token removed");
        println!("Removed {}", path.display());
    } else {
        println!("No token stored at {}", path.display());
    }
    Ok(())
}

fn demo(store: &ConfigStore) -> (Services, Route) {
    log::info!("Demo mode");
    let fixture = Arc::new(FixtureBackend::new());
    let services = Services {
        backend: fixture.clone(),
        auth: fixture,
    };
    let route = shell_route(store, &services);
    (services, route)
}

fn live(store: &Arc<ConfigStore>, cli: &Cli) -> Result<(Services, Route)> {
    // A broken config.json should not lock the user out; the wizard rewrites it
    let config = store.load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        backend::Config::default()
    });
    let sandbox = cli.sandbox || config.sandbox;
    let options = LiveOptions {
        sandbox,
        account_override: cli.account.clone().or(config.account_id),
    };

    let credentials: Arc<dyn CredentialSource> = store.clone();
    let live = Arc::new(LiveBackend::new(credentials, options)?);
    let services = Services {
        backend: live.clone(),
        auth: live,
    };

    let route = if store.has_token() {
        shell_route(store, &services)
    } else {
        log::info!("No token stored, starting setup");
        Route::Auth(Box::new(AuthState::new(store.clone(), sandbox)))
    };
    Ok((services, route))
}

/// Shell route, flagged as demo when the backend serves fixture data.
fn shell_route(store: &ConfigStore, services: &Services) -> Route {
    let demo = services.backend.is_demo();
    Route::Shell(Box::new(ShellState::new(None, store.paths(), demo)))
}
