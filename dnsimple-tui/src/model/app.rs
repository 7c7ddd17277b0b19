use super::state::{AuthState, ShellState};

/// Top-level screen. Starts as `Auth` only when no token is stored and only
/// ever moves to `Shell`.
#[derive(Debug)]
pub enum Route {
    Auth(Box<AuthState>),
    Shell(Box<ShellState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub route: Route,
    /// Poll timeouts since start, drives spinners
    pub tick: u64,
    pub size: (u16, u16),
}

impl App {
    pub fn new(route: Route) -> Self {
        Self {
            should_quit: false,
            route,
            tick: 0,
            size: (0, 0),
        }
    }

    pub fn blocks_global_keys(&self) -> bool {
        match &self.route {
            Route::Auth(auth) => auth.blocks_global_keys(),
            Route::Shell(shell) => shell.blocks_global_keys(),
        }
    }
}
