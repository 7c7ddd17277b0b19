use std::sync::Arc;

use dnsimple_provider::Identity;

use super::input::TextInput;
use crate::backend::ConfigStore;

pub const TOKEN_HELP_URL: &str = "https://dnsimple.com/a/YOUR_ACCOUNT_ID/account/access_tokens";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Welcome,
    ConfigDir,
    TokenInput,
    Validating,
    Success,
    Error,
}

/// First-run setup wizard.
#[derive(Debug)]
pub struct AuthState {
    pub step: AuthStep,
    pub path_input: TextInput,
    pub token_input: TextInput,
    pub identity: Option<Identity>,
    pub error: Option<String>,
    pub store: Arc<ConfigStore>,
    /// Written to `config.json` with the token
    pub sandbox: bool,
}

impl AuthState {
    pub fn new(store: Arc<ConfigStore>, sandbox: bool) -> Self {
        let dir = store.dir().display().to_string();
        Self {
            step: AuthStep::Welcome,
            path_input: TextInput::new(512).with_value(dir),
            token_input: TextInput::masked(512),
            identity: None,
            error: None,
            store,
            sandbox,
        }
    }

    /// Text-entry steps take every key, including `q`.
    pub fn blocks_global_keys(&self) -> bool {
        matches!(self.step, AuthStep::ConfigDir | AuthStep::TokenInput)
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.step = AuthStep::Error;
    }
}
