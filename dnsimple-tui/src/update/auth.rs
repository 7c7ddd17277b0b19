use crossterm::event::KeyEvent;
use dnsimple_provider::Identity;

use super::Outcome;
use crate::backend::Config;
use crate::event::DefaultKeymap;
use crate::message::{AuthMessage, Task, Validated};
use crate::model::state::{AuthState, AuthStep};

#[derive(Debug)]
pub enum AuthSignal {
    /// Token stored; switch to the shell
    Completed(Identity),
}

pub fn handle_key(auth: &mut AuthState, key: &KeyEvent) -> Outcome<AuthSignal> {
    match auth.step {
        AuthStep::Welcome => {
            if DefaultKeymap::CONFIRM.matches(key) {
                auth.step = AuthStep::TokenInput;
            } else if DefaultKeymap::CHANGE_CONFIG_DIR.matches(key) {
                auth.path_input.set_value(auth.store.dir().display().to_string());
                auth.step = AuthStep::ConfigDir;
            }
        }

        AuthStep::ConfigDir => {
            if DefaultKeymap::CANCEL.matches(key) {
                auth.step = AuthStep::Welcome;
            } else if DefaultKeymap::CONFIRM.matches(key) {
                apply_config_dir(auth);
            } else {
                auth.path_input.handle_key(key);
            }
        }

        AuthStep::TokenInput => {
            if DefaultKeymap::CANCEL.matches(key) {
                auth.step = AuthStep::Welcome;
            } else if DefaultKeymap::CONFIRM.matches(key) {
                let token = auth.token_input.value().trim().to_string();
                if token.is_empty() {
                    auth.fail("token cannot be empty");
                    return Outcome::none();
                }
                auth.step = AuthStep::Validating;
                auth.error = None;
                return Outcome::tasks(vec![Task::ValidateToken { token }]);
            } else {
                auth.token_input.handle_key(key);
            }
        }

        AuthStep::Validating => {}

        AuthStep::Success => {
            if DefaultKeymap::CONFIRM.matches(key) {
                let identity = auth.identity.clone().unwrap_or_default();
                return Outcome::signal(AuthSignal::Completed(identity));
            }
        }

        AuthStep::Error => {
            if DefaultKeymap::CONFIRM.matches(key) {
                auth.step = AuthStep::TokenInput;
            } else if DefaultKeymap::BACK.matches(key) {
                auth.step = AuthStep::Welcome;
            }
        }
    }
    Outcome::none()
}

pub fn handle_paste(auth: &mut AuthState, text: &str) {
    match auth.step {
        AuthStep::ConfigDir => auth.path_input.paste(text),
        AuthStep::TokenInput => auth.token_input.paste(text),
        _ => {}
    }
}

fn apply_config_dir(auth: &mut AuthState) {
    match auth.store.set_dir(auth.path_input.value()) {
        Ok(dir) => {
            auth.path_input.set_value(dir.display().to_string());
            auth.step = AuthStep::Welcome;
        }
        Err(e) => auth.fail(e.to_string()),
    }
}

pub fn handle_result(auth: &mut AuthState, msg: AuthMessage) -> Outcome<AuthSignal> {
    let AuthMessage::Validated { token, result } = msg;
    if auth.step != AuthStep::Validating {
        return Outcome::none();
    }

    match result.and_then(|validated| persist(auth, &token, validated)) {
        Ok(identity) => {
            log::info!("Token validated ({})", identity.token_kind());
            auth.identity = Some(identity);
            auth.error = None;
            auth.token_input.clear();
            auth.step = AuthStep::Success;
        }
        Err(e) => {
            log::warn!("Setup failed: {e}");
            auth.fail(e);
        }
    }
    Outcome::none()
}

/// Token first, then `config.json`. Either failure aborts setup.
fn persist(auth: &AuthState, token: &str, validated: Validated) -> Result<Identity, String> {
    auth.store
        .save_token(token)
        .map_err(|e| format!("failed to save token: {e}"))?;

    let config = Config {
        account_id: validated.account_id,
        sandbox: auth.sandbox,
    };
    auth.store
        .save_config(&config)
        .map_err(|e| format!("failed to save config: {e}"))?;

    Ok(validated.identity)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::backend::ConfigStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wizard(dir: &std::path::Path) -> AuthState {
        AuthState::new(Arc::new(ConfigStore::at(dir)), false)
    }

    #[test]
    fn happy_path_issues_one_validation() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = wizard(dir.path());

        handle_key(&mut auth, &press(KeyCode::Enter));
        assert_eq!(auth.step, AuthStep::TokenInput);
        handle_paste(&mut auth, " abc \n");

        let outcome = handle_key(&mut auth, &press(KeyCode::Enter));
        assert_eq!(auth.step, AuthStep::Validating);
        assert_eq!(
            outcome.tasks,
            vec![Task::ValidateToken {
                token: "abc".into()
            }]
        );
    }

    #[test]
    fn empty_token_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = wizard(dir.path());
        auth.step = AuthStep::TokenInput;

        let outcome = handle_key(&mut auth, &press(KeyCode::Enter));
        assert!(outcome.tasks.is_empty());
        assert_eq!(auth.step, AuthStep::Error);
        assert_eq!(auth.error.as_deref(), Some("token cannot be empty"));

        handle_key(&mut auth, &press(KeyCode::Enter));
        assert_eq!(auth.step, AuthStep::TokenInput);
        handle_key(&mut auth, &press(KeyCode::Esc));
        assert_eq!(auth.step, AuthStep::Welcome);
    }

    #[test]
    fn config_dir_can_be_changed() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = wizard(dir.path());
        handle_key(&mut auth, &press(KeyCode::Char('c')));
        assert_eq!(auth.step, AuthStep::ConfigDir);
        assert!(auth.blocks_global_keys());

        auth.path_input.clear();
        handle_paste(&mut auth, &dir.path().join("other").display().to_string());
        handle_key(&mut auth, &press(KeyCode::Enter));
        assert_eq!(auth.step, AuthStep::Welcome);
        assert_eq!(auth.store.dir(), dir.path().join("other"));
    }

    #[test]
    fn empty_config_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = wizard(dir.path());
        handle_key(&mut auth, &press(KeyCode::Char('c')));
        handle_key(&mut auth, &KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        handle_key(&mut auth, &press(KeyCode::Enter));
        assert_eq!(auth.step, AuthStep::Error);
        assert_eq!(auth.error.as_deref(), Some("config directory cannot be empty"));
    }

    #[test]
    fn validation_failure_routes_to_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = wizard(dir.path());
        auth.step = AuthStep::Validating;

        handle_result(
            &mut auth,
            AuthMessage::Validated {
                token: "bad".into(),
                result: Err("invalid token".into()),
            },
        );
        assert_eq!(auth.step, AuthStep::Error);
        assert_eq!(auth.error.as_deref(), Some("invalid token"));
        assert!(!auth.store.has_token());
    }

    #[test]
    fn persistence_failure_routes_to_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the config directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut auth = wizard(&blocker);
        auth.step = AuthStep::Validating;

        handle_result(
            &mut auth,
            AuthMessage::Validated {
                token: "tok".into(),
                result: Ok(Validated {
                    identity: Identity::default(),
                    account_id: None,
                }),
            },
        );
        assert_eq!(auth.step, AuthStep::Error);
        assert!(auth
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("failed to save token: ")));
    }

    #[test]
    fn success_enter_completes() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = wizard(dir.path());
        auth.step = AuthStep::Success;
        let outcome = handle_key(&mut auth, &press(KeyCode::Enter));
        assert!(matches!(outcome.signal, Some(AuthSignal::Completed(_))));
    }
}
