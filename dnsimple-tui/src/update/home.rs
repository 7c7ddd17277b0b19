use crossterm::event::KeyEvent;

use super::Outcome;
use crate::event::DefaultKeymap;
use crate::message::{HomeMessage, Task};
use crate::model::state::{Category, HomeState};

#[derive(Debug)]
pub enum HomeSignal {
    Navigate(Category),
}

/// Fetch the identity unless the wizard already supplied it.
pub fn init(home: &mut HomeState) -> Vec<Task> {
    if home.identity.is_some() {
        return Vec::new();
    }
    home.loading = true;
    home.error = None;
    vec![Task::FetchIdentity]
}

pub fn handle_key(home: &mut HomeState, key: &KeyEvent) -> Outcome<HomeSignal> {
    if DefaultKeymap::UP.matches(key) {
        home.select_previous();
    } else if DefaultKeymap::DOWN.matches(key) {
        home.select_next();
    } else if DefaultKeymap::CONFIRM.matches(key) {
        return Outcome::signal(HomeSignal::Navigate(home.current()));
    }
    Outcome::none()
}

pub fn handle_result(home: &mut HomeState, msg: HomeMessage) {
    let HomeMessage::IdentityLoaded(result) = msg;
    home.loading = false;
    match result {
        Ok(identity) => {
            home.identity = Some(identity);
            home.error = None;
        }
        Err(e) => home.error = Some(e),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn menu_stops_at_the_ends() {
        let mut home = HomeState::default();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        for _ in 0..5 {
            handle_key(&mut home, &down);
        }
        assert_eq!(home.current(), Category::Records);

        let outcome = handle_key(&mut home, &KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(
            outcome.signal,
            Some(HomeSignal::Navigate(Category::Records))
        ));
    }

    #[test]
    fn identity_error_is_kept() {
        let mut home = HomeState::default();
        assert_eq!(init(&mut home), vec![Task::FetchIdentity]);
        handle_result(&mut home, HomeMessage::IdentityLoaded(Err("whoami failed: x".into())));
        assert!(!home.loading);
        assert_eq!(home.error.as_deref(), Some("whoami failed: x"));
    }
}
