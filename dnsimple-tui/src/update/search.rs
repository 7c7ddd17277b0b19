use crossterm::event::KeyEvent;

use super::browser;
use crate::event::DefaultKeymap;
use crate::message::Task;
use crate::model::state::BrowserState;

/// Keys while the search modal is open. Letters go to the query, so only the
/// arrow keys move the highlight.
pub fn handle_key(state: &mut BrowserState, key: &KeyEvent) -> Vec<Task> {
    if DefaultKeymap::CANCEL.matches(key) {
        state.search.close();
    } else if DefaultKeymap::MODAL_UP.matches(key) {
        state.search.select_previous();
    } else if DefaultKeymap::MODAL_DOWN.matches(key) {
        state.search.select_next();
    } else if DefaultKeymap::CONFIRM.matches(key) {
        let Some(index) = state.search.current().filter(|&i| i < state.items.len()) else {
            return Vec::new();
        };
        state.selected = index;
        state.search.close();
        return browser::open_dashboard(state);
    } else if !DefaultKeymap::SEARCH.matches(key) && state.search.input.handle_key(key) {
        requery(state);
    }
    Vec::new()
}

pub fn handle_paste(state: &mut BrowserState, text: &str) {
    state.search.input.paste(text);
    requery(state);
}

/// Re-rank against the current items.
pub fn requery(state: &mut BrowserState) {
    let titles = state.titles();
    state.search.recompute(&titles);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::message::DashboardRequest;
    use crate::model::state::{BrowserItem, Category, ScreenKind};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn domains() -> BrowserState {
        let mut state = BrowserState::new(Category::Domains);
        state.items = ["acme.dev", "bolt.io", "academy.org"]
            .iter()
            .enumerate()
            .map(|(i, name)| BrowserItem {
                key: (*name).to_string(),
                title: (*name).to_string(),
                subtitle: String::new(),
                id: i as u64,
            })
            .collect();
        browser::open_search(&mut state);
        state
    }

    #[test]
    fn typing_narrows_and_enter_opens_the_dashboard() {
        let mut state = domains();
        for c in "bolt".chars() {
            handle_key(&mut state, &press(KeyCode::Char(c)));
        }
        assert_eq!(state.search.matches.len(), 1);

        let tasks = handle_key(&mut state, &press(KeyCode::Enter));
        assert!(!state.search.visible);
        assert_eq!(state.selected, 1);
        assert_eq!(state.screen.kind(), ScreenKind::DomainDashboard);
        assert_eq!(
            tasks,
            vec![Task::Dashboard {
                domain: "bolt.io".into(),
                request: DashboardRequest::Refresh,
            }]
        );
    }

    #[test]
    fn letters_do_not_move_the_highlight() {
        let mut state = domains();
        handle_key(&mut state, &press(KeyCode::Char('j')));
        assert_eq!(state.search.input.value(), "j");
        assert_eq!(state.search.selected, 0);

        handle_key(&mut state, &press(KeyCode::Backspace));
        handle_key(&mut state, &press(KeyCode::Down));
        assert_eq!(state.search.selected, 1);
    }

    #[test]
    fn escape_closes_without_selecting() {
        let mut state = domains();
        handle_key(&mut state, &press(KeyCode::Down));
        let tasks = handle_key(&mut state, &press(KeyCode::Esc));
        assert!(tasks.is_empty());
        assert!(!state.search.visible);
        assert_eq!(state.selected, 0);
        assert_eq!(state.screen.kind(), ScreenKind::DomainList);
    }

    #[test]
    fn enter_ignores_a_match_past_the_end_of_the_list() {
        let mut state = domains();
        // academy.org ranks first but sits at index 2
        assert_eq!(state.search.current(), Some(2));
        state.items.truncate(1);

        assert!(handle_key(&mut state, &press(KeyCode::Enter)).is_empty());
        assert_eq!(state.selected, 0);
        assert_eq!(state.screen.kind(), ScreenKind::DomainList);
    }

    #[test]
    fn enter_with_no_match_does_nothing() {
        let mut state = domains();
        handle_paste(&mut state, "zzzz");
        assert!(state.search.matches.is_empty());
        assert!(handle_key(&mut state, &press(KeyCode::Enter)).is_empty());
        assert!(state.search.visible);
    }
}
