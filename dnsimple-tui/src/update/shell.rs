use crossterm::event::KeyEvent;

use super::browser::{self, BrowserSignal};
use super::home::{self, HomeSignal};
use crate::event::DefaultKeymap;
use crate::message::{AppMessage, Task};
use crate::model::state::{Category, ShellState};
use crate::model::TabId;

/// Issue the first tab's load.
pub fn init(shell: &mut ShellState) -> Vec<Task> {
    activate(shell, shell.active)
}

/// Switch tabs, running the tab's first load if it has never been shown.
pub fn activate(shell: &mut ShellState, tab: TabId) -> Vec<Task> {
    shell.active = tab;
    if !shell.initialized.insert(tab) {
        return Vec::new();
    }
    log::debug!("Initializing tab {}", tab.label());
    match tab {
        TabId::Home => home::init(&mut shell.home),
        TabId::Help => Vec::new(),
        TabId::Domains | TabId::Zones | TabId::Records => match tab.category() {
            Some(category) => browser::init(shell.browser_mut(category)),
            None => Vec::new(),
        },
    }
}

/// `/` from anywhere: jump to Domains and open the search modal.
fn open_search(shell: &mut ShellState) -> Vec<Task> {
    let tasks = activate(shell, TabId::Domains);
    browser::open_search(&mut shell.domains);
    tasks
}

pub fn handle_key(shell: &mut ShellState, key: &KeyEvent) -> Vec<Task> {
    if !shell.blocks_global_keys() && !shell.captures_key(key) {
        if DefaultKeymap::TAB_NEXT.matches(key) {
            return activate(shell, shell.active.next());
        }
        if DefaultKeymap::TAB_PREV.matches(key) {
            return activate(shell, shell.active.prev());
        }
        if DefaultKeymap::SEARCH.matches(key) {
            return open_search(shell);
        }
        if let Some(tab) = TabId::from_key(key) {
            return activate(shell, tab);
        }
    }

    match shell.active {
        TabId::Home => {
            let outcome = home::handle_key(&mut shell.home, key);
            let mut tasks = outcome.tasks;
            if let Some(HomeSignal::Navigate(category)) = outcome.signal {
                tasks.extend(activate(shell, TabId::for_category(category)));
            }
            tasks
        }
        TabId::Help => {
            if DefaultKeymap::BACK.matches(key) {
                return activate(shell, TabId::Home);
            }
            Vec::new()
        }
        tab => {
            let Some(category) = tab.category() else {
                return Vec::new();
            };
            let outcome = browser::handle_key(shell.browser_mut(category), key);
            let mut tasks = outcome.tasks;
            if let Some(BrowserSignal::Back) = outcome.signal {
                tasks.extend(activate(shell, TabId::Home));
            }
            tasks
        }
    }
}

pub fn handle_paste(shell: &mut ShellState, text: &str) {
    if let Some(category) = shell.active.category() {
        browser::handle_paste(shell.browser_mut(category), text);
    }
}

/// Deliver a task result to the component that asked for it, whichever tab
/// is showing.
pub fn handle_result(shell: &mut ShellState, msg: AppMessage) -> Vec<Task> {
    match msg {
        AppMessage::Home(msg) => {
            home::handle_result(&mut shell.home, msg);
            Vec::new()
        }
        AppMessage::Browser(category, msg) => browser::handle_result(shell.browser_mut(category), msg),
        AppMessage::Dashboard(msg) => browser::handle_dashboard_result(shell.browser_mut(Category::Domains), msg),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use dnsimple_provider::Identity;

    use super::*;
    use crate::message::BrowserRequest;
    use crate::model::state::ScreenKind;
    use crate::update::tests::paths;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn shell() -> ShellState {
        ShellState::new(Some(Identity::default()), paths(), true)
    }

    #[test]
    fn first_activation_loads_once() {
        let mut shell = shell();
        assert!(init(&mut shell).is_empty());

        let tasks = handle_key(&mut shell, &press('3'));
        assert_eq!(shell.active, TabId::Zones);
        assert_eq!(
            tasks,
            vec![Task::Browser {
                category: Category::Zones,
                request: BrowserRequest::List {
                    screen: ScreenKind::ZoneList,
                    zone: None,
                },
            }]
        );

        assert!(handle_key(&mut shell, &press('h')).is_empty());
        assert!(handle_key(&mut shell, &press('z')).is_empty());
        assert_eq!(shell.active, TabId::Zones);
    }

    #[test]
    fn home_without_identity_fetches_it() {
        let mut shell = ShellState::new(None, paths(), true);
        assert_eq!(init(&mut shell), vec![Task::FetchIdentity]);
        assert!(shell.home.loading);
    }

    #[test]
    fn tab_keys_cycle() {
        let mut shell = shell();
        init(&mut shell);
        handle_key(&mut shell, &KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(shell.active, TabId::Domains);
        handle_key(&mut shell, &KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        handle_key(&mut shell, &press('H'));
        assert_eq!(shell.active, TabId::Help);
        handle_key(&mut shell, &KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(shell.active, TabId::Home);
    }

    #[test]
    fn home_enter_navigates() {
        let mut shell = shell();
        init(&mut shell);
        handle_key(&mut shell, &press('j'));
        let tasks = handle_key(&mut shell, &KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(shell.active, TabId::Zones);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn slash_opens_search_on_domains() {
        let mut shell = shell();
        init(&mut shell);
        let tasks = handle_key(&mut shell, &press('/'));
        assert_eq!(shell.active, TabId::Domains);
        assert!(shell.domains.search.visible);
        assert_eq!(tasks.len(), 1);

        // The modal now takes letters that would otherwise switch tabs
        handle_key(&mut shell, &press('z'));
        assert_eq!(shell.active, TabId::Domains);
        assert_eq!(shell.domains.search.input.value(), "z");
    }
}
