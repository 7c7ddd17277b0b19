use crossterm::event::KeyEvent;

use super::dashboard::{self, DashboardSignal};
use super::{search, Outcome};
use crate::event::DefaultKeymap;
use crate::message::{
    BrowserMessage, BrowserRequest, DashboardMessage, DetailPayload, DetailTarget, ListPayload, Task,
};
use crate::model::state::{
    BrowserItem, BrowserScreen, BrowserState, Category, DashboardState, DetailPane, ScreenKind,
};

#[derive(Debug)]
pub enum BrowserSignal {
    /// Leave the tab for Home
    Back,
}

pub fn init(browser: &mut BrowserState) -> Vec<Task> {
    load_list(browser)
}

fn load_list(browser: &mut BrowserState) -> Vec<Task> {
    browser.loading = true;
    browser.error = None;
    vec![Task::Browser {
        category: browser.category,
        request: BrowserRequest::List {
            screen: browser.screen.kind(),
            zone: browser.zone().map(str::to_string),
        },
    }]
}

fn load_detail(browser: &mut BrowserState, target: DetailTarget) -> Vec<Task> {
    let Some(item) = browser.current_item() else {
        return Vec::new();
    };
    let key = item.key.clone();
    browser.loading = true;
    browser.error = None;
    vec![Task::Browser {
        category: browser.category,
        request: BrowserRequest::Detail {
            screen: browser.screen.kind(),
            key,
            target,
        },
    }]
}

/// Replace whatever the Domains tab shows with the list plus search modal.
pub fn open_search(browser: &mut BrowserState) {
    if browser.category != Category::Domains {
        return;
    }
    browser.screen = BrowserScreen::DomainList;
    browser.detail = None;
    let titles = browser.titles();
    browser.search.open(&titles);
}

/// Open the dashboard for the selected domain.
pub fn open_dashboard(browser: &mut BrowserState) -> Vec<Task> {
    let Some(item) = browser.current_item() else {
        return Vec::new();
    };
    log::debug!("Opening dashboard for {}", item.key);
    let mut dash = Box::new(DashboardState::new(item.key.clone()));
    let tasks = dashboard::init(&mut dash);
    browser.screen = BrowserScreen::DomainDashboard(dash);
    tasks
}

pub fn handle_key(browser: &mut BrowserState, key: &KeyEvent) -> Outcome<BrowserSignal> {
    if browser.search.visible {
        return search::handle_key(browser, key).into();
    }

    if let BrowserScreen::DomainDashboard(dash) = &mut browser.screen {
        let outcome = dashboard::handle_key(dash, key);
        let mut tasks = outcome.tasks;
        if let Some(signal) = outcome.signal {
            tasks.extend(leave_dashboard(browser, signal));
        }
        return tasks.into();
    }

    if browser.loading {
        return Outcome::none();
    }

    if DefaultKeymap::UP.matches(key) {
        browser.select_previous();
    } else if DefaultKeymap::DOWN.matches(key) {
        browser.select_next();
    } else if DefaultKeymap::FIRST.matches(key) {
        browser.select_first();
    } else if DefaultKeymap::LAST.matches(key) {
        browser.select_last();
    } else if DefaultKeymap::PAGE_UP.matches(key) {
        browser.page_up();
    } else if DefaultKeymap::PAGE_DOWN.matches(key) {
        browser.page_down();
    } else if DefaultKeymap::CONFIRM.matches(key) {
        return handle_enter(browser).into();
    } else if DefaultKeymap::BACK.matches(key) {
        return handle_back(browser);
    } else if DefaultKeymap::REFRESH.matches(key) {
        browser.detail = None;
        browser.status = None;
        return load_list(browser).into();
    } else if DefaultKeymap::ZONE_FILE.matches(key) {
        let zone = browser
            .current_item()
            .filter(|_| browser.screen.kind() == ScreenKind::ZoneList)
            .map(|item| item.key.clone());
        if let Some(zone) = zone {
            return load_detail(browser, DetailTarget::ZoneFile(zone)).into();
        }
    } else if DefaultKeymap::DISTRIBUTION.matches(key) {
        return distribution(browser).into();
    }
    Outcome::none()
}

fn handle_enter(browser: &mut BrowserState) -> Vec<Task> {
    let Some(item) = browser.current_item().cloned() else {
        return Vec::new();
    };
    match browser.screen.kind() {
        ScreenKind::DomainList => open_dashboard(browser),
        ScreenKind::ZoneList => load_detail(browser, DetailTarget::Zone(item.key)),
        ScreenKind::RecordZones => {
            browser.save_picker();
            browser.screen = BrowserScreen::RecordList { zone: item.key };
            browser.selected = 0;
            browser.detail = None;
            browser.header = browser.default_header();
            load_list(browser)
        }
        ScreenKind::RecordList => {
            let Some(zone) = browser.zone().map(str::to_string) else {
                return Vec::new();
            };
            load_detail(
                browser,
                DetailTarget::Record {
                    zone,
                    record_id: item.id,
                },
            )
        }
        ScreenKind::DomainDashboard => Vec::new(),
    }
}

fn handle_back(browser: &mut BrowserState) -> Outcome<BrowserSignal> {
    if !matches!(browser.screen, BrowserScreen::RecordList { .. }) {
        return Outcome::signal(BrowserSignal::Back);
    }
    if browser.restore_picker() {
        return Outcome::none();
    }
    // No saved picker; fetch it again
    browser.screen = BrowserScreen::RecordZones;
    browser.items.clear();
    browser.selected = 0;
    browser.detail = None;
    browser.header = browser.default_header();
    load_list(browser).into()
}

fn distribution(browser: &mut BrowserState) -> Vec<Task> {
    let Some(item) = browser.current_item() else {
        return Vec::new();
    };
    let target = match (browser.screen.kind(), browser.zone()) {
        (ScreenKind::ZoneList, _) => DetailTarget::ZoneDistribution(item.key.clone()),
        (ScreenKind::RecordList, Some(zone)) => DetailTarget::RecordDistribution {
            zone: zone.to_string(),
            record_id: item.id,
        },
        _ => return Vec::new(),
    };
    load_detail(browser, target)
}

fn leave_dashboard(browser: &mut BrowserState, signal: DashboardSignal) -> Vec<Task> {
    browser.screen = BrowserScreen::DomainList;
    match signal {
        DashboardSignal::Exit => Vec::new(),
        DashboardSignal::Deleted(name) => {
            log::info!("Domain {name} deleted");
            browser.status = Some(format!("Domain '{name}' deleted."));
            browser.detail = None;
            load_list(browser)
        }
    }
}

pub fn handle_paste(browser: &mut BrowserState, text: &str) {
    if browser.search.visible {
        search::handle_paste(browser, text);
    } else if let Some(dash) = browser.dashboard_mut() {
        dashboard::handle_paste(dash, text);
    }
}

pub fn handle_result(browser: &mut BrowserState, msg: BrowserMessage) -> Vec<Task> {
    match msg {
        BrowserMessage::ListLoaded {
            screen,
            zone,
            result,
        } => {
            if screen != browser.screen.kind() || zone.as_deref() != browser.zone() {
                log::debug!("Dropping stale {screen:?} list");
                return Vec::new();
            }
            browser.loading = false;
            match result {
                Ok(payload) => apply_list(browser, payload),
                Err(e) => {
                    browser.error = Some(e);
                    browser.items.clear();
                    browser.selected = 0;
                    browser.header = browser.default_header();
                    if browser.search.visible {
                        search::requery(browser);
                    }
                }
            }
        }

        BrowserMessage::DetailLoaded {
            screen,
            key,
            result,
        } => {
            let current = browser.current_item().map(|i| i.key.as_str());
            if screen != browser.screen.kind() || current != Some(key.as_str()) {
                log::debug!("Dropping stale detail for {key}");
                return Vec::new();
            }
            browser.loading = false;
            match result {
                Ok(DetailPayload::Record(record)) => {
                    let zone = browser.zone().unwrap_or(&record.zone_id).to_string();
                    browser.error = None;
                    browser.detail = Some(DetailPane::record(&record, &zone));
                }
                Ok(payload) => {
                    browser.error = None;
                    browser.detail = Some(DetailPane::from_payload(&payload));
                }
                Err(e) => browser.error = Some(e),
            }
        }
    }
    Vec::new()
}

fn apply_list(browser: &mut BrowserState, payload: ListPayload) {
    let picker = browser.screen.kind() == ScreenKind::RecordZones;
    let items: Vec<BrowserItem> = match payload {
        ListPayload::Domains(domains) => domains.iter().map(BrowserItem::from_domain).collect(),
        ListPayload::Zones(zones) if picker => {
            zones.iter().map(BrowserItem::from_picker_zone).collect()
        }
        ListPayload::Zones(zones) => zones.iter().map(BrowserItem::from_zone).collect(),
        ListPayload::Records(records) => records.iter().map(BrowserItem::from_record).collect(),
    };

    browser.header = match &browser.screen {
        BrowserScreen::RecordZones => format!("Records / Zones ({})", items.len()),
        BrowserScreen::RecordList { zone } => format!("Records / {zone} ({})", items.len()),
        _ => format!("{} ({})", browser.category.label(), items.len()),
    };
    browser.items = items;
    browser.error = None;
    browser.clamp_selection();

    if browser.search.visible {
        search::requery(browser);
    }
}

/// Route a dashboard result to the open dashboard, if it is still the one
/// that asked.
pub fn handle_dashboard_result(browser: &mut BrowserState, msg: DashboardMessage) -> Vec<Task> {
    let Some(dash) = browser
        .dashboard_mut()
        .filter(|d| d.domain_name == msg.domain())
    else {
        log::debug!("Dropping result for closed dashboard {}", msg.domain());
        return Vec::new();
    };
    let outcome = dashboard::handle_result(dash, msg);
    let mut tasks = outcome.tasks;
    if let Some(signal) = outcome.signal {
        tasks.extend(leave_dashboard(browser, signal));
    }
    tasks
}
