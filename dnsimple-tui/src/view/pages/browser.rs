//! Domains / Zones / Records tabs: a list panel over a detail panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    Frame,
};

use super::dashboard;
use crate::model::state::{BrowserScreen, BrowserState, Category};
use crate::util::text::truncate;
use crate::util::window_range;
use crate::view::components::{modal, spinner, statusbar};
use crate::view::layout::{marker, page, panel_block, render_panel, text_lines};
use crate::view::theme::Styles;

pub fn render(browser: &BrowserState, tick: u64, frame: &mut Frame, area: Rect) {
    if let BrowserScreen::DomainDashboard(dash) = &browser.screen {
        dashboard::render(dash, tick, frame, area);
        return;
    }

    let title = format!("Browse {}", browser.category.label());
    let areas = page(frame, area, &title, &subtitle(browser));

    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(areas.body);

    let list_inner = panel_block(None).inner(panels[0]);
    render_panel(
        frame,
        panels[0],
        Some(&browser.header),
        list_lines(browser, tick, list_inner),
    );

    let detail_inner = panel_block(None).inner(panels[1]);
    render_panel(
        frame,
        panels[1],
        Some("Details"),
        detail_lines(browser, usize::from(detail_inner.height)),
    );

    statusbar::render(frame, areas.footer, &footer(browser));

    if browser.search.visible {
        modal::render_search(browser, frame, area);
    }
}

fn subtitle(browser: &BrowserState) -> String {
    match (&browser.screen, browser.category) {
        (BrowserScreen::RecordZones, _) => "Choose a zone to inspect records".to_string(),
        (BrowserScreen::RecordList { zone }, _) => format!("Records in {zone}"),
        (_, Category::Zones) => "Use f for zone file and x for distribution status".to_string(),
        _ => "Read-only TUI browser".to_string(),
    }
}

fn list_lines(browser: &BrowserState, tick: u64, inner: Rect) -> Vec<Line<'static>> {
    if browser.loading && browser.detail.is_none() && browser.items.is_empty() {
        return vec![Line::from(format!("{} Loading...", spinner::frame(tick)))];
    }
    if let (Some(err), true) = (&browser.error, browser.items.is_empty()) {
        return vec![
            Line::styled("Failed to load", Styles::error()),
            Line::from(err.clone()),
        ];
    }
    if browser.items.is_empty() {
        return vec![Line::styled("No items found.", Styles::subtitle())];
    }

    // "Showing" line, blank, hint
    let capacity = usize::from(inner.height).saturating_sub(3).max(1);
    let width = usize::from(inner.width);
    let range = window_range(browser.items.len(), browser.selected, capacity);
    let (start, end) = (range.start, range.end);

    let mut lines: Vec<Line<'static>> = browser.items[range]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            let selected = start + offset == browser.selected;
            let mut row = format!("{}{}", marker(selected), item.title);
            if !item.subtitle.is_empty() {
                row.push_str("  |  ");
                row.push_str(&item.subtitle);
            }
            let style = if selected { Styles::selected() } else { Styles::item() };
            Line::styled(truncate(&row, width), style)
        })
        .collect();

    let mut showing = format!("Showing {}-{end} of {}", start + 1, browser.items.len());
    if browser.loading {
        showing.push_str(&format!("  {} Loading...", spinner::frame(tick)));
    }
    lines.push(Line::styled(showing, Styles::subtitle()));
    lines.push(Line::from(""));
    let note = browser.status.as_deref().unwrap_or_else(|| browser.hint());
    lines.push(Line::styled(note.to_string(), Styles::subtitle()));
    lines
}

fn detail_lines(browser: &BrowserState, height: usize) -> Vec<Line<'static>> {
    if let (Some(err), false) = (&browser.error, browser.items.is_empty()) {
        return vec![Line::styled(err.clone(), Styles::error())];
    }
    let Some(detail) = &browser.detail else {
        let text = if browser.loading {
            "Press Enter on an item to load details."
        } else {
            "Select an item and press Enter."
        };
        return vec![Line::styled(text, Styles::subtitle())];
    };

    let mut lines = vec![
        Line::styled(detail.title.clone(), Styles::value()),
        Line::from(""),
    ];
    lines.extend(text_lines(&detail.body, height.saturating_sub(2)));
    lines
}

fn footer(browser: &BrowserState) -> Vec<(&'static str, &'static str)> {
    let search = ("/", "global domain search");
    let refresh = ("r", "refresh");
    let quit = ("q", "quit");
    match &browser.screen {
        BrowserScreen::RecordZones => vec![("Enter", "open zone"), search, refresh, ("Esc", "home"), quit],
        BrowserScreen::RecordList { .. } => vec![
            ("Enter", "record details"),
            ("x", "distribution"),
            search,
            refresh,
            ("Esc", "zones"),
            quit,
        ],
        BrowserScreen::ZoneList => vec![
            ("Enter", "details"),
            ("f", "zone file"),
            ("x", "distribution"),
            search,
            refresh,
            ("Esc", "home"),
            quit,
        ],
        BrowserScreen::DomainList | BrowserScreen::DomainDashboard(_) => vec![
            ("Enter", "open domain dashboard"),
            ("/", "global search"),
            refresh,
            ("Esc", "home"),
            quit,
        ],
    }
}
