//! Help tab: shortcuts and where credentials live.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    Frame,
};

use crate::backend::CONFIG_DIR_ENV;
use crate::model::state::HelpState;
use crate::view::components::statusbar;
use crate::view::layout::{page, render_panel, render_wrapped_panel};
use crate::view::theme::Styles;

const GLOBAL_SHORTCUTS: [&str; 13] = [
    "1 / h   Home",
    "2 / d   Domains",
    "3 / z   Zones",
    "4 / R   Records",
    "5 / ?   Help",
    "",
    "tab / shift+tab   Next/Prev tab",
    "/                 Domain search (global; jumps to Domains)",
    "j/k or arrows     Move selection",
    "enter             Open / inspect selected item",
    "esc               Back (or return home)",
    "r                 Refresh current list",
    "q                 Quit",
];

const TAB_ACTIONS: [&str; 6] = [
    "Zones tab: f (zone file), x (distribution status)",
    "Records tab: enter on a zone first, then x (record distribution status)",
    "Domains tab: enter opens the domain dashboard",
    "Dashboard: o/c/z/g/a sections, R refresh, f zone file, x distribution, D delete record",
    "",
    "Mutations (zone activation, record and domain deletion) require typing 'confirm'.",
];

pub fn render(help: &HelpState, frame: &mut Frame, area: Rect) {
    let subtitle = if help.demo {
        "TUI navigation and configuration reference (demo data, nothing is sent to DNSimple)"
    } else {
        "TUI navigation and configuration reference"
    };
    let areas = page(frame, area, "Help", subtitle);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GLOBAL_SHORTCUTS.len() as u16 + 2),
            Constraint::Min(TAB_ACTIONS.len() as u16 + 2),
        ])
        .split(areas.body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    let shortcuts = GLOBAL_SHORTCUTS.iter().map(|l| Line::from(*l)).collect();
    render_panel(frame, columns[0], Some("Global Shortcuts"), shortcuts);

    let paths = &help.paths;
    let path_line = |p: &std::path::Path| Line::styled(format!(" {} ", p.display()), Styles::code());
    let storage = vec![
        Line::from("Config dir:"),
        path_line(&paths.config_dir),
        Line::from(""),
        Line::from("Token file:"),
        path_line(&paths.token_file),
        Line::from(""),
        Line::from("Config file:"),
        path_line(&paths.config_file),
        Line::from(""),
        Line::styled(format!("Override config dir with {CONFIG_DIR_ENV}"), Styles::subtitle()),
    ];
    render_wrapped_panel(frame, columns[1], Some("Storage Paths"), storage);

    let actions = TAB_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, l)| {
            if i + 1 == TAB_ACTIONS.len() {
                Line::styled(*l, Styles::subtitle())
            } else {
                Line::from(*l)
            }
        })
        .collect();
    render_wrapped_panel(frame, rows[1], Some("Tab-Specific Actions"), actions);

    statusbar::render(
        frame,
        areas.footer,
        &[("1-5/hdzR?", "jump to a tab"), ("/", "global domain search"), ("Esc", "home")],
    );
}
