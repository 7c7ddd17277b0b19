//! Full-screen domain dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::{
    domain_lines, record_summary_lines, zone_lines, ActionId, DashboardState, Section,
};
use crate::util::text::truncate;
use crate::util::window_range;
use crate::view::components::{modal, spinner, statusbar};
use crate::view::layout::{marker, page, panel_block, render_panel, text_lines};
use crate::view::theme::Styles;

pub fn render(dash: &DashboardState, tick: u64, frame: &mut Frame, area: Rect) {
    let subtitle = format!("{}  |  full-screen domain operations", dash.domain_name);
    let areas = page(frame, area, "Domain Dashboard", &subtitle);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(3)])
        .split(areas.body);

    frame.render_widget(Paragraph::new(section_tabs(dash.section)), rows[0]);

    let inner = panel_block(None).inner(rows[2]);
    let budget = usize::from(inner.height);
    render_panel(frame, rows[2], Some(dash.section.label()), body(dash, tick, budget));

    statusbar::render(frame, areas.footer, &footer(dash.section));

    if dash.confirm.visible {
        modal::render_confirm(&dash.confirm, tick, frame, area);
    }
}

/// Section strip with the mnemonic letter underlined.
fn section_tabs(active: Section) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let base = if section == active {
            Styles::tab_active()
        } else {
            Styles::tab()
        };
        let label = section.label();
        let key = section.mnemonic();
        match label.to_lowercase().find(key) {
            Some(at) => {
                let next = at + key.len_utf8();
                spans.push(Span::styled(format!(" {}", &label[..at]), base));
                spans.push(Span::styled(
                    label[at..next].to_string(),
                    base.add_modifier(Modifier::UNDERLINED),
                ));
                spans.push(Span::styled(format!("{} ", &label[next..]), base));
            }
            None => spans.push(Span::styled(format!(" {label} "), base)),
        }
    }
    Line::from(spans)
}

fn body(dash: &DashboardState, tick: u64, budget: usize) -> Vec<Line<'static>> {
    if dash.loading && dash.data.domain.is_none() {
        return vec![Line::from(format!("{} Loading dashboard...", spinner::frame(tick)))];
    }
    if let (Some(err), None) = (&dash.error, &dash.data.domain) {
        return vec![
            Line::styled("Failed to load dashboard", Styles::error()),
            Line::from(err.clone()),
        ];
    }

    let mut lines = match dash.section {
        Section::Overview => overview(dash),
        Section::Records => records(dash, budget),
        Section::Zone => zone(dash),
        Section::Diagnostics => diagnostics(dash, budget),
        Section::Actions => actions(dash),
    };

    if dash.loading {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("{} Refreshing...", spinner::frame(tick))));
    }
    if let Some(status) = &dash.status {
        lines.push(Line::from(""));
        lines.push(Line::styled(status.clone(), Styles::success()));
    }
    if let Some(err) = &dash.error {
        lines.push(Line::from(""));
        lines.push(Line::styled(err.clone(), Styles::error()));
    }
    lines
}

fn plain(lines: Vec<String>) -> impl Iterator<Item = Line<'static>> {
    lines.into_iter().map(Line::from)
}

fn overview(dash: &DashboardState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(domain) = &dash.data.domain {
        lines.extend(plain(domain_lines(domain, "Domain ID")));
    }
    lines.push(Line::from(""));

    match &dash.data.zone {
        Some(zone) => {
            lines.push(Line::styled("Zone Summary", Styles::panel_title()));
            lines.push(Line::from(""));
            lines.push(Line::from(format!("Zone ID: {}", zone.id)));
            lines.push(Line::from(format!("Active: {}", zone.active)));
            lines.push(Line::from(format!("Reverse: {}", zone.reverse)));
            lines.push(Line::from(format!("Secondary: {}", zone.secondary)));
            lines.push(Line::from(format!("Records loaded: {}", dash.data.records.len())));
        }
        None => lines.push(Line::styled(
            "Zone not available for this domain",
            Styles::warning(),
        )),
    }

    if !dash.data.warnings.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Warnings", Styles::warning()));
        lines.extend(dash.data.warnings.iter().map(|w| Line::from(format!("- {w}"))));
    }
    lines
}

fn records(dash: &DashboardState, budget: usize) -> Vec<Line<'static>> {
    let records = &dash.data.records;
    if records.is_empty() {
        return vec![Line::styled(
            "No records loaded or zone unavailable.",
            Styles::subtitle(),
        )];
    }

    let capacity = (budget / 2).max(6);
    let range = window_range(records.len(), dash.selected_record, capacity);
    let (start, end) = (range.start, range.end);
    let mut lines: Vec<Line<'static>> = records[range]
        .iter()
        .enumerate()
        .map(|(offset, r)| {
            let selected = start + offset == dash.selected_record;
            let row = format!(
                "{}{:<6} {:<18} ttl={} {}",
                marker(selected),
                r.record_type,
                truncate(r.display_name(), 18),
                r.ttl,
                truncate(&r.content, 42)
            );
            let style = if selected { Styles::selected() } else { Styles::item() };
            Line::styled(row, style)
        })
        .collect();
    lines.push(Line::styled(
        format!("Showing {}-{end} of {}", start + 1, records.len()),
        Styles::subtitle(),
    ));

    if let Some(record) = dash.selected_record() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Selected Record", Styles::panel_title()));
        lines.extend(plain(record_summary_lines(record)));
        if let Some(detail) = dash.record_detail.as_ref().filter(|d| d.id == record.id) {
            lines.push(Line::from(format!("System: {}", detail.system_record)));
        }
    }
    lines
}

fn zone(dash: &DashboardState) -> Vec<Line<'static>> {
    let Some(zone) = &dash.data.zone else {
        return vec![Line::styled("Zone not available.", Styles::warning())];
    };
    let mut lines: Vec<Line<'static>> = plain(zone_lines(zone)).collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Use f for zone file, x for zone distribution, and the Actions tab for mutations.",
        Styles::subtitle(),
    ));
    lines
}

fn diagnostics(dash: &DashboardState, budget: usize) -> Vec<Line<'static>> {
    let Some(pane) = &dash.diagnostics else {
        return vec![
            Line::styled("No diagnostic output yet.", Styles::subtitle()),
            Line::from(""),
            Line::from("f  Fetch zone file"),
            Line::from("x  Check zone distribution"),
            Line::from("In Records section, x checks selected record distribution"),
        ];
    };
    let mut lines = vec![
        Line::styled(pane.title.clone(), Styles::value()),
        Line::from(""),
    ];
    lines.extend(text_lines(&pane.body, budget.saturating_sub(4).max(6)));
    lines
}

fn actions(dash: &DashboardState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, action) in ActionId::ALL.into_iter().enumerate() {
        let selected = i == dash.selected_action;
        let mut label = format!("{}{}", marker(selected), action.label());
        if dash.action_enabled(action).is_err() {
            label.push_str(" (unavailable)");
        }
        let style = if selected { Styles::selected() } else { Styles::item() };
        lines.push(Line::styled(label, style));
        lines.push(Line::styled(format!("   {}", action.hint()), Styles::subtitle()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Mutations open a confirm dialog and require typing 'confirm'.",
        Styles::subtitle(),
    ));
    lines
}

fn footer(section: Section) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![
        ("Esc", "domains list"),
        ("/", "global domain search"),
        ("R", "refresh dashboard"),
        ("o/c/z/g/a", "section"),
    ];
    match section {
        Section::Records => hints.extend([
            ("Enter", "record details"),
            ("x", "record distribution"),
            ("D", "delete record"),
        ]),
        Section::Diagnostics => hints.extend([("f", "zone file"), ("x", "zone distribution")]),
        Section::Actions => hints.push(("Enter", "run action")),
        Section::Overview | Section::Zone => {}
    }
    hints
}
