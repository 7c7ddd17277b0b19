//! Home tab

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    Frame,
};

use super::identity_lines;
use crate::model::state::{Category, HomeState};
use crate::view::components::{spinner, statusbar};
use crate::view::layout::{marker, page, render_panel};
use crate::view::theme::Styles;

pub fn render(home: &HomeState, tick: u64, frame: &mut Frame, area: Rect) {
    let areas = page(
        frame,
        area,
        "DNSimple Home",
        "Browse your DNSimple resources or jump directly with tab shortcuts",
    );

    let account = account_lines(home, tick);
    let account_height = u16::try_from(account.len() + 2).unwrap_or(u16::MAX);
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(account_height),
            Constraint::Length(1),
            Constraint::Length(Category::ALL.len() as u16 * 2 + 2),
            Constraint::Min(0),
        ])
        .split(areas.body);

    render_panel(frame, panels[0], Some("Account"), account);
    render_panel(frame, panels[2], Some("Categories"), menu_lines(home));

    statusbar::render(
        frame,
        areas.footer,
        &[
            ("j/k ↑↓", "navigate"),
            ("Enter", "open tab"),
            ("/", "global domain search"),
            ("1-5/hdzR?", "tabs"),
            ("q", "quit"),
        ],
    );
}

fn account_lines(home: &HomeState, tick: u64) -> Vec<Line<'static>> {
    if home.loading {
        return vec![Line::from(format!(
            "{} Loading account info...",
            spinner::frame(tick)
        ))];
    }
    if let Some(err) = &home.error {
        return vec![
            Line::styled("Failed to load account info", Styles::error()),
            Line::from(err.clone()),
        ];
    }
    if home.identity.is_none() {
        return vec![Line::styled("No account info available.", Styles::subtitle())];
    }
    identity_lines(home.identity.as_ref())
}

fn menu_lines(home: &HomeState) -> Vec<Line<'static>> {
    let current = home.current();
    Category::ALL
        .into_iter()
        .flat_map(|category| {
            let selected = category == current;
            let style = if selected { Styles::selected() } else { Styles::item() };
            [
                Line::styled(format!("{}{}", marker(selected), category.label()), style),
                Line::from(Span::styled(
                    format!("    {}", category.description()),
                    Styles::subtitle(),
                )),
            ]
        })
        .collect()
}
