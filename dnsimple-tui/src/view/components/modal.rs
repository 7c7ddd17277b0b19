//! Overlays: domain search and the mutation confirmation.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

use super::{spinner, statusbar};
use crate::model::state::{BrowserState, ConfirmModal, TextInput, CONFIRM_WORD};
use crate::util::text::truncate;
use crate::util::window_range;
use crate::view::layout::{centered_rect, marker};
use crate::view::theme::Styles;

fn modal_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::panel_title())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Styles::modal_border())
        .style(Styles::modal())
        .padding(Padding::new(2, 2, 1, 1))
}

/// Focused text field with a cursor.
pub fn input_line(input: &TextInput) -> Line<'static> {
    Line::from(vec![
        Span::styled("> ", Styles::hint_key()),
        Span::raw(input.display()),
        Span::styled("▎", Styles::selected()),
    ])
}

/// Fuzzy search over the Domains list.
pub fn render_search(browser: &BrowserState, frame: &mut Frame, area: Rect) {
    let search = &browser.search;
    let max_results = usize::from(area.height).saturating_sub(14).clamp(5, 12);

    let mut lines = vec![
        Line::styled(
            "Fuzzy match on domain names. Enter opens the selected domain dashboard.",
            Styles::subtitle(),
        ),
        Line::from(""),
        input_line(&search.input),
        Line::from(""),
    ];

    if search.matches.is_empty() {
        lines.push(Line::styled("No matches", Styles::subtitle()));
    } else {
        let range = window_range(search.matches.len(), search.selected, max_results);
        let shown = range.clone();
        for i in range {
            let Some(item) = browser.items.get(search.matches[i].index) else {
                continue;
            };
            let selected = i == search.selected;
            let style = if selected { Styles::selected() } else { Styles::item() };
            lines.push(Line::styled(
                truncate(&format!("{}{}", marker(selected), item.title), 80),
                style,
            ));
            if !item.subtitle.is_empty() {
                lines.push(Line::styled(
                    format!("   {}", truncate(&item.subtitle, 80)),
                    Styles::subtitle(),
                ));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(
                "Showing {}-{} of {}",
                shown.start + 1,
                shown.end,
                search.matches.len()
            ),
            Styles::subtitle(),
        ));
    }

    lines.push(Line::from(""));
    lines.push(statusbar::line(&[
        ("type", "search"),
        ("Enter", "open"),
        ("Esc", "cancel"),
        ("↑↓", "move"),
    ]));

    // borders plus padding take 4 rows
    let height = u16::try_from(lines.len() + 4).unwrap_or(u16::MAX);
    let rect = centered_rect(96, height, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(modal_block("Search Domains")), rect);
}

/// Typed confirmation before a mutation runs.
pub fn render_confirm(modal: &ConfirmModal, tick: u64, frame: &mut Frame, area: Rect) {
    let Some(kind) = modal.kind else {
        return;
    };

    let mut lines = vec![Line::from(kind.description()), Line::from("")];
    lines.extend(modal.summary.iter().cloned().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Type '{CONFIRM_WORD}' to proceed."),
        Styles::warning(),
    ));
    lines.push(input_line(&modal.input));

    if let Some(err) = &modal.error {
        lines.push(Line::from(""));
        lines.push(Line::styled(err.clone(), Styles::error()));
    }
    if modal.busy {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("{} Working...", spinner::frame(tick))));
    }
    lines.push(Line::from(""));
    lines.push(statusbar::line(&[("Enter", "confirm"), ("Esc", "cancel")]));

    let height = u16::try_from(lines.len() + 4).unwrap_or(u16::MAX);
    let rect = centered_rect(72, height, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(modal_block(kind.title())), rect);
}
