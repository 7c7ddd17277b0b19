//! Page scaffolding shared by every screen.
//!
//! Pages are stacked vertically: title, subtitle, a blank row, one or more
//! bordered panels, then a one-line footer of key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::theme::Styles;
use crate::util::text::clip_lines;

pub const APP_TITLE: &str = "Simple - a TUI for DNSimple.com";

/// Areas of a standard page.
pub struct PageAreas {
    pub body: Rect,
    pub footer: Rect,
}

/// Draw the title and subtitle, returning the body and footer areas.
pub fn page(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) -> PageAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Min(3), // panels
            Constraint::Length(1),
            Constraint::Length(1), // footer
        ])
        .split(area);

    frame.render_widget(Paragraph::new(Span::styled(title.to_string(), Styles::title())), rows[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(subtitle.to_string(), Styles::subtitle())),
        rows[1],
    );

    PageAreas {
        body: rows[3],
        footer: rows[5],
    }
}

/// Rounded panel with an optional title in the border.
pub fn panel_block(title: Option<&str>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::panel_border())
        .padding(Padding::horizontal(1));
    match title {
        Some(title) => block
            .title(format!(" {title} "))
            .title_style(Styles::panel_title()),
        None => block,
    }
}

/// Render `lines` inside a panel, clipped to the panel height.
pub fn render_panel(frame: &mut Frame, area: Rect, title: Option<&str>, lines: Vec<Line<'static>>) {
    let block = panel_block(title);
    let inner = block.inner(area);
    let lines = clip(lines, usize::from(inner.height));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Like [`render_panel`] but long lines wrap instead of being cut.
pub fn render_wrapped_panel(frame: &mut Frame, area: Rect, title: Option<&str>, lines: Vec<Line<'static>>) {
    let block = panel_block(title);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Keep at most `max` lines, replacing the tail with a "more lines" note.
pub fn clip(lines: Vec<Line<'static>>, max: usize) -> Vec<Line<'static>> {
    if max == 0 || lines.len() <= max {
        return lines;
    }
    let hidden = lines.len() - (max - 1);
    let mut kept: Vec<Line<'static>> = lines.into_iter().take(max - 1).collect();
    kept.push(Line::styled(
        format!("... ({hidden} more lines)"),
        Styles::subtitle(),
    ));
    kept
}

/// Plain strings to lines, clipped to `max`.
pub fn text_lines(body: &[String], max: usize) -> Vec<Line<'static>> {
    clip_lines(body.to_vec(), max)
        .into_iter()
        .map(Line::from)
        .collect()
}

/// `Label: value` with the label dimmed.
pub fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::label()),
        Span::raw(value.into()),
    ])
}

/// `Label: value` with the value shown as a path or command.
pub fn code_field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::label()),
        Span::styled(format!(" {} ", value.into()), Styles::code()),
    ])
}

/// Selection prefix for list rows.
pub fn marker(selected: bool) -> &'static str {
    if selected {
        "› "
    } else {
        "  "
    }
}

/// Centred rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
