//! Footer line of key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view::theme::Styles;

/// `(key, description)` pairs for the current screen.
pub type Hints = [(&'static str, &'static str)];

pub fn render(frame: &mut Frame, area: Rect, hints: &Hints) {
    frame.render_widget(Paragraph::new(line(hints)), area);
}

pub fn line(hints: &Hints) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 4);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_separated() {
        let text = line(&[("Enter", "open"), ("q", "quit")]).to_string();
        assert_eq!(text, "Enter open │ q quit");
    }
}
