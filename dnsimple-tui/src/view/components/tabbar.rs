//! Shell tab strip

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::TabId;
use crate::view::theme::Styles;

pub fn render(active: TabId, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw("  ")];
    for (i, tab) in TabId::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if tab == active {
            Styles::tab_active()
        } else {
            Styles::tab()
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::styled(
            format!("[{}/{}] ", tab.digit(), tab.letter()),
            Styles::hint_desc(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
