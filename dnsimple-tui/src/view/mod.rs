//! View layer: draws the model, never changes it.
//!
//!     render(app)
//!       ├── Route::Auth  ─▶ pages/auth.rs
//!       └── Route::Shell ─▶ title, tab bar, then the active tab's page
//!                           (browser.rs hands over to dashboard.rs while a
//!                           domain dashboard is open)
//!
//! Modals are drawn last, over the page, with `Clear` underneath.

mod components;
mod layout;
mod pages;
mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::ShellState;
use crate::model::{App, Route, TabId};
use layout::APP_TITLE;
use theme::Styles;

/// Draw one frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = padded(frame.area());
    match &app.route {
        Route::Auth(auth) => pages::auth::render(auth, app.tick, frame, area),
        Route::Shell(shell) => render_shell(shell, app.tick, frame, area),
    }
}

/// One row and two columns of margin, when there is room for it.
fn padded(area: Rect) -> Rect {
    if area.width < 20 || area.height < 10 {
        return area;
    }
    Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2)
}

fn render_shell(shell: &ShellState, tick: u64, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(1), // tabs
            Constraint::Length(1),
            Constraint::Min(1), // page
        ])
        .split(area);

    let mut title = vec![Span::styled(APP_TITLE, Styles::title())];
    if shell.demo {
        title.push(Span::styled("  [demo]", Styles::warning()));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), rows[0]);
    components::tabbar::render(shell.active, frame, rows[2]);

    let page = rows[4];
    match shell.active {
        TabId::Home => pages::home::render(&shell.home, tick, frame, page),
        TabId::Help => pages::help::render(&shell.help, frame, page),
        tab => {
            if let Some(category) = tab.category() {
                pages::browser::render(shell.browser(category), tick, frame, page);
            }
        }
    }
}
