//! Setup wizard

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use super::identity_lines;
use crate::model::state::{AuthState, AuthStep, TOKEN_HELP_URL};
use crate::view::components::{modal::input_line, spinner, statusbar};
use crate::view::layout::{code_field, field, page, render_panel};
use crate::view::theme::Styles;

pub fn render(auth: &AuthState, tick: u64, frame: &mut Frame, area: Rect) {
    let paths = auth.store.paths();
    let token_file = paths.token_file.display().to_string();
    let config_file = paths.config_file.display().to_string();

    let (title, subtitle, panel_title, lines, hints): (_, _, _, Vec<Line<'static>>, Vec<_>) =
        match auth.step {
            AuthStep::Welcome => (
                "DNSimple Setup",
                "Welcome. This TUI will store your API token locally and verify it before continuing.",
                "Credential Storage",
                vec![
                    field("Config dir", paths.config_dir.display().to_string()),
                    code_field("Token file", token_file),
                    code_field("Config file", config_file),
                ],
                vec![("Enter", "continue"), ("c", "change config path"), ("q", "quit")],
            ),

            AuthStep::ConfigDir => (
                "Config Directory",
                "Choose where credentials should be stored for this session.",
                "Path",
                vec![
                    input_line(&auth.path_input),
                    Line::from(""),
                    Line::styled(
                        "This updates both token and config file locations.",
                        Styles::subtitle(),
                    ),
                ],
                vec![("Enter", "apply"), ("Esc", "back"), ("Ctrl+C", "quit")],
            ),

            AuthStep::TokenInput => (
                "API Token",
                "Paste a DNSimple API token. Input is masked.",
                "Token",
                vec![
                    input_line(&auth.token_input),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Get a token at: ", Styles::label()),
                        Span::styled(TOKEN_HELP_URL, Styles::link()),
                    ]),
                    code_field("Will be saved to", token_file),
                ],
                vec![("Enter", "validate"), ("Esc", "back"), ("Ctrl+C", "quit")],
            ),

            AuthStep::Validating => (
                "Validating Token",
                "",
                "Whoami",
                vec![Line::from(format!(
                    "{} Checking your token with the DNSimple Whoami API...",
                    spinner::frame(tick)
                ))],
                vec![("q", "quit")],
            ),

            AuthStep::Success => {
                let mut lines = vec![
                    Line::styled("Token validated and saved", Styles::success()),
                    code_field("Token file", token_file),
                    code_field("Config file", config_file),
                    Line::from(""),
                ];
                lines.extend(identity_lines(auth.identity.as_ref()));
                (
                    "Authentication Complete",
                    "",
                    "Account",
                    lines,
                    vec![("Enter", "go to home"), ("q", "quit")],
                )
            }

            AuthStep::Error => (
                "Authentication Error",
                "",
                "Error",
                vec![
                    Line::styled("Could not complete authentication", Styles::error()),
                    Line::from(""),
                    Line::from(auth.error.clone().unwrap_or_default()),
                ],
                vec![
                    ("Enter", "retry token entry"),
                    ("Esc", "welcome"),
                    ("q", "quit"),
                ],
            ),
        };

    let areas = page(frame, area, title, subtitle);
    let panel_height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let panel = Rect {
        height: panel_height.min(areas.body.height),
        ..areas.body
    };
    render_panel(frame, panel, Some(panel_title), lines);
    statusbar::render(frame, areas.footer, &hints);
}
