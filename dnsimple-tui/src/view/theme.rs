//! Colours and shared styles

use ratatui::style::{Color, Modifier, Style};

/// Palette
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub primary: Color,
    pub success: Color,
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
    pub subtle: Color,
    pub item: Color,
    pub code_fg: Color,
    pub code_bg: Color,
    pub modal_bg: Color,
}

impl ThemeColors {
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(30, 136, 229),
            success: Color::Rgb(67, 160, 71),
            accent: Color::Rgb(124, 77, 255),
            warning: Color::Rgb(251, 140, 0),
            error: Color::Rgb(229, 57, 53),
            subtle: Color::Rgb(107, 114, 128),
            item: Color::Rgb(209, 213, 219),
            code_fg: Color::Rgb(229, 231, 235),
            code_bg: Color::Rgb(31, 41, 55),
            modal_bg: Color::Rgb(17, 24, 39),
        }
    }
}

pub const fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// Common styles
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(colors().subtle)
    }

    pub fn panel_border() -> Style {
        Style::default().fg(colors().primary)
    }

    pub fn panel_title() -> Style {
        Self::title()
    }

    pub fn label() -> Style {
        Self::subtitle()
    }

    pub fn value() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn item() -> Style {
        Style::default().fg(colors().item)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(colors().success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(colors().accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn code() -> Style {
        Style::default().fg(colors().code_fg).bg(colors().code_bg)
    }

    pub fn tab() -> Style {
        Style::default().fg(colors().subtle)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key in a footer hint
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Description in a footer hint
    pub fn hint_desc() -> Style {
        Self::subtitle()
    }

    pub fn modal_border() -> Style {
        Style::default().fg(colors().warning)
    }

    pub fn modal() -> Style {
        Style::default().bg(colors().modal_bg)
    }
}
