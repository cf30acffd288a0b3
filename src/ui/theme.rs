use crate::semantic::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Viewer palette
pub struct Theme {
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub ok: Color,
    pub error: Color,
    pub warning: Color,
    pub keyword: Color,
    pub literal: Color,
    pub type_name: Color,
    pub function: Color,
    pub param: Color,
    pub focus: Color,
    pub bar_bg: Color,
}

impl Theme {
    pub const fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
        }
    }

    /// Pane border: bold focus colour when focused, muted otherwise
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    text: Color::Rgb(205, 214, 244),
    accent: Color::Rgb(137, 180, 250),
    muted: Color::Rgb(108, 112, 134),
    ok: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(203, 166, 247),
    keyword: Color::Rgb(137, 180, 250),
    literal: Color::Rgb(250, 179, 135),
    type_name: Color::Rgb(148, 226, 213),
    function: Color::Rgb(249, 226, 175),
    param: Color::Rgb(245, 194, 231),
    focus: Color::Rgb(249, 226, 175),
    bar_bg: Color::Rgb(50, 50, 70),
};
