//! Status bar rendering with keybindings and result counters

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar summarizes
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Length of the preorder text and height of the tree, `None` when
    /// there is no tree
    pub tree: Option<(usize, usize)>,
    pub errors: usize,
    pub warnings: usize,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.bar_bg);
    let badge = |text: String, color: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    let tree_text = match data.tree {
        Some((len, height)) => format!(" preorder {} chars, height {} ", len, height),
        None => " no tree ".to_string(),
    };
    let tree_color = if data.tree.is_some() {
        DEFAULT_THEME.accent
    } else {
        DEFAULT_THEME.error
    };

    let left_spans = vec![
        badge(tree_text, tree_color),
        Span::styled(" ", bar_bg),
        badge(
            format!(" {} errors ", data.errors),
            if data.errors > 0 {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.ok
            },
        ),
        Span::styled(" ", bar_bg),
        badge(format!(" {} warnings ", data.warnings), DEFAULT_THEME.warning),
        Span::styled(" | ", bar_bg.fg(DEFAULT_THEME.muted)),
        Span::styled(format!(" {} ", data.message), bar_bg.fg(DEFAULT_THEME.text)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_bg)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.text);
    let sep_style = bar_bg.fg(DEFAULT_THEME.muted);

    let right_spans = vec![
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" scroll ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_bg)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
