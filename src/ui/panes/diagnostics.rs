//! Diagnostics pane rendering

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::semantic::Diagnostic;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &[Diagnostic],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Diagnostics ", is_focused);

    if diagnostics.is_empty() {
        let paragraph = Paragraph::new("(no diagnostics)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.ok));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_rows(area, 0);
    clamp_scroll(scroll_offset, diagnostics.len(), visible_height);

    let items: Vec<ListItem> = diagnostics
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|d| {
            let color = DEFAULT_THEME.severity(d.severity);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("Line:{}: ", d.line),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(
                    format!("{}: ", d.severity.name()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(d.message.clone(), Style::default().fg(DEFAULT_THEME.text)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
