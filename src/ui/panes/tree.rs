//! AST outline pane
//!
//! One node per row, indented by level. Leaves and interior nodes are
//! coloured apart so operators stand out from their operands.

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One outline row: indentation and label, and whether the node has children
pub struct OutlineRow {
    pub indent: usize,
    pub label: String,
    pub has_children: bool,
}

pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    outline: Option<&[OutlineRow]>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    let Some(outline) = outline else {
        let paragraph = Paragraph::new("(no tree: construction stack not balanced)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.error));
        frame.render_widget(paragraph, area);
        return;
    };

    let visible_height = visible_rows(area, 0);
    clamp_scroll(scroll_offset, outline.len(), visible_height);

    let lines: Vec<Line> = outline
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let style = if row.has_children {
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.text)
            };
            Line::from(vec![
                Span::styled(
                    "· ".repeat(row.indent / 2),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(row.label.clone(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
