//! Symbol table pane

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::semantic::report::HEADERS;
use crate::semantic::SymbolReport;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    report: &SymbolReport,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Symbol Table ", is_focused);

    if report.is_empty() {
        let paragraph = Paragraph::new("(no symbols)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_rows(area, 1);
    clamp_scroll(scroll_offset, report.rows().len(), visible_height);

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = report
        .rows()
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let kind_style = match row.symbol {
                "function" => Style::default().fg(DEFAULT_THEME.function),
                "param" => Style::default().fg(DEFAULT_THEME.param),
                _ => Style::default().fg(DEFAULT_THEME.text),
            };
            let [symbol, name, ty, scope, line, value] = row.cells();
            Row::new(vec![
                Cell::from(symbol).style(kind_style),
                Cell::from(name),
                Cell::from(ty).style(Style::default().fg(DEFAULT_THEME.type_name)),
                Cell::from(scope),
                Cell::from(line),
                Cell::from(value).style(Style::default().fg(DEFAULT_THEME.literal)),
            ])
        })
        .collect();

    let widths = report
        .column_widths()
        .map(|w| Constraint::Length(w as u16));
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);
    frame.render_widget(table, area);
}
