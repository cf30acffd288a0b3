//! Source code pane rendering with syntax highlighting
//!
//! Shows the analyzed program with line numbers. Lines that carry a
//! diagnostic get a marker in the gutter, red for errors and magenta for
//! warnings.

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::semantic::Severity;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting, word by word
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Line comments run to the end
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.muted)));
            break;
        }

        if !c.is_alphanumeric() && c != '_' && c != '.' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, c == '(');
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.accent),
                _ => Style::default().fg(DEFAULT_THEME.text),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "char" | "void" | "float" => Style::default().fg(DEFAULT_THEME.type_name),
        "return" | "if" | "else" | "while" | "for" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.literal)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.text),
    }
}

/// Render the source code pane.
///
/// `marks` lists the lines with diagnostics and the worst severity on each.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    marks: &[(usize, Severity)],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source Code ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_rows(area, 0);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let mark = marks
                .iter()
                .find(|(marked, _)| *marked == line_num)
                .map(|(_, severity)| *severity);

            let gutter = match mark {
                Some(Severity::Error) => "✗",
                Some(Severity::Warning) => "!",
                None => " ",
            };
            let gutter_style = mark.map_or_else(Style::default, |severity| {
                Style::default()
                    .fg(DEFAULT_THEME.severity(severity))
                    .add_modifier(Modifier::BOLD)
            });

            let mut spans = vec![
                Span::styled(
                    format!("{:4} ", line_num),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(format!("{} ", gutter), gutter_style),
            ];
            spans.extend(highlight_source_code(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
