//! Viewer application state and logic

use crate::semantic::serialize::{height, render_indented};
use crate::semantic::{Analysis, Severity};
use crate::ui::panes::{OutlineRow, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Symbols,
    Tree,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> diagnostics -> symbols -> tree)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }

    fn index(self) -> usize {
        match self {
            FocusedPane::Source => 0,
            FocusedPane::Symbols => 1,
            FocusedPane::Tree => 2,
            FocusedPane::Diagnostics => 3,
        }
    }
}

/// The viewer state: one finished analysis and how it is being looked at
pub struct App {
    pub source_code: String,
    pub analysis: Analysis,

    /// Outline rows, `None` when the run produced no tree
    pub outline: Option<Vec<OutlineRow>>,

    /// Lines with diagnostics and their worst severity
    pub marks: Vec<(usize, Severity)>,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets, indexed by [`FocusedPane::index`]
    pub scroll: [usize; 4],

    pub should_quit: bool,

    pub status_message: String,
}

impl App {
    pub fn new(source_code: String, analysis: Analysis) -> Self {
        let outline = analysis
            .root
            .as_ref()
            .map(|root| outline_rows(render_indented(root)));

        let mut marks: Vec<(usize, Severity)> = Vec::new();
        for d in &analysis.diagnostics {
            match marks.iter_mut().find(|(line, _)| *line == d.line) {
                Some(mark) if d.is_error() => mark.1 = Severity::Error,
                Some(_) => {}
                None => marks.push((d.line, d.severity)),
            }
        }

        let status_message = match &analysis.failure {
            Some(err) => err.to_string(),
            None => String::from("Analysis complete"),
        };

        App {
            source_code,
            analysis,
            outline,
            marks,
            focused_pane: FocusedPane::Source,
            scroll: [0; 4],
            should_quit: false,
            status_message,
        }
    }

    /// Run the viewer until `q` is pressed
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Symbols (top) | Tree (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        let [source_scroll, symbols_scroll, tree_scroll, diagnostics_scroll] = &mut self.scroll;

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            &self.marks,
            self.focused_pane == FocusedPane::Source,
            source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.analysis.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            diagnostics_scroll,
        );

        super::panes::render_symbols_pane(
            frame,
            right_rows[0],
            &self.analysis.report,
            self.focused_pane == FocusedPane::Symbols,
            symbols_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[1],
            self.outline.as_deref(),
            self.focused_pane == FocusedPane::Tree,
            tree_scroll,
        );

        let tree = self
            .analysis
            .root
            .as_ref()
            .zip(self.analysis.preorder())
            .map(|(root, text)| (text.len(), height(root)));
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                tree,
                errors: self.analysis.error_count(),
                warnings: self.analysis.warning_count(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let scroll = &mut self.scroll[self.focused_pane.index()];
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => *scroll = scroll.saturating_sub(1),
            KeyCode::Down => *scroll = scroll.saturating_add(1),
            KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
            KeyCode::PageDown => *scroll = scroll.saturating_add(10),
            KeyCode::Home => *scroll = 0,
            // Clamped to the last page on the next render
            KeyCode::End => *scroll = usize::MAX,
            _ => {}
        }
    }
}

/// A row has children exactly when the next row is indented deeper
fn outline_rows(lines: Vec<String>) -> Vec<OutlineRow> {
    let indents: Vec<usize> = lines
        .iter()
        .map(|l| l.len() - l.trim_start().len())
        .collect();

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| OutlineRow {
            indent: indents[i],
            label: line.trim_start().to_string(),
            has_children: indents.get(i + 1).is_some_and(|next| *next > indents[i]),
        })
        .collect()
}
