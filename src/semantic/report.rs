//! Final symbol table report
//!
//! One row per surviving symbol, already formatted, so the batch output and
//! the viewer print exactly the same cells.

use super::symbols::{Symbol, SymbolKind};
use std::fmt;

pub const HEADERS: [&str; 6] = ["Symbol", "Name", "Type", "Scope", "Line Number", "Value"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub symbol: &'static str,
    pub name: String,
    pub ty: &'static str,
    pub scope: usize,
    pub line: usize,
    /// Formatted value, `-` when never assigned
    pub value: String,
}

impl ReportRow {
    fn from_symbol(symbol: &Symbol) -> Self {
        let value = match (symbol.kind, symbol.value) {
            (SymbolKind::Function, _) | (_, None) => "-".to_string(),
            (_, Some(value)) => value.to_string(),
        };
        ReportRow {
            symbol: symbol.kind.tag(),
            name: symbol.name.clone(),
            ty: symbol.ty.map(|t| t.name()).unwrap_or("-"),
            scope: symbol.scope,
            line: symbol.line,
            value,
        }
    }

    pub fn cells(&self) -> [String; 6] {
        [
            self.symbol.to_string(),
            self.name.clone(),
            self.ty.to_string(),
            self.scope.to_string(),
            self.line.to_string(),
            self.value.clone(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolReport {
    rows: Vec<ReportRow>,
}

impl SymbolReport {
    pub(crate) fn from_symbols<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> Self {
        SymbolReport {
            rows: symbols.into_iter().map(ReportRow::from_symbol).collect(),
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for the last reported symbol called `name`
    pub fn find(&self, name: &str) -> Option<&ReportRow> {
        self.rows.iter().rev().find(|row| row.name == name)
    }

    /// Width of each column: the widest of its header and cells
    pub fn column_widths(&self) -> [usize; 6] {
        let mut widths = HEADERS.map(str::len);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.len());
            }
        }
        widths
    }
}

impl fmt::Display for SymbolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let write_row = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let line = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())
        };

        writeln!(f, "Symbol Table")?;
        write_row(f, &HEADERS.map(String::from))?;
        for row in &self.rows {
            write_row(f, &row.cells())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::DataType;
    use crate::semantic::value::Value;

    fn symbol(name: &str, kind: SymbolKind, ty: DataType, value: Option<Value>) -> Symbol {
        Symbol {
            name: name.to_string(),
            kind,
            ty: Some(ty),
            scope: 1,
            line: 2,
            value,
            valid: true,
        }
    }

    #[test]
    fn test_value_formatting() {
        let symbols = [
            symbol("f", SymbolKind::Function, DataType::Float, None),
            symbol("x", SymbolKind::Identifier, DataType::Float, Some(Value::Float(1.5))),
            symbol("c", SymbolKind::Param, DataType::Char, Some(Value::Char(b'q'))),
            symbol("n", SymbolKind::Identifier, DataType::Int, None),
        ];
        let report = SymbolReport::from_symbols(&symbols);
        let values: Vec<_> = report.rows().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["-", "1.500000", "q", "-"]);
        assert_eq!(report.rows()[2].symbol, "param");
    }

    #[test]
    fn test_display_has_title_and_header() {
        let symbols = [symbol("count", SymbolKind::Identifier, DataType::Int, Some(Value::Int(7)))];
        let text = SymbolReport::from_symbols(&symbols).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Symbol Table");
        assert!(lines[1].starts_with("Symbol"));
        assert!(lines[1].ends_with("Value"));
        let cells: Vec<_> = lines[2].split_whitespace().collect();
        assert_eq!(cells, vec!["identifier", "count", "int", "1", "2", "7"]);
    }
}
