//! Line-tagged errors and warnings
//!
//! Semantic problems never abort the run. They are collected here in the
//! order they were found and rendered as `Line:<n>: error: <text>`.

use std::fmt;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line:{}: {}: {}", self.line, self.severity.name(), self.message)
    }
}

/// Collected diagnostics. With `echo` set each one is also printed to stdout
/// the moment it is reported, interleaved with whatever else the run prints.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    echo: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echoing() -> Self {
        Diagnostics {
            entries: Vec::new(),
            echo: true,
        }
    }

    pub fn error(&mut self, line: usize, message: impl Into<String>) {
        self.report(Severity::Error, line, message.into());
    }

    pub fn warning(&mut self, line: usize, message: impl Into<String>) {
        self.report(Severity::Warning, line, message.into());
    }

    fn report(&mut self, severity: Severity, line: usize, message: String) {
        let diagnostic = Diagnostic {
            severity,
            line,
            message,
        };
        match severity {
            Severity::Error => error!(line, message = %diagnostic.message, "semantic error"),
            Severity::Warning => warn!(line, message = %diagnostic.message, "semantic warning"),
        }
        if self.echo {
            println!("{}", diagnostic);
        }
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.entries.len() - self.error_count()
    }
}
