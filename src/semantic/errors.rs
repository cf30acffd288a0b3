//! Failures that stop an analysis run
//!
//! Semantic errors are not here: those are [`super::diagnostics::Diagnostic`]s
//! and the run carries on past them.

use super::tree::BuilderError;
use crate::parser::parse::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Builder(#[from] BuilderError),
}

impl AnalysisError {
    pub fn is_builder_failure(&self) -> bool {
        matches!(self, AnalysisError::Builder(_))
    }
}
