//! Semantic layer: scopes, tree assembly, diagnostics and output
//!
//! - [`symbols`]: scope-aware [`symbols::SymbolTable`]
//! - [`tree`] / [`builder`]: AST nodes, the construction stack and the
//!   per-construct assembly rules
//! - [`analyzer`]: the context object that applies each reduction
//! - [`diagnostics`]: line-tagged errors and warnings
//! - [`serialize`] / [`report`]: preorder text, outline and symbol table

pub mod analyzer;
pub mod builder;
pub mod diagnostics;
pub mod errors;
pub mod report;
pub mod serialize;
pub mod symbols;
pub mod tree;
pub mod value;

pub use analyzer::{Analysis, Analyzer};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use errors::AnalysisError;
pub use report::SymbolReport;
pub use tree::{AstNode, BuilderError};
