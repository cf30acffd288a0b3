//! # Introduction
//!
//! scopetree is the semantic front end of a toy C-like language. It checks
//! scopes and declarations, builds an abstract syntax tree bottom-up from
//! parser reductions, and prints the tree in a parenthesized preorder form
//! together with the final symbol table.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Reductions → Analyzer → (Symbol table, AST) → Output / Viewer
//! ```
//!
//! 1. [`parser`]: tokenises the source and records one
//!    [`parser::Reduction`] per completed grammar rule.
//! 2. [`semantic`]: applies each reduction to the
//!    [`semantic::symbols::SymbolTable`] and the AST builder, collecting
//!    line-tagged diagnostics along the way; then serializes the tree.
//! 3. [`ui`]: ratatui-based viewer over a finished analysis; not part of the
//!    stable library API.
//!
//! ```
//! use scopetree::semantic::Analyzer;
//!
//! let analysis = Analyzer::analyze("int x; void f() { x = 10 / 0; }");
//! assert_eq!(analysis.warning_count(), 1);
//! assert_eq!(
//!     analysis.preorder().as_deref(),
//!     Some("( stmt Dc x ( f ( = x 2147483647 ) ) )")
//! );
//! ```
//!
//! ## Supported language
//!
//! Types: `int`, `float`, `char`, `void`.
//! Control flow: `if/else`, `while`, `for`, `return`, nested blocks.
//! Expressions: arithmetic, comparison, assignment (plain and compound),
//! prefix and postfix `++`/`--`, `?:`, comma.

pub mod parser;
pub mod semantic;
pub mod ui;
