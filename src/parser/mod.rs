//! Front end: source text to reduction events
//!
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Recursive descent parser coordinator; [`declarations`],
//!   [`statements`] and [`expressions`] extend it per grammar area
//! - [`events`]: The [`events::Reduction`] stream the parser records
//! - [`syntax`]: Types and operators shared with the semantic layer
//!
//! # Supported Language
//!
//! - Types: `int`, `float`, `char`, `void`
//! - Statements: declarations, blocks, `if`/`else`, `while`, `for`, `return`
//! - Expressions: arithmetic, comparison, assignment and compound assignment,
//!   prefix/postfix increment, ternary, comma
//! - Preprocessor lines are skipped
//!
//! The parser does not build a tree. It reports which grammar rules completed
//! and in what order, and [`crate::semantic`] assembles the tree from that.

pub mod declarations;
pub mod events;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
pub mod syntax;

pub use events::{EventSource, Reduction, ReductionStream, Rule};
pub use parse::{ParseError, Parser};
