//! Reduction events
//!
//! The parser does not build a tree itself. It records one [`Reduction`] per
//! completed grammar rule, in the order a bottom-up parser reduces them, and
//! the semantic layer pulls those events through [`EventSource`].
//!
//! Operand order is post-order: children are always reduced before the rule
//! that combines them, so a construct's operands sit on top of the
//! construction stack (most recent last) when its event arrives.

use super::parse::ParseError;
use super::syntax::{AssignOp, BinaryOp, DataType, PostfixOp, SourceLocation, UnaryOp};
use std::collections::VecDeque;

/// One completed grammar rule
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// `{` of a nested block
    OpenScope,
    /// `}` of a nested block
    CloseScope,
    /// A type specifier began a declaration or definition
    TypeSpecifier(DataType),
    /// Function name seen; `typed` is false when the type specifier was omitted
    FunctionDeclarator { name: String, typed: bool },
    Parameter { name: String, ty: DataType },
    /// Function body finished
    FunctionDefinition { name: String, typed: bool },
    /// Mid-rule action of `name = initializer`, before the initializer
    DeclTarget { name: String },
    InitDeclarator { name: String },
    Declarator { name: String },
    /// `;` closing a declaration
    Declaration,
    Identifier { name: String },
    IntLiteral(i32),
    FloatLiteral(f32),
    CharLiteral(u8),
    Unary(UnaryOp),
    Postfix(PostfixOp),
    Binary(BinaryOp),
    Assign(AssignOp),
    Ternary,
    Comma,
    EmptyStatement,
    EmptyBlock,
    /// Two adjacent statements or top-level declarations
    Sequence,
    If,
    IfElse,
    While,
    For,
    Return { value: bool },
}

/// A rule together with where it completed
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub rule: Rule,
    pub location: SourceLocation,
}

impl Reduction {
    pub fn new(rule: Rule, location: SourceLocation) -> Self {
        Self { rule, location }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

/// Pull interface the analyzer consumes
pub trait EventSource {
    /// Next event, `Ok(None)` at end of input, `Err` when the parser gave up
    fn next_event(&mut self) -> Result<Option<Reduction>, ParseError>;
}

/// Events recorded by a finished parse, plus the syntax error that cut it short
#[derive(Debug, Default)]
pub struct ReductionStream {
    events: VecDeque<Reduction>,
    error: Option<ParseError>,
}

impl ReductionStream {
    pub fn new(events: Vec<Reduction>, error: Option<ParseError>) -> Self {
        Self {
            events: events.into(),
            error,
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for ReductionStream {
    fn next_event(&mut self) -> Result<Option<Reduction>, ParseError> {
        if let Some(event) = self.events.pop_front() {
            return Ok(Some(event));
        }
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}

impl From<Vec<Reduction>> for ReductionStream {
    fn from(events: Vec<Reduction>) -> Self {
        Self::new(events, None)
    }
}
