//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser that, instead of returning tree
//! nodes, records a [`Reduction`] every time a grammar rule completes:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: function definitions and variable declarations
//! - `statements`: blocks, `if`, `for`, `while`, `return`
//! - `expressions`: expressions with C precedence
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser while sharing its state.

use crate::parser::events::{Reduction, ReductionStream, Rule};
use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::syntax::{DataType, SourceLocation};
use thiserror::Error;
use tracing::debug;

/// Parser error type
#[derive(Debug, Clone, Error)]
#[error("Parse error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser that records reductions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) events: Vec<Reduction>,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            events: Vec::new(),
        })
    }

    /// Lex and parse `source`, returning every reduction up to the first
    /// lexical or syntax error.
    pub fn reductions(source: &str) -> ReductionStream {
        let mut parser = match Parser::new(source) {
            Ok(parser) => parser,
            Err(err) => return ReductionStream::new(Vec::new(), Some(err)),
        };
        let result = parser.parse_program();
        debug!(events = parser.events.len(), ok = result.is_ok(), "parse finished");
        ReductionStream::new(parser.events, result.err())
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(&mut self) -> Result<(), ParseError> {
        let mut count = 0usize;

        while !self.is_at_end() {
            let loc = self.current_location();
            self.parse_external_declaration()?;
            count += 1;
            if count > 1 {
                self.emit(Rule::Sequence, loc);
            }
        }

        Ok(())
    }

    /// Events recorded so far
    pub fn events(&self) -> &[Reduction] {
        &self.events
    }

    pub(crate) fn emit(&mut self, rule: Rule, location: SourceLocation) {
        self.events.push(Reduction::new(rule, location));
    }

    // ===== Helper methods =====

    pub(crate) fn is_type_keyword(&self) -> bool {
        matches!(
            self.peek(),
            Token::Int(_) | Token::Float(_) | Token::Char(_) | Token::Void(_)
        )
    }

    /// Consume a type keyword, if one is next
    pub(crate) fn match_type(&mut self) -> Option<DataType> {
        let ty = match self.peek() {
            Token::Int(_) => DataType::Int,
            Token::Float(_) => DataType::Float,
            Token::Char(_) => DataType::Char,
            Token::Void(_) => DataType::Void,
            _ => return None,
        };
        self.advance();
        Some(ty)
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("{}, found {}", message, self.peek())))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            &format!("Expected '(' {ctx}"),
        )
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("Expected ')' {ctx}"),
        )
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RBrace(self.current_location()),
            &format!("Expected '}}' {ctx}"),
        )
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            &format!("Expected ';' {ctx}"),
        )
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<(String, SourceLocation), ParseError> {
        if let Token::Ident(name, loc) = self.peek() {
            let found = (name.clone(), *loc);
            self.advance();
            Ok(found)
        } else {
            Err(self.error(format!("Expected identifier, found {}", self.peek())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{AssignOp, BinaryOp};

    fn rules(source: &str) -> Vec<Rule> {
        let mut parser = Parser::new(source).unwrap();
        parser.parse_program().unwrap();
        parser.events.into_iter().map(|e| e.rule).collect()
    }

    #[test]
    fn test_parse_simple_function() {
        let rules = rules("int main() { return 0; }");
        assert_eq!(
            rules,
            vec![
                Rule::TypeSpecifier(DataType::Int),
                Rule::FunctionDeclarator {
                    name: "main".into(),
                    typed: true
                },
                Rule::IntLiteral(0),
                Rule::Return { value: true },
                Rule::FunctionDefinition {
                    name: "main".into(),
                    typed: true
                },
            ]
        );
    }

    #[test]
    fn test_initializer_target_reduced_before_value() {
        let rules = rules("int a = 1 + 2;");
        assert_eq!(
            rules,
            vec![
                Rule::TypeSpecifier(DataType::Int),
                Rule::DeclTarget { name: "a".into() },
                Rule::IntLiteral(1),
                Rule::IntLiteral(2),
                Rule::Binary(BinaryOp::Add),
                Rule::InitDeclarator { name: "a".into() },
                Rule::Declaration,
            ]
        );
    }

    #[test]
    fn test_precedence_is_post_order() {
        let rules = rules("void f() { x = a + b * c; }");
        let body: Vec<_> = rules[2..rules.len() - 1].to_vec();
        assert_eq!(
            body,
            vec![
                Rule::Identifier { name: "x".into() },
                Rule::Identifier { name: "a".into() },
                Rule::Identifier { name: "b".into() },
                Rule::Identifier { name: "c".into() },
                Rule::Binary(BinaryOp::Mul),
                Rule::Binary(BinaryOp::Add),
                Rule::Assign(AssignOp::Assign),
            ]
        );
    }

    #[test]
    fn test_syntax_error_keeps_earlier_events() {
        let mut stream = Parser::reductions("int a; int b = ;");
        let mut seen = Vec::new();
        let err = loop {
            match crate::parser::events::EventSource::next_event(&mut stream) {
                Ok(Some(event)) => seen.push(event.rule),
                Ok(None) => panic!("expected a syntax error"),
                Err(err) => break err,
            }
        };
        assert!(seen.contains(&Rule::Declarator { name: "a".into() }));
        assert_eq!(err.location.line, 1);
        assert!(err.message.contains("Expected expression"));
    }
}
