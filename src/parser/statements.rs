//! Statement parsing implementation
//!
//! This module handles the statement forms of the language:
//!
//! - Declarations inside blocks: `int x = 42;`
//! - Control flow: `if`, `if`/`else`, `while`, `for`
//! - `return` with or without a value
//! - Compound statements: `{ ... }`, which open a scope
//! - Expression statements and the empty statement `;`
//!
//! # Grammar
//!
//! ```text
//! block_item ::= declaration | statement
//! statement  ::= if_stmt | while_stmt | for_stmt | return_stmt
//!              | compound | expr_stmt
//! expr_stmt  ::= [expression] ';'
//! for_stmt   ::= 'for' '(' expr_stmt expr_stmt [expression] ')' statement
//! ```

use crate::parser::events::Rule;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse block items up to the closing brace, excluding the braces.
    ///
    /// Adjacent items are joined by [`Rule::Sequence`]; an empty list
    /// reduces to [`Rule::EmptyBlock`].
    pub(crate) fn parse_block_items(&mut self) -> Result<(), ParseError> {
        let mut count = 0usize;

        while !self.check(&Token::RBrace(self.current_location())) && !self.is_at_end() {
            let loc = self.current_location();
            self.parse_block_item()?;
            count += 1;
            if count > 1 {
                self.emit(Rule::Sequence, loc);
            }
        }

        if count == 0 {
            let loc = self.current_location();
            self.emit(Rule::EmptyBlock, loc);
        }

        Ok(())
    }

    fn parse_block_item(&mut self) -> Result<(), ParseError> {
        if self.is_type_keyword() {
            self.parse_declaration()
        } else {
            self.parse_statement()
        }
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<(), ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Return(loc)) {
            return self.parse_return_statement();
        }

        if self.match_token(&Token::If(loc)) {
            return self.parse_if_statement();
        }

        if self.match_token(&Token::While(loc)) {
            return self.parse_while_statement();
        }

        if self.match_token(&Token::For(loc)) {
            return self.parse_for_statement();
        }

        if self.match_token(&Token::LBrace(loc)) {
            self.emit(Rule::OpenScope, loc);
            self.parse_block_items()?;
            self.expect_rbrace("after block")?;
            let close = self.previous_location();
            self.emit(Rule::CloseScope, close);
            return Ok(());
        }

        self.parse_expression_statement()
    }

    /// `;` alone reduces to an empty statement, otherwise the expression
    /// itself is the statement
    fn parse_expression_statement(&mut self) -> Result<(), ParseError> {
        let loc = self.current_location();
        if self.match_token(&Token::Semicolon(loc)) {
            self.emit(Rule::EmptyStatement, loc);
            return Ok(());
        }

        self.parse_expression()?;
        self.expect_semicolon("after expression")
    }

    fn parse_return_statement(&mut self) -> Result<(), ParseError> {
        let loc = self.previous_location();

        let value = !self.check(&Token::Semicolon(self.current_location()));
        if value {
            self.parse_expression()?;
        }

        self.expect_semicolon("after return")?;
        self.emit(Rule::Return { value }, loc);
        Ok(())
    }

    fn parse_if_statement(&mut self) -> Result<(), ParseError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'if'")?;
        self.parse_expression()?;
        self.expect_rparen("after if condition")?;

        self.parse_statement()?;

        if self.match_token(&Token::Else(self.current_location())) {
            self.parse_statement()?;
            self.emit(Rule::IfElse, loc);
        } else {
            self.emit(Rule::If, loc);
        }

        Ok(())
    }

    fn parse_while_statement(&mut self) -> Result<(), ParseError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'while'")?;
        self.parse_expression()?;
        self.expect_rparen("after while condition")?;

        self.parse_statement()?;
        self.emit(Rule::While, loc);
        Ok(())
    }

    /// `for` always reduces four operands: init, condition, increment and
    /// body, with empty clauses standing in as empty statements
    fn parse_for_statement(&mut self) -> Result<(), ParseError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'for'")?;
        self.parse_expression_statement()?;
        self.parse_expression_statement()?;

        let inc_loc = self.current_location();
        if self.check(&Token::RParen(inc_loc)) {
            self.emit(Rule::EmptyStatement, inc_loc);
        } else {
            self.parse_expression()?;
        }
        self.expect_rparen("after for clauses")?;

        self.parse_statement()?;
        self.emit(Rule::For, loc);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::events::Rule;
    use crate::parser::parse::Parser;
    use crate::parser::syntax::{AssignOp, BinaryOp};

    /// Rules of the body of `void f() { <body> }`
    fn body_rules(body: &str) -> Vec<Rule> {
        let source = format!("void f() {{ {body} }}");
        let mut parser = Parser::new(&source).unwrap();
        parser.parse_program().unwrap();
        let rules: Vec<Rule> = parser.events().iter().map(|e| e.rule.clone()).collect();
        rules[2..rules.len() - 1].to_vec()
    }

    #[test]
    fn test_if_else_order() {
        let rules = body_rules("if (a < b) x = 1; else x = 2;");
        assert_eq!(
            rules,
            vec![
                Rule::Identifier { name: "a".into() },
                Rule::Identifier { name: "b".into() },
                Rule::Binary(BinaryOp::Lt),
                Rule::Identifier { name: "x".into() },
                Rule::IntLiteral(1),
                Rule::Assign(AssignOp::Assign),
                Rule::Identifier { name: "x".into() },
                Rule::IntLiteral(2),
                Rule::Assign(AssignOp::Assign),
                Rule::IfElse,
            ]
        );
    }

    #[test]
    fn test_for_with_empty_clauses() {
        let rules = body_rules("for (;;) ;");
        assert_eq!(
            rules,
            vec![
                Rule::EmptyStatement,
                Rule::EmptyStatement,
                Rule::EmptyStatement,
                Rule::EmptyStatement,
                Rule::For,
            ]
        );
    }

    #[test]
    fn test_nested_block_opens_scope() {
        let rules = body_rules("{ int a; }");
        assert_eq!(rules.first(), Some(&Rule::OpenScope));
        assert_eq!(rules.last(), Some(&Rule::CloseScope));

        let empty = body_rules("{ }");
        assert_eq!(
            empty,
            vec![Rule::OpenScope, Rule::EmptyBlock, Rule::CloseScope]
        );
    }

    #[test]
    fn test_while_and_return() {
        let rules = body_rules("while (i) i = i - 1; return;");
        assert_eq!(rules[rules.len() - 3], Rule::While);
        assert_eq!(rules[rules.len() - 2], Rule::Return { value: false });
        assert_eq!(rules[rules.len() - 1], Rule::Sequence);
    }
}
