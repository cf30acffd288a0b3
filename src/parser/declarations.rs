//! Declaration parsing implementation
//!
//! - Function definitions: `type name(params) { body }`, or `name(params) { body }`
//!   with the return type left out
//! - Variable declarations: `type a, b = expr, c;`
//!
//! # Grammar
//!
//! ```text
//! external_declaration ::= declaration | function_definition
//! function_definition  ::= [type] IDENT '(' [param_list | 'void'] ')' compound
//! param_list           ::= type [IDENT] (',' type [IDENT])*
//! declaration          ::= type init_declarator (',' init_declarator)* ';'
//! init_declarator      ::= IDENT | IDENT '=' assignment_expression
//! ```

use crate::parser::events::Rule;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a global declaration or a function definition
    pub(crate) fn parse_external_declaration(&mut self) -> Result<(), ParseError> {
        if self.is_type_keyword() {
            let is_function = matches!(self.peek_ahead(1), Some(Token::Ident(..)))
                && matches!(self.peek_ahead(2), Some(Token::LParen(_)));
            if is_function {
                return self.parse_function_definition();
            }
            return self.parse_declaration();
        }

        if matches!(self.peek(), Token::Ident(..))
            && matches!(self.peek_ahead(1), Some(Token::LParen(_)))
        {
            return self.parse_function_definition();
        }

        Err(self.error(format!(
            "Expected declaration or function definition, found {}",
            self.peek()
        )))
    }

    /// Parse function definition, with or without a leading return type
    fn parse_function_definition(&mut self) -> Result<(), ParseError> {
        let type_loc = self.current_location();
        let return_type = self.match_type();
        if let Some(ty) = return_type {
            self.emit(Rule::TypeSpecifier(ty), type_loc);
        }
        let typed = return_type.is_some();

        let (name, name_loc) = self.expect_identifier()?;
        self.emit(
            Rule::FunctionDeclarator {
                name: name.clone(),
                typed,
            },
            name_loc,
        );

        self.expect_lparen("after function name")?;
        self.parse_parameter_list()?;
        self.expect_rparen("after parameters")?;

        // The body shares the parameter scope, so its braces open nothing
        self.expect_token(
            &Token::LBrace(self.current_location()),
            "Expected '{' before function body",
        )?;
        self.parse_block_items()?;
        self.expect_rbrace("after function body")?;

        self.emit(Rule::FunctionDefinition { name, typed }, name_loc);
        Ok(())
    }

    /// Parse parameter list: (type name, type name, ...)
    fn parse_parameter_list(&mut self) -> Result<(), ParseError> {
        if self.check(&Token::RParen(self.current_location())) {
            return Ok(());
        }

        // (void) means no parameters
        if matches!(self.peek(), Token::Void(_))
            && matches!(self.peek_ahead(1), Some(Token::RParen(_)))
        {
            self.advance();
            return Ok(());
        }

        loop {
            let ty = self
                .match_type()
                .ok_or_else(|| self.error(format!("Expected parameter type, found {}", self.peek())))?;

            // Unnamed parameters are allowed and declare nothing
            if matches!(self.peek(), Token::Ident(..)) {
                let (name, loc) = self.expect_identifier()?;
                self.emit(Rule::Parameter { name, ty }, loc);
            }

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(())
    }

    /// Parse a variable declaration, including the trailing ';'
    pub(crate) fn parse_declaration(&mut self) -> Result<(), ParseError> {
        let type_loc = self.current_location();
        let ty = self
            .match_type()
            .ok_or_else(|| self.error(format!("Expected type specifier, found {}", self.peek())))?;
        self.emit(Rule::TypeSpecifier(ty), type_loc);

        self.parse_init_declarator()?;
        while self.match_token(&Token::Comma(self.current_location())) {
            let comma_loc = self.previous_location();
            self.parse_init_declarator()?;
            self.emit(Rule::Comma, comma_loc);
        }

        self.expect_semicolon("after declaration")?;
        let loc = self.previous_location();
        self.emit(Rule::Declaration, loc);
        Ok(())
    }

    fn parse_init_declarator(&mut self) -> Result<(), ParseError> {
        let (name, loc) = self.expect_identifier()?;

        if self.match_token(&Token::Eq(self.current_location())) {
            self.emit(Rule::DeclTarget { name: name.clone() }, loc);
            self.parse_assignment()?;
            self.emit(Rule::InitDeclarator { name }, loc);
        } else {
            self.emit(Rule::Declarator { name }, loc);
        }

        Ok(())
    }
}
