//! Expression parsing implementation
//!
//! Expressions are parsed by recursive descent, one method per precedence
//! level. Each completed operator records its reduction after its operands,
//! so the event order is a post-order walk of the expression.
//!
//! # Precedence (lowest first)
//!
//! ```text
//! ,                      left
//! = += -= *= /= %=       right
//! ?:                     right
//! == !=                  left
//! < > <= >=              left
//! + -                    left
//! * / %                  left
//! + - ! ~ ++ -- (prefix)
//! ++ -- (postfix)
//! ```

use crate::parser::events::Rule;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::syntax::{AssignOp, BinaryOp, PostfixOp, UnaryOp};

impl Parser {
    /// Parse expression (top-level entry point, includes the comma operator)
    pub(crate) fn parse_expression(&mut self) -> Result<(), ParseError> {
        self.parse_assignment()?;

        while self.match_token(&Token::Comma(self.current_location())) {
            let loc = self.previous_location();
            self.parse_assignment()?;
            self.emit(Rule::Comma, loc);
        }

        Ok(())
    }

    /// Parse assignment or ternary (right-associative)
    pub(crate) fn parse_assignment(&mut self) -> Result<(), ParseError> {
        self.parse_ternary()?;

        let loc = self.current_location();
        let op = match self.peek() {
            Token::Eq(_) => AssignOp::Assign,
            Token::PlusEq(_) => AssignOp::Add,
            Token::MinusEq(_) => AssignOp::Sub,
            Token::StarEq(_) => AssignOp::Mul,
            Token::SlashEq(_) => AssignOp::Div,
            Token::PercentEq(_) => AssignOp::Mod,
            _ => return Ok(()),
        };
        self.advance();

        self.parse_assignment()?;
        self.emit(Rule::Assign(op), loc);
        Ok(())
    }

    /// Parse ternary: condition ? true_expr : false_expr
    fn parse_ternary(&mut self) -> Result<(), ParseError> {
        self.parse_equality()?;

        if self.match_token(&Token::Question(self.current_location())) {
            let loc = self.previous_location();
            self.parse_expression()?;
            self.expect_token(
                &Token::Colon(self.current_location()),
                "Expected ':' in ternary expression",
            )?;
            self.parse_ternary()?;
            self.emit(Rule::Ternary, loc);
        }

        Ok(())
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<(), ParseError> {
        self.parse_relational()?;

        loop {
            let op = match self.peek() {
                Token::EqEq(_) => BinaryOp::Eq,
                Token::NotEq(_) => BinaryOp::Ne,
                _ => break,
            };
            let loc = self.current_location();
            self.advance();
            self.parse_relational()?;
            self.emit(Rule::Binary(op), loc);
        }

        Ok(())
    }

    /// Parse relational (< > <= >=)
    fn parse_relational(&mut self) -> Result<(), ParseError> {
        self.parse_additive()?;

        loop {
            let op = match self.peek() {
                Token::Lt(_) => BinaryOp::Lt,
                Token::Gt(_) => BinaryOp::Gt,
                Token::Le(_) => BinaryOp::Le,
                Token::Ge(_) => BinaryOp::Ge,
                _ => break,
            };
            let loc = self.current_location();
            self.advance();
            self.parse_additive()?;
            self.emit(Rule::Binary(op), loc);
        }

        Ok(())
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<(), ParseError> {
        self.parse_multiplicative()?;

        loop {
            let op = match self.peek() {
                Token::Plus(_) => BinaryOp::Add,
                Token::Minus(_) => BinaryOp::Sub,
                _ => break,
            };
            let loc = self.current_location();
            self.advance();
            self.parse_multiplicative()?;
            self.emit(Rule::Binary(op), loc);
        }

        Ok(())
    }

    /// Parse multiplicative (* / %)
    fn parse_multiplicative(&mut self) -> Result<(), ParseError> {
        self.parse_unary()?;

        loop {
            let op = match self.peek() {
                Token::Star(_) => BinaryOp::Mul,
                Token::Slash(_) => BinaryOp::Div,
                Token::Percent(_) => BinaryOp::Mod,
                _ => break,
            };
            let loc = self.current_location();
            self.advance();
            self.parse_unary()?;
            self.emit(Rule::Binary(op), loc);
        }

        Ok(())
    }

    /// Parse unary (+ - ! ~ ++ --)
    fn parse_unary(&mut self) -> Result<(), ParseError> {
        let loc = self.current_location();
        let op = match self.peek() {
            Token::Plus(_) => UnaryOp::Plus,
            Token::Minus(_) => UnaryOp::Neg,
            Token::Bang(_) => UnaryOp::Not,
            Token::Tilde(_) => UnaryOp::BitNot,
            Token::PlusPlus(_) => UnaryOp::PreInc,
            Token::MinusMinus(_) => UnaryOp::PreDec,
            _ => return self.parse_postfix(),
        };
        self.advance();

        self.parse_unary()?;
        self.emit(Rule::Unary(op), loc);
        Ok(())
    }

    /// Parse postfix (++ --)
    fn parse_postfix(&mut self) -> Result<(), ParseError> {
        self.parse_primary()?;

        loop {
            let op = match self.peek() {
                Token::PlusPlus(_) => PostfixOp::Inc,
                Token::MinusMinus(_) => PostfixOp::Dec,
                _ => break,
            };
            let loc = self.current_location();
            self.advance();
            self.emit(Rule::Postfix(op), loc);
        }

        Ok(())
    }

    /// Parse primary (literals, identifiers, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<(), ParseError> {
        let loc = self.current_location();

        let rule = match self.peek() {
            Token::IntLiteral(n, _) => Some(Rule::IntLiteral(*n)),
            Token::FloatLiteral(x, _) => Some(Rule::FloatLiteral(*x)),
            Token::CharLiteral(c, _) => Some(Rule::CharLiteral(*c)),
            Token::Ident(name, _) => Some(Rule::Identifier { name: name.clone() }),
            _ => None,
        };
        if let Some(rule) = rule {
            self.advance();
            self.emit(rule, loc);
            return Ok(());
        }

        if self.match_token(&Token::LParen(loc)) {
            self.parse_expression()?;
            return self.expect_rparen("after expression");
        }

        Err(self.error(format!("Expected expression, found {}", self.peek())))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::events::Rule;
    use crate::parser::parse::Parser;
    use crate::parser::syntax::{AssignOp, BinaryOp, PostfixOp, UnaryOp};

    fn expr_rules(expr: &str) -> Vec<Rule> {
        let source = format!("void f() {{ {expr}; }}");
        let mut parser = Parser::new(&source).unwrap();
        parser.parse_program().unwrap();
        let rules: Vec<Rule> = parser.events().iter().map(|e| e.rule.clone()).collect();
        rules[2..rules.len() - 1].to_vec()
    }

    fn ident(name: &str) -> Rule {
        Rule::Identifier { name: name.into() }
    }

    #[test]
    fn test_left_associative_subtraction() {
        assert_eq!(
            expr_rules("a - b - c"),
            vec![
                ident("a"),
                ident("b"),
                Rule::Binary(BinaryOp::Sub),
                ident("c"),
                Rule::Binary(BinaryOp::Sub),
            ]
        );
    }

    #[test]
    fn test_right_associative_assignment() {
        assert_eq!(
            expr_rules("a = b += 2"),
            vec![
                ident("a"),
                ident("b"),
                Rule::IntLiteral(2),
                Rule::Assign(AssignOp::Add),
                Rule::Assign(AssignOp::Assign),
            ]
        );
    }

    #[test]
    fn test_unary_and_postfix() {
        assert_eq!(
            expr_rules("-x++"),
            vec![
                ident("x"),
                Rule::Postfix(PostfixOp::Inc),
                Rule::Unary(UnaryOp::Neg),
            ]
        );
    }

    #[test]
    fn test_parentheses_and_comparison() {
        assert_eq!(
            expr_rules("(a + 1) * 2 >= b"),
            vec![
                ident("a"),
                Rule::IntLiteral(1),
                Rule::Binary(BinaryOp::Add),
                Rule::IntLiteral(2),
                Rule::Binary(BinaryOp::Mul),
                ident("b"),
                Rule::Binary(BinaryOp::Ge),
            ]
        );
    }

    #[test]
    fn test_ternary_and_comma() {
        assert_eq!(
            expr_rules("c ? 1 : 2, d"),
            vec![
                ident("c"),
                Rule::IntLiteral(1),
                Rule::IntLiteral(2),
                Rule::Ternary,
                ident("d"),
                Rule::Comma,
            ]
        );
    }

    #[test]
    fn test_missing_operand_is_an_error() {
        let mut parser = Parser::new("void f() { a + ; }").unwrap();
        let err = parser.parse_program().unwrap_err();
        assert!(err.message.starts_with("Expected expression"));
    }
}
