// src/parser/parser.rs
//
// Recursive descent over the grammar:
//   Expression -> Term ((+|-) Term)*
//   Term       -> Factor ((*) Factor)*
//   Factor     -> Literal (^ Number)?
//   Literal    -> Number | Identifier | (Expression)

use crate::error::{AlgebraError, Result};
use crate::parser::ast::{self, Expr};
use crate::parser::lexer::{self, Token, TokenKind};
use crate::polynomial::polynomial::Polynomial;

/// Parses one expression string into a canonical Polynomial.
pub fn parse(input: &str) -> Result<Polynomial> {
    let tokens = lexer::tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expression()?;
    parser.expect(TokenKind::Eol)?;
    ast::to_polynomial(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current().kind != kind {
            return Err(AlgebraError::Parse(format!(
                "unexpected token '{}', expected {:?}",
                self.current().text, kind
            )));
        }
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        Ok(token)
    }

    fn parse_expression(&mut self) -> Result<Expr> {
        let mut summands = Vec::new();

        while !matches!(self.current().kind, TokenKind::Eol | TokenKind::RParen) {
            let (kind, text) = (self.current().kind, self.current().text.clone());
            match (kind, text.as_str()) {
                (TokenKind::UnaryOperator, "-") | (TokenKind::BinaryOperator, "-") => {
                    self.pos += 1;
                    summands.push(Expr::Negative(Box::new(self.parse_term()?)));
                }
                (TokenKind::BinaryOperator, "+") => {
                    self.pos += 1;
                }
                (TokenKind::BinaryOperator, op) => {
                    return Err(AlgebraError::Parse(format!("unsupported operator '{}'", op)));
                }
                _ => match self.parse_term()? {
                    Expr::Addition(inner) => summands.extend(inner),
                    term => summands.push(term),
                },
            }
        }

        if summands.is_empty() {
            return Err(AlgebraError::Parse("empty expression".to_string()));
        }
        if summands.len() == 1 {
            return Ok(summands.remove(0));
        }
        Ok(Expr::Addition(summands))
    }

    fn parse_term(&mut self) -> Result<Expr> {
        let mut factors = vec![self.parse_factor()?];

        loop {
            let (kind, text) = (self.current().kind, self.current().text.clone());
            match (kind, text.as_str()) {
                (TokenKind::BinaryOperator, "*") => {
                    self.pos += 1;
                    factors.push(self.parse_factor()?);
                }
                (TokenKind::Number | TokenKind::Identifier | TokenKind::LParen, _) => {
                    factors.push(self.parse_factor()?);
                }
                _ => break,
            }
        }

        if factors.len() == 1 {
            return Ok(factors.remove(0));
        }
        Ok(Expr::Multiplication(factors))
    }

    fn parse_factor(&mut self) -> Result<Expr> {
        let literal = self.parse_literal()?;
        if self.current().kind == TokenKind::BinaryOperator && self.current().text == "^" {
            self.pos += 1;
            let exponent = self.parse_exponent()?;
            return Ok(Expr::Exponentiation(Box::new(literal), exponent));
        }
        Ok(literal)
    }

    fn parse_literal(&mut self) -> Result<Expr> {
        match self.current().kind {
            TokenKind::Identifier => {
                let token = self.expect(TokenKind::Identifier)?;
                Ok(Expr::Identifier(token.text))
            }
            TokenKind::Number => Ok(Expr::Number(self.parse_number()?)),
            TokenKind::LParen => {
                self.expect(TokenKind::LParen)?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            _ => Err(AlgebraError::Parse(format!(
                "unexpected token '{}'",
                self.current().text
            ))),
        }
    }

    /// A leading unary minus is accepted here so that a negative exponent
    /// surfaces as the dedicated arithmetic error instead of a generic
    /// parse failure.
    fn parse_exponent(&mut self) -> Result<i64> {
        if self.current().kind == TokenKind::UnaryOperator && self.current().text == "-" {
            self.pos += 1;
            return Ok(-self.parse_number()?);
        }
        self.parse_number()
    }

    fn parse_number(&mut self) -> Result<i64> {
        let token = self.expect(TokenKind::Number)?;
        token
            .text
            .parse::<i64>()
            .map_err(|_| AlgebraError::Parse(format!("invalid number '{}'", token.text)))
    }
}
