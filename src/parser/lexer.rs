// src/parser/lexer.rs

use crate::error::{AlgebraError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    UnaryOperator,
    BinaryOperator,
    LParen,
    RParen,
    Identifier,
    Eol,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token { kind, text: text.into() }
    }
}

/// Two-state scanner. State 0 expects the start of an operand (number,
/// identifier, opening paren, unary minus); state 1 expects a binary
/// operator or closing paren. The state machine rejects adjacent operators
/// and adjacent operands up front, before the parser ever runs.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut state = 0;
    let mut pos = 0;
    let mut tokens = Vec::new();

    loop {
        let token = match next_token(&chars, &mut pos, state)? {
            Some(token) => token,
            None => continue,
        };

        let is_state0_token = matches!(
            token.kind,
            TokenKind::Identifier | TokenKind::LParen | TokenKind::Number | TokenKind::UnaryOperator
        );
        let is_state1_token = matches!(token.kind, TokenKind::RParen | TokenKind::BinaryOperator);
        if (state == 1 && is_state0_token) || (state == 0 && is_state1_token) {
            return Err(AlgebraError::Parse(format!(
                "token '{}' not allowed at position {}",
                token.text, pos
            )));
        }

        let kind = token.kind;
        tokens.push(token);
        if kind == TokenKind::Eol {
            break;
        }

        if state == 0 {
            if matches!(kind, TokenKind::Number | TokenKind::Identifier) {
                state = 1;
            }
        } else if kind == TokenKind::BinaryOperator {
            state = 0;
        }
    }

    Ok(tokens)
}

fn next_token(chars: &[char], pos: &mut usize, state: i32) -> Result<Option<Token>> {
    if *pos == chars.len() {
        return Ok(Some(Token::new(TokenKind::Eol, "")));
    }

    let c = chars[*pos];
    *pos += 1;

    if c.is_whitespace() {
        return Ok(None);
    }

    if c.is_ascii_digit() {
        let start = *pos - 1;
        while *pos < chars.len() && chars[*pos].is_ascii_digit() {
            *pos += 1;
        }
        let text: String = chars[start..*pos].iter().collect();
        return Ok(Some(Token::new(TokenKind::Number, text)));
    }

    if "+-*/^".contains(c) {
        if state == 0 && c != '-' {
            return Err(AlgebraError::Parse(format!(
                "invalid unary operator '{}' at position {}",
                c, *pos
            )));
        }
        let kind = if state == 0 {
            TokenKind::UnaryOperator
        } else {
            TokenKind::BinaryOperator
        };
        return Ok(Some(Token::new(kind, c.to_string())));
    }

    if c == '(' {
        return Ok(Some(Token::new(TokenKind::LParen, "(")));
    }
    if c == ')' {
        return Ok(Some(Token::new(TokenKind::RParen, ")")));
    }
    if c.is_alphabetic() {
        return Ok(Some(Token::new(TokenKind::Identifier, c.to_string())));
    }

    Err(AlgebraError::Parse(format!(
        "invalid character '{}' at position {}",
        c, *pos
    )))
}
