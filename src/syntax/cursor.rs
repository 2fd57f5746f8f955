//! One-token lookahead over a lexer, shared by the recursive-descent parsers.

use super::{Ident, Lexer, Literal, NumberLiteral, Token, TokenKind};
use crate::error::CompilerError;

pub struct TokenCursor<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> TokenCursor<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, CompilerError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Consume the current token and pull the next one from the lexer.
    pub fn bump(&mut self) -> Result<Token, CompilerError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Result<Option<Token>, CompilerError> {
        if self.at(kind) {
            self.bump().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, CompilerError> {
        if self.at(kind) {
            self.bump()
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    /// `literal := IDENT | '-'? NUMBER`. Whether the value is usable is
    /// decided during evaluation.
    pub fn literal(&mut self) -> Result<Literal, CompilerError> {
        if self.at(TokenKind::Ident) {
            return Ok(Literal::Ident(Ident::from_token(self.bump()?)));
        }
        if let TokenKind::Keyword(keyword) = self.current.kind {
            return Err(CompilerError::syntax(
                "P001",
                format!(
                    "expected number or identifier, found keyword '{}' (keywords cannot be values)",
                    keyword.as_str()
                ),
                self.current.position,
            ));
        }
        let minus = self.eat(TokenKind::Minus)?;
        if !self.at(TokenKind::Number) {
            let expected = if minus.is_some() { "number" } else { "number or identifier" };
            return Err(self.unexpected(expected));
        }
        if let Some(minus) = &minus {
            if self.current.position.offset != minus.position.offset + 1 {
                return Err(self.unexpected("number directly after '-'"));
            }
        }
        let number = self.bump()?;
        Ok(Literal::Number(NumberLiteral {
            text: number.literal,
            negative: minus.is_some(),
            position: minus.map_or(number.position, |m| m.position),
        }))
    }

    /// Syntax error at the current token: "expected X, found Y".
    pub fn unexpected(&self, expected: &str) -> CompilerError {
        CompilerError::syntax(
            "P001",
            format!("expected {}, found {}", expected, self.current.describe()),
            self.current.position,
        )
    }
}
