//! Character-level tokenizer shared by both grammars.
//!
//! The lexer keeps a single forward cursor over the source and produces one
//! token per call. Grammars differ only in the keyword table they pass in.

use super::{KeywordTable, Position, Token, TokenKind, lookup_keyword};
use crate::error::CompilerError;

pub const EOF_LITERAL: &str = "<eof>";

pub struct Lexer<'a> {
    source: &'a str,
    keywords: &'static KeywordTable,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, keywords: &'static KeywordTable) -> Self {
        Self {
            source,
            keywords,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Lex the whole source, including the trailing EOF token.
    pub fn tokenize(
        source: &'a str,
        keywords: &'static KeywordTable,
    ) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::new(source, keywords);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let is_eof = token.is(TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Produce the next token. Once the end of input is reached every further
    /// call returns another EOF token at the same position.
    pub fn next_token(&mut self) -> Result<Token, CompilerError> {
        self.skip_whitespace_and_comments();
        let position = self.position();

        let Some(ch) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                literal: EOF_LITERAL.to_string(),
                position,
            });
        };

        let kind = if is_ident_start(ch) {
            self.read_while(is_ident_continue);
            let word = &self.source[position.offset..self.offset];
            match lookup_keyword(self.keywords, word) {
                Some(keyword) => TokenKind::Keyword(keyword),
                None => TokenKind::Ident,
            }
        } else if ch.is_ascii_digit() {
            self.read_number();
            TokenKind::Number
        } else {
            let kind = match ch {
                '-' => match self.peek_second() {
                    Some('>') => TokenKind::Arrow,
                    Some('-') => TokenKind::DoubleDash,
                    _ => TokenKind::Minus,
                },
                '=' => TokenKind::Eq,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ';' => TokenKind::Semi,
                ',' => TokenKind::Comma,
                _ => {
                    return Err(CompilerError::lex(
                        "L001",
                        format!("unrecognized character '{}'", ch.escape_debug()),
                        position,
                    ));
                }
            };
            let width = match kind {
                TokenKind::Arrow | TokenKind::DoubleDash => 2,
                _ => 1,
            };
            for _ in 0..width {
                self.advance();
            }
            kind
        };

        let token = Token {
            kind,
            literal: self.source[position.offset..self.offset].to_string(),
            position,
        };
        log::trace!("token {:?} {:?} at {}", token.kind, token.literal, token.position);
        Ok(token)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.offset..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn read_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Digits, optionally followed by a dot and more digits. A dot with no
    /// digit after it is left for the next token.
    fn read_number(&mut self) {
        self.read_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.read_while(|c| c.is_ascii_digit());
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('#') => self.skip_line(),
                Some('/') if self.peek_second() == Some('/') => self.skip_line(),
                _ => return,
            }
        }
    }

    fn skip_line(&mut self) {
        self.read_while(|c| c != '\n');
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
