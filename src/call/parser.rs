//! Recursive-descent parser for the function-call grammar.
//!
//! ```text
//! program    := stmt* EOF
//! stmt       := 'vertex' '(' endpoints (',' endpoints)* ','? ')' ';'?
//!             | ('edge' | 'arc') '(' IDENT ',' endpoints (',' literal)? ','? ')' ';'?
//! endpoints  := IDENT | '[' IDENT (',' IDENT)* ','? ']'
//! ```

use super::ast::*;
use crate::error::CompilerError;
use crate::syntax::{Ident, Keyword, Lexer, TokenCursor, TokenKind};

pub static KEYWORDS: [(&str, Keyword); 3] = [
    ("vertex", Keyword::Vertex),
    ("edge", Keyword::Edge),
    ("arc", Keyword::Arc),
];

pub fn parse(source: &str) -> Result<Program, CompilerError> {
    let mut parser = Parser {
        cursor: TokenCursor::new(Lexer::new(source, &KEYWORDS))?,
    };
    let program = parser.program()?;
    log::debug!("parsed call program with {} statements", program.statements.len());
    Ok(program)
}

struct Parser<'a> {
    cursor: TokenCursor<'a>,
}

impl Parser<'_> {
    fn program(&mut self) -> Result<Program, CompilerError> {
        let mut statements = Vec::new();
        loop {
            match self.cursor.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Semi => {
                    self.cursor.bump()?;
                }
                TokenKind::Keyword(Keyword::Vertex) => {
                    statements.push(Stmt::Vertex(self.vertex_decl()?));
                }
                TokenKind::Keyword(Keyword::Edge) => {
                    statements.push(Stmt::Edge(self.connection()?));
                }
                TokenKind::Keyword(Keyword::Arc) => {
                    statements.push(Stmt::Arc(self.connection()?));
                }
                _ => return Err(self.cursor.unexpected("'vertex', 'edge' or 'arc'")),
            }
        }
        Ok(Program { statements })
    }

    fn vertex_decl(&mut self) -> Result<VertexDecl, CompilerError> {
        let head = self.cursor.bump()?;
        self.cursor.expect(TokenKind::LParen)?;

        let mut ids = Vec::new();
        self.endpoints(&mut ids)?;
        while self.cursor.eat(TokenKind::Comma)?.is_some() {
            if self.cursor.at(TokenKind::RParen) {
                break;
            }
            self.endpoints(&mut ids)?;
        }
        self.cursor.expect(TokenKind::RParen)?;

        Ok(VertexDecl {
            ids,
            position: head.position,
        })
    }

    /// `edge(...)` or `arc(...)`; the caller decides which from the keyword.
    fn connection(&mut self) -> Result<Connection, CompilerError> {
        let head = self.cursor.bump()?;
        self.cursor.expect(TokenKind::LParen)?;

        if !self.cursor.at(TokenKind::Ident) {
            return Err(self.cursor.unexpected("identifier"));
        }
        let source = Ident::from_token(self.cursor.bump()?);
        self.cursor.expect(TokenKind::Comma)?;

        let mut targets = Vec::new();
        self.endpoints(&mut targets)?;

        let mut weight = None;
        if self.cursor.eat(TokenKind::Comma)?.is_some() && !self.cursor.at(TokenKind::RParen) {
            weight = Some(self.cursor.literal()?);
            self.cursor.eat(TokenKind::Comma)?;
        }
        self.cursor.expect(TokenKind::RParen)?;

        Ok(Connection {
            source,
            targets,
            weight,
            position: head.position,
        })
    }

    /// A single identifier or a bracketed, non-empty identifier list.
    fn endpoints(&mut self, out: &mut Vec<Ident>) -> Result<(), CompilerError> {
        if self.cursor.at(TokenKind::Ident) {
            out.push(Ident::from_token(self.cursor.bump()?));
            return Ok(());
        }
        if self.cursor.eat(TokenKind::LBracket)?.is_none() {
            return Err(self.cursor.unexpected("identifier or '['"));
        }
        loop {
            out.push(Ident::from_token(self.cursor.expect(TokenKind::Ident)?));
            if self.cursor.eat(TokenKind::Comma)?.is_none() || self.cursor.at(TokenKind::RBracket) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBracket)?;
        Ok(())
    }
}
