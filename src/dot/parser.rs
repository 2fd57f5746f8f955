//! Recursive-descent parser for the block grammar.
//!
//! ```text
//! document      := block EOF                 (keyword `graph`)
//! block         := ('graph' | 'subgraph') IDENT? '{' stmt* '}'
//! stmt          := vertex_stmt | edge_stmt | block | ';'
//! vertex_stmt   := IDENT attr_list?
//! edge_stmt     := IDENT ('->' | '--') IDENT attr_list?
//! attr_list     := '[' (attr (',' attr)* ','?)? ']'
//! attr          := IDENT '=' literal
//! ```

use super::ast::*;
use crate::error::CompilerError;
use crate::syntax::{Ident, Keyword, Lexer, TokenCursor, TokenKind};

pub static KEYWORDS: [(&str, Keyword); 2] = [
    ("graph", Keyword::Graph),
    ("subgraph", Keyword::Subgraph),
];

/// Parse a block-grammar document into its `graph` block.
pub fn parse(source: &str) -> Result<Block, CompilerError> {
    let mut parser = Parser {
        cursor: TokenCursor::new(Lexer::new(source, &KEYWORDS))?,
    };
    let document = parser.document()?;
    log::debug!(
        "parsed graph block {:?} with {} statements",
        document.name.as_ref().map(|n| n.name.as_str()),
        document.statements.len()
    );
    Ok(document)
}

struct Parser<'a> {
    cursor: TokenCursor<'a>,
}

impl Parser<'_> {
    fn document(&mut self) -> Result<Block, CompilerError> {
        if !self.cursor.at(TokenKind::Keyword(Keyword::Graph)) {
            return Err(self.cursor.unexpected("'graph'"));
        }
        let block = self.block()?;
        self.cursor.expect(TokenKind::Eof)?;
        Ok(block)
    }

    /// Called with the cursor on `graph` or `subgraph`.
    fn block(&mut self) -> Result<Block, CompilerError> {
        let head = self.cursor.bump()?;
        let keyword = match head.kind {
            TokenKind::Keyword(Keyword::Graph) => BlockKeyword::Graph,
            _ => BlockKeyword::Subgraph,
        };
        let name = self.cursor.eat(TokenKind::Ident)?.map(Ident::from_token);
        self.cursor.expect(TokenKind::LBrace)?;

        let mut statements = Vec::new();
        loop {
            match self.cursor.peek().kind {
                TokenKind::RBrace => {
                    self.cursor.bump()?;
                    break;
                }
                TokenKind::Semi => {
                    self.cursor.bump()?;
                }
                TokenKind::Ident => statements.push(self.ident_statement()?),
                TokenKind::Keyword(Keyword::Subgraph) => {
                    statements.push(Stmt::Subgraph(self.block()?));
                }
                TokenKind::LBracket => {
                    return Err(CompilerError::syntax(
                        "P003",
                        "attribute list must directly follow a vertex or edge statement",
                        self.cursor.peek().position,
                    ));
                }
                _ => return Err(self.cursor.unexpected("statement or '}'")),
            }
        }

        Ok(Block {
            keyword,
            name,
            statements,
            position: head.position,
        })
    }

    /// A vertex or edge statement, told apart by the token after the first
    /// identifier.
    fn ident_statement(&mut self) -> Result<Stmt, CompilerError> {
        let first = Ident::from_token(self.cursor.bump()?);
        let op = match self.cursor.peek().kind {
            TokenKind::Arrow => Some(EdgeOp::Directed),
            TokenKind::DoubleDash => Some(EdgeOp::Undirected),
            _ => None,
        };

        let Some(op) = op else {
            let attrs = self.attr_list()?;
            return Ok(Stmt::Vertex { id: first, attrs });
        };

        self.cursor.bump()?;
        let to = Ident::from_token(self.cursor.expect(TokenKind::Ident)?);
        let attrs = self.attr_list()?;
        Ok(Stmt::Edge {
            from: first,
            op,
            to,
            attrs,
        })
    }

    fn attr_list(&mut self) -> Result<Option<AttrList>, CompilerError> {
        let Some(open) = self.cursor.eat(TokenKind::LBracket)? else {
            return Ok(None);
        };

        let mut attrs: Vec<Attr> = Vec::new();
        while !self.cursor.at(TokenKind::RBracket) {
            let key = Ident::from_token(self.cursor.expect(TokenKind::Ident)?);
            if attrs.iter().any(|attr| attr.key.name == key.name) {
                return Err(CompilerError::syntax(
                    "P002",
                    format!("duplicate attribute key '{}'", key.name),
                    key.position,
                ));
            }
            self.cursor.expect(TokenKind::Eq)?;
            let value = self.cursor.literal()?;
            attrs.push(Attr { key, value });
            if self.cursor.eat(TokenKind::Comma)?.is_none() {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBracket)?;

        Ok(Some(AttrList {
            attrs,
            position: open.position,
        }))
    }
}
