//! Shared lexical layer: positions, tokens, the lexer and the AST leaves both
//! grammars have in common.

pub mod cursor;
pub mod lexer;

pub use cursor::TokenCursor;
pub use lexer::Lexer;

use serde::Serialize;

/// Location of a character in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// Byte offset from the start of the source.
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Graph,
    Subgraph,
    Vertex,
    Edge,
    Arc,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Graph => "graph",
            Keyword::Subgraph => "subgraph",
            Keyword::Vertex => "vertex",
            Keyword::Edge => "edge",
            Keyword::Arc => "arc",
        }
    }
}

/// Fixed word → keyword table of one grammar. Words not listed lex as
/// identifiers.
pub type KeywordTable = [(&'static str, Keyword)];

pub fn lookup_keyword(table: &KeywordTable, word: &str) -> Option<Keyword> {
    table
        .iter()
        .find(|(text, _)| *text == word)
        .map(|(_, keyword)| *keyword)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Ident,
    Number,
    Keyword(Keyword),
    /// `->`
    Arrow,
    /// `--`
    DoubleDash,
    /// `-`
    Minus,
    Eq,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Semi,
    Comma,
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Keyword(keyword) => write!(f, "'{}'", keyword.as_str()),
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::DoubleDash => write!(f, "'--'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// How the token reads in a "found ..." message.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.literal),
        }
    }
}

// =============================================================================
// AST LEAVES SHARED BY BOTH GRAMMARS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub name: String,
    pub position: Position,
}

impl Ident {
    pub fn from_token(token: Token) -> Self {
        Ident {
            name: token.literal,
            position: token.position,
        }
    }
}

/// Numeric literal exactly as written. Conversion to a value happens during
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    pub text: String,
    pub negative: bool,
    pub position: Position,
}

/// Right-hand side of an attribute or a weight argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Literal {
    Number(NumberLiteral),
    Ident(Ident),
}
