//! AST of the block grammar: `graph name { a -> b; c [cost=10] }`.

use serde::Serialize;

use crate::syntax::{Ident, Literal, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKeyword {
    Graph,
    Subgraph,
}

/// A `graph` or `subgraph` block. The document is a single `graph` block;
/// subgraphs nest as statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub keyword: BlockKeyword,
    pub name: Option<Ident>,
    pub statements: Vec<Stmt>,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOp {
    /// `->`
    Directed,
    /// `--`
    Undirected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Stmt {
    Vertex {
        id: Ident,
        attrs: Option<AttrList>,
    },
    Edge {
        from: Ident,
        op: EdgeOp,
        to: Ident,
        attrs: Option<AttrList>,
    },
    Subgraph(Block),
}

/// `[key=value, ...]`, bound to the statement it follows. Keys are unique
/// within one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttrList {
    pub attrs: Vec<Attr>,
    pub position: Position,
}

impl AttrList {
    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.attrs.iter().find(|attr| attr.key.name == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attr {
    pub key: Ident,
    pub value: Literal,
}
