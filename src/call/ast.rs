//! AST of the function-call grammar: `vertex([A, B])`, `edge(A, B, 5)`,
//! `arc(A, [B, C])`.

use serde::Serialize;

use crate::syntax::{Ident, Literal, Position};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Stmt {
    Vertex(VertexDecl),
    /// Undirected.
    Edge(Connection),
    /// Directed.
    Arc(Connection),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexDecl {
    pub ids: Vec<Ident>,
    pub position: Position,
}

/// One source connected to every target, all edges sharing the optional
/// weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub source: Ident,
    pub targets: Vec<Ident>,
    pub weight: Option<Literal>,
    pub position: Position,
}
