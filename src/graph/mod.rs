//! Shared backend: the validated graph both front ends compile to.
//!
//! A `Graph` is only ever produced by `GraphBuilder::finish`, which keeps the
//! adjacency lists consistent with the edge table.

pub mod view;

pub use view::{GraphSummary, GraphView};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CompilerError;
use crate::syntax::{Literal, NumberLiteral};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub vertices: BTreeMap<String, Vertex>,
    pub edges: BTreeMap<String, Edge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: String,
    /// Edge ids arriving at this vertex, in creation order.
    pub ins: Vec<String>,
    /// Edge ids leaving this vertex, in creation order.
    pub outs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub directed: bool,
    pub weight: Option<f64>,
}

impl Edge {
    /// The endpoint reached when leaving `vertex` along this edge. Undirected
    /// edges can be crossed from either side.
    pub fn opposite(&self, vertex: &str) -> &str {
        if self.to == vertex && !self.directed {
            &self.from
        } else {
            &self.to
        }
    }
}

impl Graph {
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges leaving `id`, following the vertex's `outs` order.
    pub fn outgoing(&self, id: &str) -> impl Iterator<Item = &Edge> {
        self.vertices
            .get(id)
            .into_iter()
            .flat_map(|v| v.outs.iter())
            .filter_map(|edge_id| self.edges.get(edge_id))
    }
}

/// Incremental graph construction with idempotent vertex declaration and
/// per-compile edge id allocation.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    next_edge: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a vertex. Returns `false` if it already existed.
    pub fn declare_vertex(&mut self, id: &str) -> bool {
        if self.graph.vertices.contains_key(id) {
            return false;
        }
        log::trace!("declare vertex '{}'", id);
        self.graph.vertices.insert(
            id.to_string(),
            Vertex {
                id: id.to_string(),
                ins: Vec::new(),
                outs: Vec::new(),
            },
        );
        true
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.graph.vertices.contains_key(id)
    }

    /// Create an edge between two declared vertices and register it in their
    /// adjacency lists. Undirected edges are registered symmetrically.
    ///
    /// Both endpoints must already be declared.
    pub fn connect(&mut self, from: &str, to: &str, directed: bool, weight: Option<f64>) -> String {
        debug_assert!(self.contains_vertex(from) && self.contains_vertex(to));

        let id = format!("e{}", self.next_edge);
        self.next_edge += 1;

        self.push_adjacency(from, to, &id);
        if !directed && from != to {
            self.push_adjacency(to, from, &id);
        }

        let op = if directed { "->" } else { "--" };
        log::trace!("edge {} {} {} {} weight={:?}", id, from, op, to, weight);
        self.graph.edges.insert(
            id.clone(),
            Edge {
                id: id.clone(),
                from: from.to_string(),
                to: to.to_string(),
                directed,
                weight,
            },
        );
        id
    }

    fn push_adjacency(&mut self, from: &str, to: &str, edge_id: &str) {
        if let Some(vertex) = self.graph.vertices.get_mut(from) {
            vertex.outs.push(edge_id.to_string());
        }
        if let Some(vertex) = self.graph.vertices.get_mut(to) {
            vertex.ins.push(edge_id.to_string());
        }
    }

    pub fn finish(self) -> Graph {
        self.graph
    }
}

/// Convert a weight literal to a finite, non-negative number.
pub fn weight_value(literal: &Literal) -> Result<f64, CompilerError> {
    match literal {
        Literal::Number(number) => number_value(number),
        Literal::Ident(ident) => Err(CompilerError::semantic(
            "E005",
            format!("weight must be a number, found identifier '{}'", ident.name),
            ident.position,
        )),
    }
}

fn number_value(number: &NumberLiteral) -> Result<f64, CompilerError> {
    let value: f64 = number.text.parse().map_err(|_| {
        CompilerError::semantic(
            "E002",
            format!("malformed numeric literal '{}'", number.text),
            number.position,
        )
    })?;
    if !value.is_finite() {
        return Err(CompilerError::semantic(
            "E004",
            format!("weight '{}' is not a finite number", number.text),
            number.position,
        ));
    }
    if number.negative && value != 0.0 {
        return Err(CompilerError::semantic(
            "E003",
            format!("weight must not be negative, found '-{}'", number.text),
            number.position,
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Ident, Position};

    fn number(text: &str, negative: bool) -> Literal {
        Literal::Number(NumberLiteral {
            text: text.into(),
            negative,
            position: Position::start(),
        })
    }

    #[test]
    fn declare_vertex_is_idempotent() {
        let mut builder = GraphBuilder::new();
        assert!(builder.declare_vertex("a"));
        assert!(!builder.declare_vertex("a"));
        assert_eq!(builder.finish().vertex_count(), 1);
    }

    #[test]
    fn directed_edge_registers_one_side() {
        let mut builder = GraphBuilder::new();
        builder.declare_vertex("a");
        builder.declare_vertex("b");
        let id = builder.connect("a", "b", true, None);
        let graph = builder.finish();
        assert_eq!(graph.vertices["a"].outs, vec![id.clone()]);
        assert!(graph.vertices["a"].ins.is_empty());
        assert_eq!(graph.vertices["b"].ins, vec![id]);
        assert!(graph.vertices["b"].outs.is_empty());
    }

    #[test]
    fn undirected_edge_registers_both_sides() {
        let mut builder = GraphBuilder::new();
        builder.declare_vertex("a");
        builder.declare_vertex("b");
        let id = builder.connect("a", "b", false, Some(1.5));
        let graph = builder.finish();
        for v in ["a", "b"] {
            assert_eq!(graph.vertices[v].ins, vec![id.clone()]);
            assert_eq!(graph.vertices[v].outs, vec![id.clone()]);
        }
        assert_eq!(graph.edges[&id].opposite("b"), "a");
        assert_eq!(graph.edges[&id].opposite("a"), "b");
    }

    #[test]
    fn undirected_self_loop_is_registered_once() {
        let mut builder = GraphBuilder::new();
        builder.declare_vertex("a");
        let id = builder.connect("a", "a", false, None);
        let graph = builder.finish();
        assert_eq!(graph.vertices["a"].ins, vec![id.clone()]);
        assert_eq!(graph.vertices["a"].outs, vec![id]);
    }

    #[test]
    fn edge_ids_are_sequential() {
        let mut builder = GraphBuilder::new();
        builder.declare_vertex("a");
        assert_eq!(builder.connect("a", "a", true, None), "e0");
        assert_eq!(builder.connect("a", "a", true, None), "e1");
    }

    #[test]
    fn weight_checks() {
        assert_eq!(weight_value(&number("10.23", false)).unwrap(), 10.23);
        assert_eq!(weight_value(&number("0", true)).unwrap(), 0.0);
        assert_eq!(weight_value(&number("3", true)).unwrap_err().code, "E003");
        assert_eq!(weight_value(&number(&"9".repeat(400), false)).unwrap_err().code, "E004");
        assert_eq!(weight_value(&number("1.2.3", false)).unwrap_err().code, "E002");
        let ident = Literal::Ident(Ident {
            name: "heavy".into(),
            position: Position::start(),
        });
        assert_eq!(weight_value(&ident).unwrap_err().code, "E005");
    }
}
