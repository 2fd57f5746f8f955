//! Evaluation of the block grammar.
//!
//! Vertices are declared by their first appearance, either as a vertex
//! statement or as an edge endpoint. `cost` on an edge statement is the edge
//! weight; every other attribute is kept in the tree and ignored here.

use super::ast::*;
use crate::error::CompilerError;
use crate::graph::{Graph, GraphBuilder, weight_value};

pub const COST: &str = "cost";

pub fn evaluate(document: &Block) -> Result<Graph, CompilerError> {
    let mut builder = GraphBuilder::new();
    evaluate_block(document, &mut builder)?;
    let graph = builder.finish();
    log::debug!(
        "evaluated graph block: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn evaluate_block(block: &Block, builder: &mut GraphBuilder) -> Result<(), CompilerError> {
    for stmt in &block.statements {
        match stmt {
            Stmt::Vertex { id, attrs } => {
                builder.declare_vertex(&id.name);
                if let Some(attrs) = attrs {
                    log_ignored(attrs, |_| true);
                }
            }
            Stmt::Edge { from, op, to, attrs } => {
                let weight = attrs
                    .as_ref()
                    .and_then(|attrs| attrs.get(COST))
                    .map(|attr| weight_value(&attr.value))
                    .transpose()?;
                if let Some(attrs) = attrs {
                    log_ignored(attrs, |key| key != COST);
                }
                builder.declare_vertex(&from.name);
                builder.declare_vertex(&to.name);
                builder.connect(&from.name, &to.name, *op == EdgeOp::Directed, weight);
            }
            Stmt::Subgraph(inner) => evaluate_block(inner, builder)?,
        }
    }
    Ok(())
}

fn log_ignored(attrs: &AttrList, ignored: impl Fn(&str) -> bool) {
    for attr in attrs.attrs.iter().filter(|attr| ignored(&attr.key.name)) {
        log::debug!("ignoring attribute '{}' at {}", attr.key.name, attr.key.position);
    }
}
