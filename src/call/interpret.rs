//! Evaluation of the function-call grammar.
//!
//! Vertices must be declared with `vertex(...)` before an `edge` or `arc`
//! refers to them. Declaring a vertex twice is allowed.

use super::ast::*;
use crate::error::CompilerError;
use crate::graph::{Graph, GraphBuilder, weight_value};
use crate::syntax::Ident;

pub fn evaluate(program: &Program) -> Result<Graph, CompilerError> {
    let mut builder = GraphBuilder::new();

    for stmt in &program.statements {
        match stmt {
            Stmt::Vertex(decl) => {
                for id in &decl.ids {
                    builder.declare_vertex(&id.name);
                }
            }
            Stmt::Edge(conn) => connect(&mut builder, conn, false)?,
            Stmt::Arc(conn) => connect(&mut builder, conn, true)?,
        }
    }

    let graph = builder.finish();
    log::debug!(
        "evaluated call program: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn connect(
    builder: &mut GraphBuilder,
    conn: &Connection,
    directed: bool,
) -> Result<(), CompilerError> {
    require_declared(builder, &conn.source)?;
    for target in &conn.targets {
        require_declared(builder, target)?;
    }
    let weight = conn.weight.as_ref().map(weight_value).transpose()?;

    for target in &conn.targets {
        builder.connect(&conn.source.name, &target.name, directed, weight);
    }
    Ok(())
}

fn require_declared(builder: &GraphBuilder, id: &Ident) -> Result<(), CompilerError> {
    if builder.contains_vertex(&id.name) {
        Ok(())
    } else {
        Err(CompilerError::semantic(
            "E001",
            format!("vertex '{}' is used before it is declared", id.name),
            id.position,
        ))
    }
}
