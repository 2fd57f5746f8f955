//! Algorithm traces over a compiled graph.
//!
//! An algorithm reads a `Graph` and records what it does as a sequence of
//! finished `Step` values that a step-by-step viewer can play back.

pub mod bfs;
pub mod step;

pub use bfs::BreadthFirstSearch;
pub use step::{ArrayState, ArrayStateBuilder, Color, Highlights, State, Step, StepBuilder, Trace};

use thiserror::Error;

use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("start vertex '{0}' does not exist in the graph")]
    UnknownVertex(String),
}

pub trait Algorithm {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, graph: &Graph, start: &str) -> Result<Trace, TraceError>;
}
