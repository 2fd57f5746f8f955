//! petgraph-based view over a compiled graph for structural queries.

use std::collections::HashMap;

use petgraph::algo::{connected_components, is_cyclic_directed};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::Bfs;
use serde::Serialize;

use super::Graph;

/// Directed petgraph mirror of a `Graph`. Undirected edges appear once in
/// each direction; edge weights are the source edge ids.
pub struct GraphView {
    pub graph: DiGraph<String, String>,
    pub node_indices: HashMap<String, NodeIndex>,
    /// Each source edge once, in its written orientation, with its
    /// `directed` flag.
    written: Vec<(NodeIndex, NodeIndex, bool)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
    pub directed_edges: usize,
    pub undirected_edges: usize,
    pub cyclic: bool,
    pub components: usize,
}

impl GraphView {
    pub fn build(source: &Graph) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut written = Vec::new();

        for id in source.vertices.keys() {
            let idx = graph.add_node(id.clone());
            node_indices.insert(id.clone(), idx);
        }

        for edge in source.edges.values() {
            let (Some(&from), Some(&to)) =
                (node_indices.get(&edge.from), node_indices.get(&edge.to))
            else {
                continue;
            };
            graph.add_edge(from, to, edge.id.clone());
            written.push((from, to, edge.directed));
            if !edge.directed && from != to {
                graph.add_edge(to, from, edge.id.clone());
            }
        }

        GraphView {
            graph,
            node_indices,
            written,
        }
    }

    pub fn successors(&self, vertex: &str) -> Vec<&str> {
        self.neighbors(vertex, petgraph::Direction::Outgoing)
    }

    pub fn predecessors(&self, vertex: &str) -> Vec<&str> {
        self.neighbors(vertex, petgraph::Direction::Incoming)
    }

    fn neighbors(&self, vertex: &str, direction: petgraph::Direction) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(vertex) else {
            return vec![];
        };
        let mut ids: Vec<&str> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Vertices reachable from `start`, including `start`, sorted by id.
    pub fn reachable_from(&self, start: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(start) else {
            return vec![];
        };
        let mut bfs = Bfs::new(&self.graph, idx);
        let mut reached = Vec::new();
        while let Some(n) = bfs.next(&self.graph) {
            reached.push(self.graph[n].as_str());
        }
        reached.sort_unstable();
        reached
    }

    /// True if a cycle exists in the mixed graph. Each undirected edge is one
    /// link usable in either direction but never walked back over itself, so
    /// a lone `a -- b` is acyclic while `a -- b a -- b` is a cycle.
    pub fn is_cyclic(&self) -> bool {
        let node_count = self.graph.node_count();
        let mut linked = UnionFind::<usize>::new(node_count);
        for &(from, to, directed) in &self.written {
            if !directed && !linked.union(from.index(), to.index()) {
                return true;
            }
        }

        // Directed edges between the undirected components.
        let mut contracted: DiGraph<(), ()> =
            DiGraph::with_capacity(node_count, self.written.len());
        for _ in 0..node_count {
            contracted.add_node(());
        }
        for &(from, to, directed) in &self.written {
            if !directed {
                continue;
            }
            let (from, to) = (linked.find(from.index()), linked.find(to.index()));
            if from == to {
                return true;
            }
            contracted.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        is_cyclic_directed(&contracted)
    }

    /// Number of weakly connected components.
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    pub fn summary(&self) -> GraphSummary {
        let directed_edges = self.written.iter().filter(|(_, _, directed)| *directed).count();
        GraphSummary {
            vertices: self.graph.node_count(),
            edges: self.written.len(),
            directed_edges,
            undirected_edges: self.written.len() - directed_edges,
            cyclic: self.is_cyclic(),
            components: self.component_count(),
        }
    }
}
