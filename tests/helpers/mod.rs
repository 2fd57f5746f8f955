#![allow(dead_code)]

use graphlang::{CompilerError, Grammar, Graph, compile};

pub fn dot(source: &str) -> Graph {
    compile(source, Grammar::Dot).unwrap_or_else(|e| panic!("dot source should compile: {}", e))
}

pub fn call(source: &str) -> Graph {
    compile(source, Grammar::Call).unwrap_or_else(|e| panic!("call source should compile: {}", e))
}

pub fn dot_err(source: &str) -> CompilerError {
    compile(source, Grammar::Dot).expect_err("dot source should fail")
}

pub fn call_err(source: &str) -> CompilerError {
    compile(source, Grammar::Call).expect_err("call source should fail")
}

/// Vertex ids in key order.
pub fn vertex_ids(graph: &Graph) -> Vec<&str> {
    graph.vertices.keys().map(String::as_str).collect()
}

/// `(from, to, directed, weight)` for every edge, in id allocation order.
pub fn edge_tuples(graph: &Graph) -> Vec<(&str, &str, bool, Option<f64>)> {
    let mut edges: Vec<_> = graph.edges.values().collect();
    edges.sort_by_key(|e| e.id[1..].parse::<usize>().unwrap());
    edges
        .into_iter()
        .map(|e| (e.from.as_str(), e.to.as_str(), e.directed, e.weight))
        .collect()
}

/// Every edge id sits in exactly the adjacency lists it should, and every
/// id in an adjacency list names an existing edge touching that vertex.
pub fn assert_adjacency_invariant(graph: &Graph) {
    for (id, edge) in &graph.edges {
        assert_eq!(&edge.id, id);
        assert!(graph.vertices.contains_key(&edge.from), "edge {} has unknown from", id);
        assert!(graph.vertices.contains_key(&edge.to), "edge {} has unknown to", id);

        let two_way = !edge.directed && edge.from != edge.to;
        let expected = if two_way { 2 } else { 1 };
        let outs = graph.vertices.values().flat_map(|v| &v.outs).filter(|e| *e == id).count();
        let ins = graph.vertices.values().flat_map(|v| &v.ins).filter(|e| *e == id).count();
        assert_eq!(outs, expected, "edge {} listed in {} outs", id, outs);
        assert_eq!(ins, expected, "edge {} listed in {} ins", id, ins);

        assert!(graph.vertices[&edge.from].outs.contains(id));
        assert!(graph.vertices[&edge.to].ins.contains(id));
        if two_way {
            assert!(graph.vertices[&edge.to].outs.contains(id));
            assert!(graph.vertices[&edge.from].ins.contains(id));
        }
    }

    for (id, vertex) in &graph.vertices {
        assert_eq!(&vertex.id, id);
        for edge_id in vertex.ins.iter().chain(&vertex.outs) {
            let edge = graph
                .edges
                .get(edge_id)
                .unwrap_or_else(|| panic!("vertex {} lists unknown edge {}", id, edge_id));
            assert!(edge.from == *id || edge.to == *id);
        }
    }
}
