//! Integration tests for evaluation: declaration policies, weights, adjacency.

mod helpers;

use graphlang::Phase;
use graphlang::syntax::Position;
use helpers::*;

#[test]
fn call_requires_declaration_before_use() {
    let err = call_err("vertex(A)\narc(A, [B])");
    assert_eq!(err.phase, Phase::Evaluate);
    assert_eq!(err.code, "E001");
    assert_eq!(err.message, "vertex 'B' is used before it is declared");
    assert_eq!(err.position, Position::new(2, 9, 18));
}

#[test]
fn call_declaration_after_use_is_still_an_error() {
    let err = call_err("edge(A, B)\nvertex([A, B])");
    assert_eq!(err.code, "E001");
    assert_eq!(err.position.line, 1);
}

#[test]
fn call_redeclaration_is_idempotent() {
    let graph = call("vertex(A) vertex([A, B]) vertex(B) edge(A, B)");
    assert_eq!(vertex_ids(&graph), vec!["A", "B"]);
    assert_eq!(graph.edge_count(), 1);
    assert_adjacency_invariant(&graph);
}

#[test]
fn call_target_list_expands_with_shared_weight() {
    let graph = call("vertex([A, B, C, D])\narc(A, [B, C, D], 2.5)");
    assert_eq!(
        edge_tuples(&graph),
        vec![
            ("A", "B", true, Some(2.5)),
            ("A", "C", true, Some(2.5)),
            ("A", "D", true, Some(2.5)),
        ]
    );
    assert_eq!(graph.vertices["A"].outs, vec!["e0", "e1", "e2"]);
    assert!(graph.vertices["A"].ins.is_empty());
    assert_adjacency_invariant(&graph);
}

#[test]
fn dot_declares_vertices_on_first_use() {
    let graph = dot("graph { x -- y; y -> z; x }");
    assert_eq!(vertex_ids(&graph), vec!["x", "y", "z"]);
    assert_eq!(
        edge_tuples(&graph),
        vec![
            ("x", "y", false, None),
            ("y", "z", true, None),
        ]
    );
    assert_adjacency_invariant(&graph);
}

#[test]
fn dot_subgraph_contents_merge_into_one_graph() {
    let graph = dot("graph { a subgraph s { a -> b } b -- c }");
    assert_eq!(vertex_ids(&graph), vec!["a", "b", "c"]);
    assert_eq!(graph.edge_count(), 2);
    assert_adjacency_invariant(&graph);
}

#[test]
fn dot_cost_is_the_edge_weight() {
    let graph = dot("graph { a -- b [cost=10.23] a -> c [color=red, cost=0] }");
    assert_eq!(
        edge_tuples(&graph),
        vec![
            ("a", "b", false, Some(10.23)),
            ("a", "c", true, Some(0.0)),
        ]
    );
}

#[test]
fn dot_unknown_attributes_are_ignored() {
    let graph = dot("graph { a -> b [label=x, style=dashed] }");
    assert_eq!(graph.edges["e0"].weight, None);
}

#[test]
fn dot_vertex_cost_is_ignored() {
    let graph = dot("graph { c [cost=banana] }");
    assert_eq!(vertex_ids(&graph), vec!["c"]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn negative_weight_is_a_semantic_error() {
    let err = dot_err("graph { a -> b [cost=-1] }");
    assert_eq!(err.phase, Phase::Evaluate);
    assert_eq!(err.code, "E003");
    assert_eq!(err.position, Position::new(1, 22, 21));

    let err = call_err("vertex([A, B]) edge(A, B, -0.5)");
    assert_eq!(err.code, "E003");
}

#[test]
fn non_numeric_weight_is_a_semantic_error() {
    let err = dot_err("graph { a -> b [cost=high] }");
    assert_eq!(err.code, "E005");
    assert_eq!(err.message, "weight must be a number, found identifier 'high'");

    let err = call_err("vertex([A, B]) arc(A, B, high)");
    assert_eq!(err.code, "E005");
}

#[test]
fn non_finite_weight_is_a_semantic_error() {
    let huge = "9".repeat(400);
    let err = dot_err(&format!("graph {{ a -> b [cost={}] }}", huge));
    assert_eq!(err.code, "E004");
}

#[test]
fn undirected_self_loop() {
    let graph = dot("graph { a -- a }");
    assert_eq!(graph.vertices["a"].ins, vec!["e0"]);
    assert_eq!(graph.vertices["a"].outs, vec!["e0"]);
    assert_adjacency_invariant(&graph);
}

#[test]
fn parallel_edges_get_distinct_ids() {
    let graph = dot("graph { a -> b a -> b a -- b }");
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.vertices["a"].outs, vec!["e0", "e1", "e2"]);
    assert_eq!(graph.vertices["b"].ins, vec!["e0", "e1", "e2"]);
    assert_eq!(graph.vertices["b"].outs, vec!["e2"]);
    assert_adjacency_invariant(&graph);
}
