//! Breadth-first search, traced step by step.
//!
//! The queue is allowed to hold duplicates; a vertex dequeued a second time
//! gets its own "already visited" step.

use std::collections::{HashSet, VecDeque};

use super::step::{ArrayStateBuilder, Color, Highlights, State, StepBuilder, Trace};
use super::{Algorithm, TraceError};
use crate::graph::Graph;

pub struct BreadthFirstSearch;

impl Algorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "Breadth First Search"
    }

    fn description(&self) -> &'static str {
        "Explores every vertex at the current depth before moving to the next depth level."
    }

    fn run(&self, graph: &Graph, start: &str) -> Result<Trace, TraceError> {
        if graph.vertex(start).is_none() {
            return Err(TraceError::UnknownVertex(start.to_string()));
        }

        let mut trace = Trace::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::new();

        queue.push_back(start.to_string());
        trace.push(
            StepBuilder::new(format!("Push start vertex {} to the queue.", start))
                .states(vec![
                    queue_state(queue.iter(), &[queue.len() - 1]),
                    visit_order_state(&order),
                ])
                .vertex_highlights(Highlights::from([(start.to_string(), Color::Sky)]))
                .build(),
        );

        while let Some(current) = queue.pop_front() {
            trace.push(
                StepBuilder::new(format!("Get first vertex {} from the queue.", current))
                    .states(vec![
                        queue_state(std::iter::once(&current).chain(queue.iter()), &[0]),
                        visit_order_state(&order),
                    ])
                    .vertex_highlights(with_current(&order, &current, Color::Sky))
                    .build(),
            );

            if visited.contains(&current) {
                trace.push(
                    StepBuilder::new(format!(
                        "Vertex {} was already visited. Continue to the next step.",
                        current
                    ))
                    .states(vec![queue_state(queue.iter(), &[]), visit_order_state(&order)])
                    .vertex_highlights(with_current(&order, &current, Color::Slate))
                    .build(),
                );
                continue;
            }

            visited.insert(current.clone());
            order.push(current.clone());
            trace.push(
                StepBuilder::new(format!("Mark vertex {} as visited.", current))
                    .states(vec![queue_state(queue.iter(), &[]), visit_order_state(&order)])
                    .vertex_highlights(with_current(&order, &current, Color::Slate))
                    .build(),
            );

            let mut added = Vec::new();
            let mut vertex_highlights = visited_highlights(&order);
            let mut edge_highlights = Highlights::new();
            for edge in graph.outgoing(&current) {
                let adjacent = edge.opposite(&current);
                if visited.contains(adjacent) {
                    continue;
                }
                added.push(queue.len());
                queue.push_back(adjacent.to_string());
                vertex_highlights.insert(adjacent.to_string(), Color::Sky);
                edge_highlights.insert(edge.id.clone(), Color::Sky);
            }
            vertex_highlights.insert(current.clone(), Color::Orange);

            trace.push(
                StepBuilder::new("Push all adjacent vertices to the queue.")
                    .states(vec![queue_state(queue.iter(), &added), visit_order_state(&order)])
                    .vertex_highlights(vertex_highlights)
                    .edge_highlights(edge_highlights)
                    .build(),
            );
        }

        trace.push(
            StepBuilder::new("There are no more vertices in the queue. End the algorithm.")
                .states(vec![queue_state(queue.iter(), &[]), visit_order_state(&order)])
                .vertex_highlights(visited_highlights(&order))
                .build(),
        );

        log::debug!("bfs from '{}' produced {} steps", start, trace.len());
        Ok(trace)
    }
}

fn queue_state<'a>(queue: impl Iterator<Item = &'a String>, highlighted: &[usize]) -> State {
    ArrayStateBuilder::new("Queue")
        .data(queue.cloned())
        .highlighted(highlighted.iter().copied())
        .build()
}

fn visit_order_state(order: &[String]) -> State {
    ArrayStateBuilder::new("Visit Order")
        .data(order.iter().cloned())
        .build()
}

fn visited_highlights(order: &[String]) -> Highlights {
    order.iter().map(|id| (id.clone(), Color::Slate)).collect()
}

/// Visited vertices in slate, with `current` drawn on top in `color`.
fn with_current(order: &[String], current: &str, color: Color) -> Highlights {
    let mut highlights = visited_highlights(order);
    highlights.insert(current.to_string(), color);
    highlights
}
