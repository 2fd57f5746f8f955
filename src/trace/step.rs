//! Immutable algorithm steps and the builders that produce them.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Slate,
    Sky,
    Orange,
}

/// Element id → overlay color.
pub type Highlights = BTreeMap<String, Color>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayState {
    pub title: String,
    pub data: Vec<String>,
    /// Indexes into `data`.
    pub highlighted: BTreeSet<usize>,
}

/// A named snapshot of algorithm state shown alongside a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum State {
    Array(ArrayState),
}

pub struct ArrayStateBuilder {
    state: ArrayState,
}

impl ArrayStateBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            state: ArrayState {
                title: title.into(),
                data: Vec::new(),
                highlighted: BTreeSet::new(),
            },
        }
    }

    pub fn data(mut self, data: impl IntoIterator<Item = String>) -> Self {
        self.state.data = data.into_iter().collect();
        self
    }

    pub fn highlighted(mut self, indexes: impl IntoIterator<Item = usize>) -> Self {
        self.state.highlighted = indexes.into_iter().collect();
        self
    }

    pub fn build(self) -> State {
        State::Array(self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub description: String,
    pub states: Vec<State>,
    pub vertex_highlights: Highlights,
    pub edge_highlights: Highlights,
}

pub struct StepBuilder {
    step: Step,
}

impl StepBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            step: Step {
                description: description.into(),
                states: Vec::new(),
                vertex_highlights: Highlights::new(),
                edge_highlights: Highlights::new(),
            },
        }
    }

    pub fn states(mut self, states: Vec<State>) -> Self {
        self.step.states = states;
        self
    }

    pub fn vertex_highlights(mut self, highlights: Highlights) -> Self {
        self.step.vertex_highlights = highlights;
        self
    }

    pub fn edge_highlights(mut self, highlights: Highlights) -> Self {
        self.step.edge_highlights = highlights;
        self
    }

    pub fn build(self) -> Step {
        self.step
    }
}

/// Append-only sequence of finished steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_produce_finished_values() {
        let queue = ArrayStateBuilder::new("Queue")
            .data(vec!["a".to_string(), "b".to_string()])
            .highlighted([1])
            .build();
        let step = StepBuilder::new("Push b.")
            .states(vec![queue])
            .vertex_highlights(Highlights::from([("b".to_string(), Color::Sky)]))
            .build();

        let State::Array(state) = &step.states[0];
        assert_eq!(state.title, "Queue");
        assert_eq!(state.highlighted, BTreeSet::from([1]));
        assert_eq!(step.vertex_highlights["b"], Color::Sky);
        assert!(step.edge_highlights.is_empty());
    }

    #[test]
    fn step_serializes_with_tagged_states() {
        let step = StepBuilder::new("x")
            .states(vec![ArrayStateBuilder::new("Visit Order").build()])
            .build();
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["states"][0]["type"], "array");
        assert_eq!(json["states"][0]["title"], "Visit Order");
    }
}
