//! WASM entry points for browser use.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::CompilerError;
use crate::frontend::{CompileOptions, Grammar, compile_with};
use crate::graph::Graph;
use crate::trace::{Algorithm, BreadthFirstSearch, Step};

/// Compile source text. `options_json` is a `CompileOptions` object, e.g.
/// `{"grammar": "dot"}`.
/// Returns a JSON object with either `graph` (success) or `errors` (failure).
#[wasm_bindgen]
pub fn compile_source(source: &str, options_json: &str) -> JsValue {
    let result = compile_source_inner(source, options_json);
    to_js(&result)
}

fn compile_source_inner(source: &str, options_json: &str) -> CompileResult {
    let options = match parse_options(options_json) {
        Ok(o) => o,
        Err(error) => return CompileResult::Errors { errors: vec![error] },
    };
    match compile_with(source, &options) {
        Ok(graph) => CompileResult::Success { graph },
        Err(e) => CompileResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    }
}

/// Re-validate source on every edit. Returns a JSON array of errors, empty
/// when the source compiles.
#[wasm_bindgen]
pub fn validate_source(source: &str, options_json: &str) -> JsValue {
    to_js(&validate_source_inner(source, options_json))
}

fn validate_source_inner(source: &str, options_json: &str) -> Vec<ErrorDto> {
    match compile_source_inner(source, options_json) {
        CompileResult::Success { .. } => Vec::new(),
        CompileResult::Errors { errors } => errors,
    }
}

/// Compile and run a traced breadth-first search from `start`.
/// Returns a JSON object with either `steps` or `errors`.
#[wasm_bindgen]
pub fn trace_bfs(source: &str, options_json: &str, start: &str) -> JsValue {
    to_js(&trace_bfs_inner(source, options_json, start))
}

fn trace_bfs_inner(source: &str, options_json: &str, start: &str) -> TraceResult {
    let graph = match compile_source_inner(source, options_json) {
        CompileResult::Success { graph } => graph,
        CompileResult::Errors { errors } => return TraceResult::Errors { errors },
    };
    match BreadthFirstSearch.run(&graph, start) {
        Ok(trace) => TraceResult::Success {
            steps: trace.steps().to_vec(),
        },
        Err(e) => TraceResult::Errors {
            errors: vec![ErrorDto {
                code: "T001".into(),
                phase: "Trace".into(),
                message: e.to_string(),
                line: None,
                column: None,
            }],
        },
    }
}

/// Maps become plain JS objects so consumers can index `graph.vertices[id]`.
fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn parse_options(options_json: &str) -> Result<CompileOptions, ErrorDto> {
    serde_json::from_str::<CompileOptions>(options_json).map_err(|e| ErrorDto {
        code: "O001".into(),
        phase: "Options".into(),
        message: format!(
            "Failed to parse compile options: {} (grammars: {}, {})",
            e,
            Grammar::Dot,
            Grammar::Call
        ),
        line: None,
        column: None,
    })
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

impl From<CompilerError> for ErrorDto {
    fn from(e: CompilerError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            line: Some(e.position.line),
            column: Some(e.position.column),
        }
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { graph: Graph },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum TraceResult {
    #[serde(rename = "success")]
    Success { steps: Vec<Step> },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
