//! Common "source text → Graph" capability over both grammars.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::call::CallFrontend;
use crate::dot::DotFrontend;
use crate::error::CompilerError;
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Block grammar: `graph { a -> b }`.
    Dot,
    /// Function-call grammar: `vertex([a, b]) arc(a, b)`.
    Call,
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grammar::Dot => write!(f, "dot"),
            Grammar::Call => write!(f, "call"),
        }
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(Grammar::Dot),
            "call" => Ok(Grammar::Call),
            other => Err(format!("unknown grammar '{}', expected 'dot' or 'call'", other)),
        }
    }
}

/// Options accepted by the browser entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    pub grammar: Grammar,
}

/// One grammar's lexer + parser + interpreter.
pub trait Frontend {
    type Ast;

    fn grammar(&self) -> Grammar;

    fn parse(&self, source: &str) -> Result<Self::Ast, CompilerError>;

    fn evaluate(&self, ast: &Self::Ast) -> Result<Graph, CompilerError>;

    fn compile(&self, source: &str) -> Result<Graph, CompilerError> {
        let ast = self.parse(source)?;
        self.evaluate(&ast)
    }
}

/// Compile `source` with the front end for `grammar`. Stops at the first
/// error; a failed compile produces no graph.
pub fn compile(source: &str, grammar: Grammar) -> Result<Graph, CompilerError> {
    log::debug!("compiling {} bytes as {}", source.len(), grammar);
    let result = match grammar {
        Grammar::Dot => DotFrontend.compile(source),
        Grammar::Call => CallFrontend.compile(source),
    };
    if let Err(err) = &result {
        log::debug!("compile failed: {}", err);
    }
    result
}

pub fn compile_with(source: &str, options: &CompileOptions) -> Result<Graph, CompilerError> {
    compile(source, options.grammar)
}
