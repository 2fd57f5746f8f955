//! Function-call grammar front end: `vertex([A, B]) edge(A, B, 5)`.

pub mod ast;
pub mod interpret;
pub mod parser;

pub use interpret::evaluate;
pub use parser::{KEYWORDS, parse};

use crate::error::CompilerError;
use crate::frontend::{Frontend, Grammar};
use crate::graph::Graph;

pub struct CallFrontend;

impl Frontend for CallFrontend {
    type Ast = ast::Program;

    fn grammar(&self) -> Grammar {
        Grammar::Call
    }

    fn parse(&self, source: &str) -> Result<ast::Program, CompilerError> {
        parser::parse(source)
    }

    fn evaluate(&self, ast: &ast::Program) -> Result<Graph, CompilerError> {
        interpret::evaluate(ast)
    }
}
