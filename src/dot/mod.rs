//! Block grammar front end: `graph { a -> b; b -- c [cost=2] }`.

pub mod ast;
pub mod interpret;
pub mod parser;

pub use interpret::evaluate;
pub use parser::{KEYWORDS, parse};

use crate::error::CompilerError;
use crate::frontend::{Frontend, Grammar};
use crate::graph::Graph;

pub struct DotFrontend;

impl Frontend for DotFrontend {
    type Ast = ast::Block;

    fn grammar(&self) -> Grammar {
        Grammar::Dot
    }

    fn parse(&self, source: &str) -> Result<ast::Block, CompilerError> {
        parser::parse(source)
    }

    fn evaluate(&self, ast: &ast::Block) -> Result<Graph, CompilerError> {
        interpret::evaluate(ast)
    }
}
