pub mod call;
pub mod dot;
pub mod error;
pub mod frontend;
pub mod graph;
pub mod syntax;
pub mod trace;
pub mod wasm;

pub use error::{CompilerError, Phase};
pub use frontend::{CompileOptions, Frontend, Grammar, compile, compile_with};
pub use graph::{Edge, Graph, Vertex};
