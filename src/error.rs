//! Unified compiler error type used across all phases.
//!
//! Every failure carries the phase that raised it, a stable code and the
//! source position it refers to. Compilation stops at the first error.

use thiserror::Error;

use crate::syntax::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Lexical error: a character no token starts with.
    Lex,
    /// Syntax error: the token sequence matches no production.
    Parse,
    /// Semantic error: the tree is well formed but violates a graph rule.
    Evaluate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Lex => write!(f, "Lex"),
            Phase::Parse => write!(f, "Parse"),
            Phase::Evaluate => write!(f, "Evaluate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{phase}:{code}] {message} at {position}")]
pub struct CompilerError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub position: Position,
}

impl CompilerError {
    pub fn lex(code: &str, message: impl Into<String>, position: Position) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Lex,
            message: message.into(),
            position,
        }
    }

    pub fn syntax(code: &str, message: impl Into<String>, position: Position) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            position,
        }
    }

    pub fn semantic(code: &str, message: impl Into<String>, position: Position) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Evaluate,
            message: message.into(),
            position,
        }
    }

    /// Render the error against its source: a header line, the offending
    /// line of text and a caret under the reported column.
    pub fn render(&self, source: &str) -> String {
        let line_text = source
            .lines()
            .nth(self.position.line.saturating_sub(1))
            .unwrap_or("");
        format!(
            "error[{}]: {}\n --> {}\n  | {}\n  | {}^",
            self.code,
            self.message,
            self.position,
            line_text,
            " ".repeat(self.position.column.saturating_sub(1))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_phase_code_and_position() {
        let err = CompilerError::syntax("P001", "expected '{', found 'a'", Position::new(2, 7, 12));
        assert_eq!(err.to_string(), "[Parse:P001] expected '{', found 'a' at 2:7");
    }

    #[test]
    fn render_points_at_column() {
        let source = "graph {\n  a => b\n}";
        let err = CompilerError::lex("L001", "unrecognized character '>'", Position::new(2, 6, 13));
        let rendered = err.render(source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[L001]: unrecognized character '>'");
        assert_eq!(lines[2], "  |   a => b");
        assert_eq!(lines[3], "  |      ^");
    }
}
