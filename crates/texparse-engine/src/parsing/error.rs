use std::fmt;

use crate::io::IoError;

/// A construct that can be left open on the parse stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ConstructKind {
    Command,
    Argument,
    Environment,
    Comment,
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstructKind::Command => "command",
            ConstructKind::Argument => "argument",
            ConstructKind::Environment => "environment",
            ConstructKind::Comment => "comment",
        };
        f.write_str(name)
    }
}

/// Malformed input the parser cannot structurally recover from.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("argument opened without an enclosing command on line {line} (byte {position})")]
    UnexpectedArgumentOpen { line: usize, position: usize },

    #[error("no closing delimiter known for argument opener `{delimiter}` on line {line}")]
    UnknownArgumentDelimiter { delimiter: String, line: usize },

    #[error("malformed environment start on line {line}: {reason}")]
    MalformedEnvironmentStart { line: usize, reason: &'static str },

    #[error("unterminated {kind} opened on line {line} (byte {position})")]
    UnterminatedConstruct {
        kind: ConstructKind,
        line: usize,
        position: usize,
    },

    #[error(transparent)]
    Io(#[from] IoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_location() {
        let err = ParseError::UnexpectedArgumentOpen {
            line: 3,
            position: 40,
        };
        assert_eq!(
            err.to_string(),
            "argument opened without an enclosing command on line 3 (byte 40)"
        );

        let err = ParseError::UnterminatedConstruct {
            kind: ConstructKind::Environment,
            line: 0,
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "unterminated environment opened on line 0 (byte 0)"
        );
    }
}
