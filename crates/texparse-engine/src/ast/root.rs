use std::fmt;

use super::{Node, concat, repr::delimited};
use crate::parsing::ConstructKind;

/// A construct still open when the input ran out.
///
/// Such constructs are not part of the returned tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub kind: ConstructKind,
    /// Zero-based line the construct was opened on.
    pub line: usize,
    /// Byte offset the construct was opened at.
    pub position: usize,
    /// Start delimiter as far as it was read, e.g. `\section` or `{`.
    pub delimiter: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unterminated {} `{}` opened on line {} (byte {})",
            self.kind,
            self.delimiter.escape_debug(),
            self.line,
            self.position
        )
    }
}

/// The parsed document.
#[derive(Debug, Clone, Default)]
pub struct Root {
    children: Vec<Node>,
    length: usize,
    line_count: usize,
    full_text: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub(crate) fn parsed(
        children: Vec<Node>,
        source: String,
        line_count: usize,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            children,
            length: source.len(),
            line_count,
            full_text: Some(source),
            diagnostics,
        }
    }

    /// Source length in bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of line breaks in the source.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// The source this tree was parsed from.
    pub fn full_text(&self) -> Option<&str> {
        self.full_text.as_deref()
    }

    /// Constructs that were still open at the end of input.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn inner_string(&self) -> String {
        concat(&self.children)
    }

    /// The root has no delimiters; this equals `inner_string`.
    pub fn string(&self) -> String {
        self.inner_string()
    }

    pub fn repr(&self) -> String {
        delimited("Root", 0, "", &self.children, "")
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string())
    }
}
