//! # Syntax Tree
//!
//! Mutable tree produced by the parser. Every node owns its children and can
//! serialize itself back to the literal markup it stands for.
//!
//! ## Node Kinds
//!
//! - **`Command`**: `\name` followed by any number of arguments
//! - **`Argument`**: `{...}` or `[...]` attached to a command
//! - **`Environment`**: `\begin{name} ... \end{name}`
//! - **`Comment`**: `%` up to and including the line break
//! - **`Text`**: a run of literal characters
//! - **`Root`**: the parsed document (not a [`Node`] variant; it is never a child)
//!
//! ## Serialization
//!
//! `string()` always equals `start_delimiter + inner_string() + end_delimiter`.
//! For untouched parses the root's `string()` reproduces the input exactly.
//! Commands additionally watch their arguments for edits, see [`Command`].

pub mod argument;
pub mod command;
pub mod environment;
pub mod leaf;
pub mod repr;
pub mod root;
pub mod span;

pub use argument::Argument;
pub use command::Command;
pub use environment::Environment;
pub use leaf::{Comment, Text};
pub use root::{Diagnostic, Root};
pub use span::Span;

use std::fmt;

/// The kind of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum NodeKind {
    Command,
    Argument,
    Environment,
    Comment,
    Text,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Command => "command",
            NodeKind::Argument => "argument",
            NodeKind::Environment => "environment",
            NodeKind::Comment => "comment",
            NodeKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// A child node in the syntax tree.
#[derive(Debug, Clone)]
pub enum Node {
    Command(Command),
    Argument(Argument),
    Environment(Environment),
    Comment(Comment),
    Text(Text),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Command(_) => NodeKind::Command,
            Node::Argument(_) => NodeKind::Argument,
            Node::Environment(_) => NodeKind::Environment,
            Node::Comment(_) => NodeKind::Comment,
            Node::Text(_) => NodeKind::Text,
        }
    }

    /// Source span, or `None` for nodes built programmatically.
    pub fn span(&self) -> Option<Span> {
        match self {
            Node::Command(n) => n.span(),
            Node::Argument(n) => n.span(),
            Node::Environment(n) => n.span(),
            Node::Comment(n) => n.span(),
            Node::Text(n) => n.span(),
        }
    }

    pub fn start_delimiter(&self) -> &str {
        match self {
            Node::Command(n) => n.start_delimiter(),
            Node::Argument(n) => n.start_delimiter(),
            Node::Environment(n) => n.start_delimiter(),
            Node::Comment(n) => n.start_delimiter(),
            Node::Text(_) => "",
        }
    }

    pub fn end_delimiter(&self) -> &str {
        match self {
            Node::Command(n) => n.end_delimiter(),
            Node::Argument(n) => n.end_delimiter(),
            Node::Environment(n) => n.end_delimiter(),
            Node::Comment(n) => n.end_delimiter(),
            Node::Text(_) => "",
        }
    }

    /// Children in insertion order. Comments and text have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Command(n) => n.children(),
            Node::Argument(n) => n.children(),
            Node::Environment(n) => n.children(),
            Node::Comment(_) | Node::Text(_) => &[],
        }
    }

    /// Mutable children. Comments and text yield an empty slice.
    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Command(n) => n.children_mut().as_mut_slice(),
            Node::Argument(n) => n.children_mut().as_mut_slice(),
            Node::Environment(n) => n.children_mut().as_mut_slice(),
            Node::Comment(_) | Node::Text(_) => &mut [],
        }
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children().last()
    }

    /// The literal text this node was parsed from, if it was parsed.
    pub fn full_text(&self) -> Option<&str> {
        match self {
            Node::Command(n) => n.full_text(),
            Node::Argument(n) => n.full_text(),
            Node::Environment(n) => n.full_text(),
            Node::Comment(n) => n.full_text(),
            Node::Text(n) => n.full_text(),
        }
    }

    /// Serialization without the node's own delimiters.
    pub fn inner_string(&self) -> String {
        match self {
            Node::Command(n) => n.inner_string(),
            Node::Argument(n) => n.inner_string(),
            Node::Environment(n) => n.inner_string(),
            Node::Comment(n) => n.inner_string(),
            Node::Text(n) => n.inner_string(),
        }
    }

    /// Full serialization including delimiters.
    pub fn string(&self) -> String {
        match self {
            Node::Command(n) => n.string(),
            Node::Argument(n) => n.string(),
            Node::Environment(n) => n.string(),
            Node::Comment(n) => n.string(),
            Node::Text(n) => n.string(),
        }
    }

    /// Indented debug rendering of this node and its subtree.
    pub fn repr(&self) -> String {
        self.repr_at(0)
    }

    pub(crate) fn repr_at(&self, level: usize) -> String {
        match self {
            Node::Command(n) => n.repr_at(level),
            Node::Argument(n) => n.repr_at(level),
            Node::Environment(n) => n.repr_at(level),
            Node::Comment(n) => n.repr(),
            Node::Text(n) => n.repr(),
        }
    }

    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Node::Command(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_command_mut(&mut self) -> Option<&mut Command> {
        match self {
            Node::Command(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_argument(&self) -> Option<&Argument> {
        match self {
            Node::Argument(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_argument_mut(&mut self) -> Option<&mut Argument> {
        match self {
            Node::Argument(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_environment(&self) -> Option<&Environment> {
        match self {
            Node::Environment(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_environment_mut(&mut self) -> Option<&mut Environment> {
        match self {
            Node::Environment(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Node::Comment(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, Node::Argument(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string())
    }
}

impl From<Command> for Node {
    fn from(value: Command) -> Self {
        Node::Command(value)
    }
}

impl From<Argument> for Node {
    fn from(value: Argument) -> Self {
        Node::Argument(value)
    }
}

impl From<Environment> for Node {
    fn from(value: Environment) -> Self {
        Node::Environment(value)
    }
}

impl From<Comment> for Node {
    fn from(value: Comment) -> Self {
        Node::Comment(value)
    }
}

impl From<Text> for Node {
    fn from(value: Text) -> Self {
        Node::Text(value)
    }
}

/// Concatenated serialization of a sequence of nodes.
pub(crate) fn concat<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> String {
    nodes.into_iter().map(Node::string).collect()
}

/// Strips `start` and `end` delimiter lengths from a literal window.
pub(crate) fn strip_delimiters(full: &str, start: &str, end: &str) -> String {
    let inner_end = full.len().saturating_sub(end.len());
    full.get(start.len()..inner_end)
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_delimiters_removes_both_ends() {
        assert_eq!(strip_delimiters("{abc}", "{", "}"), "abc");
        assert_eq!(strip_delimiters("%note\n", "%", "\n"), "note");
        assert_eq!(strip_delimiters("plain", "", ""), "plain");
    }

    #[test]
    fn strip_delimiters_on_short_window_is_empty() {
        assert_eq!(strip_delimiters("{", "{", "}"), "");
        assert_eq!(strip_delimiters("", "\\begin", ""), "");
    }

    #[test]
    fn kind_and_casts() {
        let node = Node::from(Text::new("x"));
        assert_eq!(node.kind(), NodeKind::Text);
        assert!(node.as_text().is_some());
        assert!(node.as_command().is_none());
        assert!(node.children().is_empty());
        assert_eq!(node.to_string(), "x");
    }

    #[test]
    fn leaf_children_mut_is_empty() {
        let mut node = Node::from(Comment::new("note"));
        assert!(node.children_mut().is_empty());
    }
}
