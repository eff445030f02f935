use super::{Node, Span, concat, repr::delimited};
use crate::parsing::kinds::ArgumentSyntax;

/// A `{...}` or `[...]` group attached to a command.
#[derive(Debug, Clone)]
pub struct Argument {
    start_delimiter: String,
    end_delimiter: String,
    children: Vec<Node>,
    span: Option<Span>,
    full_text: Option<String>,
}

impl Argument {
    pub fn new(
        start_delimiter: impl Into<String>,
        end_delimiter: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            start_delimiter: start_delimiter.into(),
            end_delimiter: end_delimiter.into(),
            children,
            span: None,
            full_text: None,
        }
    }

    /// Required argument: `{children}`.
    pub fn braced(children: Vec<Node>) -> Self {
        Self::new(
            ArgumentSyntax::BRACE_OPEN.to_string(),
            ArgumentSyntax::BRACE_CLOSE.to_string(),
            children,
        )
    }

    /// Optional argument: `[children]`.
    pub fn bracketed(children: Vec<Node>) -> Self {
        Self::new(
            ArgumentSyntax::BRACKET_OPEN.to_string(),
            ArgumentSyntax::BRACKET_CLOSE.to_string(),
            children,
        )
    }

    pub(crate) fn parsed(
        start_delimiter: String,
        end_delimiter: String,
        children: Vec<Node>,
        span: Span,
        full_text: String,
    ) -> Self {
        Self {
            start_delimiter,
            end_delimiter,
            children,
            span: Some(span),
            full_text: Some(full_text),
        }
    }

    pub fn start_delimiter(&self) -> &str {
        &self.start_delimiter
    }

    pub fn end_delimiter(&self) -> &str {
        &self.end_delimiter
    }

    pub fn set_start_delimiter(&mut self, start_delimiter: impl Into<String>) {
        self.start_delimiter = start_delimiter.into();
    }

    pub fn set_end_delimiter(&mut self, end_delimiter: impl Into<String>) {
        self.end_delimiter = end_delimiter.into();
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

    /// Text of the last child, if that child is a text run.
    ///
    /// This is how `\begin{name}` and `\end{name}` carry their name.
    pub fn trailing_text(&self) -> Option<&str> {
        self.last_child()?.as_text().map(|t| t.text())
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn full_text(&self) -> Option<&str> {
        self.full_text.as_deref()
    }

    pub fn inner_string(&self) -> String {
        concat(&self.children)
    }

    pub fn string(&self) -> String {
        format!(
            "{}{}{}",
            self.start_delimiter,
            self.inner_string(),
            self.end_delimiter
        )
    }

    pub fn repr(&self) -> String {
        self.repr_at(0)
    }

    pub(crate) fn repr_at(&self, level: usize) -> String {
        delimited(
            "Argument",
            level,
            &self.start_delimiter,
            &self.children,
            &self.end_delimiter,
        )
    }
}
