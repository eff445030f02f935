use super::{Argument, Node, Span, concat, repr::delimited};
use super::leaf::Text;
use crate::parsing::kinds::EnvironmentSyntax;

/// A `\begin{name} ... \end{name}` block.
///
/// The start delimiter is the literal `\begin` command (including any extra
/// arguments such as `\begin{tabular}{ll}`), the end delimiter the literal
/// `\end` command. The body is held in `children`.
#[derive(Debug, Clone)]
pub struct Environment {
    name: String,
    start_delimiter: String,
    end_delimiter: String,
    begin_args: Vec<Argument>,
    children: Vec<Node>,
    span: Option<Span>,
    full_text: Option<String>,
}

impl Environment {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        let name = name.into();
        Self {
            start_delimiter: EnvironmentSyntax::start_delimiter(&name),
            end_delimiter: EnvironmentSyntax::end_delimiter(&name),
            begin_args: vec![Argument::braced(vec![Text::new(name.clone()).into()])],
            name,
            children,
            span: None,
            full_text: None,
        }
    }

    pub(crate) fn parsed(
        name: String,
        start_delimiter: String,
        begin_args: Vec<Argument>,
        end_delimiter: String,
        children: Vec<Node>,
        span: Span,
        full_text: String,
    ) -> Self {
        Self {
            name,
            start_delimiter,
            end_delimiter,
            begin_args,
            children,
            span: Some(span),
            full_text: Some(full_text),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the environment, rewriting both delimiters to their canonical
    /// `\begin{name}` / `\end{name}` form.
    ///
    /// Extra `\begin` arguments beyond the name are dropped.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.start_delimiter = EnvironmentSyntax::start_delimiter(&self.name);
        self.end_delimiter = EnvironmentSyntax::end_delimiter(&self.name);
        self.begin_args = vec![Argument::braced(vec![Text::new(self.name.clone()).into()])];
    }

    /// Arguments of the opening `\begin` command; the first carries the name.
    pub fn begin_args(&self) -> &[Argument] {
        &self.begin_args
    }

    pub fn start_delimiter(&self) -> &str {
        &self.start_delimiter
    }

    pub fn end_delimiter(&self) -> &str {
        &self.end_delimiter
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
            "Environment",
            level,
            &format!("{}: ", self.name),
            &self.children,
            "",
        )
    }
}
