use super::{Span, repr::escape};
use crate::parsing::kinds::CommentSyntax;

/// A `%` comment running to the end of its line.
///
/// `text` excludes the `%` and the line break. Commands or braces inside a
/// comment are kept verbatim in `text`; a comment has no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
    start_delimiter: String,
    end_delimiter: String,
    span: Option<Span>,
    full_text: Option<String>,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start_delimiter: CommentSyntax::OPEN.to_string(),
            end_delimiter: CommentSyntax::CLOSE.to_string(),
            span: None,
            full_text: None,
        }
    }

    pub(crate) fn parsed(
        text: String,
        start_delimiter: String,
        end_delimiter: String,
        span: Span,
        full_text: String,
    ) -> Self {
        Self {
            text,
            start_delimiter,
            end_delimiter,
            span: Some(span),
            full_text: Some(full_text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn start_delimiter(&self) -> &str {
        &self.start_delimiter
    }

    pub fn end_delimiter(&self) -> &str {
        &self.end_delimiter
    }

    pub fn set_end_delimiter(&mut self, end_delimiter: impl Into<String>) {
        self.end_delimiter = end_delimiter.into();
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn full_text(&self) -> Option<&str> {
        self.full_text.as_deref()
    }

    pub fn inner_string(&self) -> String {
        self.text.clone()
    }

    pub fn string(&self) -> String {
        format!("{}{}{}", self.start_delimiter, self.text, self.end_delimiter)
    }

    pub fn repr(&self) -> String {
        format!("Comment({})", escape(&self.text))
    }
}

/// A run of literal characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    text: String,
    span: Option<Span>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            span: None,
        }
    }

    pub(crate) fn parsed(text: String, span: Span) -> Self {
        Self {
            text,
            span: Some(span),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Text is its own literal; present only for parsed runs.
    pub fn full_text(&self) -> Option<&str> {
        self.span.map(|_| self.text.as_str())
    }

    pub(crate) fn into_parts(self) -> (String, Option<Span>) {
        (self.text, self.span)
    }

    pub fn inner_string(&self) -> String {
        self.text.clone()
    }

    pub fn string(&self) -> String {
        self.text.clone()
    }

    pub fn repr(&self) -> String {
        format!("t'{}'", escape(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn programmatic_comment_uses_percent_and_newline() {
        let comment = Comment::new("todo");
        assert_eq!(comment.string(), "%todo\n");
        assert_eq!(comment.inner_string(), "todo");
        assert!(comment.span().is_none());
        assert!(comment.full_text().is_none());
    }

    #[test]
    fn comment_edits_show_up_in_string() {
        let mut comment = Comment::new("todo");
        comment.set_text(" done");
        comment.set_end_delimiter("");
        assert_eq!(comment.string(), "% done");
    }

    #[test]
    fn comment_repr_escapes_whitespace() {
        assert_eq!(Comment::new("a\tb").repr(), "Comment(a\\tb)");
    }

    #[test]
    fn text_repr_and_string() {
        let text = Text::new("line\nnext");
        assert_eq!(text.string(), "line\nnext");
        assert_eq!(text.repr(), "t'line\\nnext'");
        assert!(text.full_text().is_none());
    }
}
