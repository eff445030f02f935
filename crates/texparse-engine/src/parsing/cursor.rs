use crate::ast::{Node, Span, Text};

use super::{kinds::CommandSyntax, pending::Pending};

/// One step of input: a character, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Input {
    Char(char),
    #[default]
    End,
}

impl Input {
    pub fn char(self) -> Option<char> {
        match self {
            Input::Char(c) => Some(c),
            Input::End => None,
        }
    }

    pub fn is(self, c: char) -> bool {
        self == Input::Char(c)
    }

    /// Byte length in the source; the sentinel occupies none.
    pub fn len_utf8(self) -> usize {
        self.char().map_or(0, char::len_utf8)
    }
}

/// The literal text run currently being accumulated.
///
/// Its start is fixed by the first character pushed, or by the text it was
/// seeded with.
#[derive(Debug, Default)]
pub struct PendingText {
    start: Option<(usize, usize)>,
    text: String,
}

impl PendingText {
    pub fn push(&mut self, c: char, position: usize, line: usize) {
        if self.start.is_none() {
            self.start = Some((position, line));
        }
        self.text.push(c);
    }

    /// Seeds an empty accumulator with text moved out of a finished command.
    pub fn seed(&mut self, text: Text) {
        let (text, span) = text.into_parts();
        self.start = span.map(|s| (s.start, s.start_line));
        self.text = text;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Converts the run into a text node ending at `end`, if it holds anything.
    pub fn into_node(self, end: usize, end_line: usize) -> Option<Node> {
        if self.text.is_empty() {
            return None;
        }
        let (start, start_line) = self
            .start
            .unwrap_or((end.saturating_sub(self.text.len()), end_line));
        let span = Span {
            start,
            end,
            start_line,
            end_line,
        };
        Some(Text::parsed(self.text, span).into())
    }
}

/// All mutable parse state for one input.
#[derive(Debug, Default)]
pub struct SourceCursor {
    /// Byte offset of the current character.
    pub position: usize,
    /// Zero-based line of the current character.
    pub line: usize,
    /// Every character seen so far, including the current one.
    pub raw: String,
    pub current: Input,
    /// The character before `current`.
    pub previous: Option<char>,
    /// Open constructs, innermost last.
    pub open: Vec<Pending>,
    /// Completed nodes with no open ancestor.
    pub finished: Vec<Node>,
    pub text: PendingText,
}

impl SourceCursor {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Records `input` as the current character.
    pub fn begin(&mut self, input: Input) {
        self.previous = self.current.char();
        self.current = input;
        if let Input::Char(c) = input {
            self.raw.push(c);
        }
    }

    /// Moves past the current character.
    pub fn advance(&mut self) {
        self.position += self.current.len_utf8();
        if self.current.is('\n') {
            self.line += 1;
        }
    }

    /// Whether the current character may open or close a construct.
    ///
    /// Only the immediately preceding character is checked, so `\\%` does not
    /// open a comment.
    pub fn is_escapable(&self) -> bool {
        self.previous != Some(CommandSyntax::ESCAPE)
    }

    /// Literal source between two byte offsets.
    pub fn literal(&self, start: usize, end: usize) -> &str {
        self.raw.get(start..end).unwrap_or_default()
    }

    pub fn top(&self) -> Option<&Pending> {
        self.open.last()
    }

    /// End offset of the current character if it is consumed.
    pub fn consumed_end(&self) -> usize {
        self.position + self.current.len_utf8()
    }
}
