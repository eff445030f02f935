/// A byte range `[start, end)` into the parsed source, with the lines it
/// starts and ends on.
///
/// Only parsed nodes carry a span; nodes built programmatically have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, serde::Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
    /// Zero-based line of the first byte.
    pub start_line: usize,
    /// Zero-based line the node was closed on.
    pub end_line: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span {
            start,
            end,
            ..Span::default()
        }
    }

    #[test]
    fn len_and_empty() {
        assert_eq!(span(3, 8).len(), 5);
        assert!(!span(3, 8).is_empty());
        assert!(span(4, 4).is_empty());
    }

    #[test]
    fn inverted_span_is_empty() {
        assert_eq!(span(8, 3).len(), 0);
        assert!(span(8, 3).is_empty());
    }

    #[test]
    fn containment() {
        assert!(span(0, 10).contains(span(2, 5)));
        assert!(span(0, 10).contains(span(0, 10)));
        assert!(!span(2, 5).contains(span(0, 10)));
        assert!(!span(0, 5).contains(span(4, 6)));
    }
}
