use crate::ast::{Node, Root, Span};

/// Asserts structural invariants of a freshly parsed tree.
///
/// - every span lies within the source and has `start <= end`
/// - child spans lie within their parent's span, in order, without overlap
/// - a node's literal text is the source under its span
/// - a node's serialization equals its literal text
/// - the root serializes back to the source when nothing was left open
pub fn check(root: &Root) {
    let source = root.full_text().unwrap_or_default();
    let n = source.len();
    let bounds = Span {
        start: 0,
        end: n,
        start_line: 0,
        end_line: root.line_count(),
    };
    check_children(source, bounds, root.children());

    if root.diagnostics().is_empty() {
        assert_eq!(root.string(), source, "root does not round-trip");
    }
}

fn check_children(source: &str, parent: Span, children: &[Node]) {
    let mut previous_end = parent.start;
    for child in children {
        let Some(span) = child.span() else {
            panic!("parsed node without span: {}", child.repr());
        };
        assert!(
            span.start <= span.end && span.end <= source.len(),
            "span out of bounds: {span:?} (source len: {})",
            source.len()
        );
        assert!(
            parent.contains(span),
            "child span {span:?} not contained in parent {parent:?}"
        );
        assert!(
            span.start >= previous_end,
            "child span {span:?} overlaps previous sibling ending at {previous_end}"
        );
        assert!(
            span.start_line <= span.end_line,
            "lines out of order: {span:?}"
        );
        previous_end = span.end;

        let literal = source.get(span.start..span.end).unwrap_or_default();
        if let Some(full) = child.full_text() {
            assert_eq!(full, literal, "literal text differs from source span");
        }
        assert_eq!(
            child.string(),
            literal,
            "serialization differs from source for {}",
            child.repr()
        );

        if let Node::Environment(env) = child {
            let body = Span {
                start: span.start + env.start_delimiter().len(),
                end: span.end.saturating_sub(env.end_delimiter().len()),
                ..span
            };
            check_children(source, body, env.children());
        } else {
            check_children(source, span, child.children());
        }
    }
}
