//! Indented debug rendering shared by all node kinds.
//!
//! ```text
//! Root(
//!     Command(foo: 
//!         Argument({
//!             t'bar',
//!         }),
//!     ),
//! )
//! ```

use super::Node;

const INDENT: &str = "    ";

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Renders children one per line at `level`, closing at `level - 1`.
///
/// Returns an empty string when there are no children so leaf-like nodes stay
/// on one line.
pub(crate) fn children_repr<'a>(children: impl IntoIterator<Item = &'a Node>, level: usize) -> String {
    let mut out = String::new();
    for child in children {
        out.push_str(&indent(level));
        out.push_str(&child.repr_at(level));
        out.push_str(",\n");
    }
    if out.is_empty() {
        return out;
    }
    format!("\n{out}{}", indent(level.saturating_sub(1)))
}

/// `Kind(<open><children><close>)`
pub(crate) fn delimited<'a>(
    kind: &str,
    level: usize,
    open: &str,
    children: impl IntoIterator<Item = &'a Node>,
    close: &str,
) -> String {
    format!("{kind}({open}{}{close})", children_repr(children, level + 1))
}

/// Escapes line breaks and tabs so leaf reprs stay on one line.
pub(crate) fn escape(text: &str) -> String {
    text.replace('\n', "\\n").replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Text;

    #[test]
    fn no_children_renders_nothing() {
        assert_eq!(children_repr(std::iter::empty(), 1), "");
    }

    #[test]
    fn children_are_indented_and_closed_one_level_up() {
        let nodes = [Node::from(Text::new("a")), Node::from(Text::new("b"))];
        assert_eq!(children_repr(&nodes, 2), "\n        t'a',\n        t'b',\n    ");
    }

    #[test]
    fn escape_line_breaks_and_tabs() {
        assert_eq!(escape("a\tb\nc"), "a\\tb\\nc");
    }
}
