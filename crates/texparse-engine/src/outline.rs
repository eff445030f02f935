//! Flattened, depth-annotated listing of a tree.

use serde::Serialize;

use crate::ast::{Node, NodeKind, Root, Span};

/// One node of a tree, listed in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Child indices from the root down to this node.
    pub path: Vec<usize>,
    pub depth: usize,
    pub kind: NodeKind,
    pub label: String,
    pub span: Option<Span>,
}

/// Lists every node of `root` in pre-order.
pub fn outline(root: &Root) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    let mut path = Vec::new();
    walk(root.children(), &mut path, &mut entries);
    entries
}

fn walk(children: &[Node], path: &mut Vec<usize>, out: &mut Vec<OutlineEntry>) {
    for (i, child) in children.iter().enumerate() {
        path.push(i);
        out.push(OutlineEntry {
            path: path.clone(),
            depth: path.len() - 1,
            kind: child.kind(),
            label: label(child),
            span: child.span(),
        });
        walk(child.children(), path, out);
        path.pop();
    }
}

/// Short human-readable label for a node.
pub fn label(node: &Node) -> String {
    match node {
        Node::Command(c) => format!("\\{}", c.name()),
        Node::Environment(e) => e.name().to_string(),
        Node::Argument(a) => format!("{}{}", a.start_delimiter(), a.end_delimiter()),
        Node::Comment(c) => format!("%{}", preview(c.text(), 40)),
        Node::Text(t) => preview(t.text(), 40),
    }
}

/// The node at `path`, as produced by [`outline`].
pub fn node_at<'a>(root: &'a Root, path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut node = root.children().get(*first)?;
    for i in rest {
        node = node.children().get(*i)?;
    }
    Some(node)
}

/// Single-line preview of `text`, cut after `max` characters.
pub fn preview(text: &str, max: usize) -> String {
    let flat = text.replace('\n', "\\n").replace('\t', "\\t");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut s: String = flat.chars().take(max).collect();
    s.push_str("...");
    s
}
