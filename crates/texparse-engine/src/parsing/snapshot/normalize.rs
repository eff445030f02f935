use serde::Serialize;

use crate::{
    ast::Root,
    outline::{outline, preview},
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub length: usize,
    pub lines: usize,
    pub nodes: Vec<NodeSnap>,
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NodeSnap {
    pub depth: usize,
    pub kind: String,
    pub label: String,
    pub span: Option<(usize, usize)>,
    pub text: String,
}

pub fn normalize(root: &Root) -> Snap {
    let nodes = outline(root)
        .into_iter()
        .map(|entry| {
            let text = crate::outline::node_at(root, &entry.path)
                .map(|node| preview(&node.string(), 60))
                .unwrap_or_default();
            NodeSnap {
                depth: entry.depth,
                kind: entry.kind.to_string(),
                label: entry.label,
                span: entry.span.map(|s| (s.start, s.end)),
                text,
            }
        })
        .collect();

    Snap {
        length: root.length(),
        lines: root.line_count(),
        nodes,
        diagnostics: root.diagnostics().iter().map(ToString::to_string).collect(),
    }
}
