//! # Graphviz DOT Renderer
//!
//! Renders a [`Topology`] as a DOT digraph for an external layout tool:
//!
//! ```text
//! xconnect graph | dot -Tpng > topology.png
//! ```

use crate::graph::{Node, NodeKind, Topology};

/// Render a topology as a Graphviz DOT digraph.
#[must_use]
pub fn render(topology: &Topology) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("digraph xconnect {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    fontname=\"Helvetica\";\n");
    out.push_str("    node [fontname=\"Helvetica\", fontsize=10];\n\n");

    for cluster in &topology.clusters {
        out.push_str(&format!(
            "    subgraph cluster_{} {{\n",
            sanitize(&cluster.name)
        ));
        out.push_str(&format!("        label=\"{}\";\n", escape(&cluster.name)));
        out.push_str("        style=rounded;\n");
        let bgcolor = cluster.bgcolor.as_deref().unwrap_or("#F5FDF2");
        out.push_str(&format!("        bgcolor=\"{}\";\n", escape(bgcolor)));
        for node in &cluster.nodes {
            out.push_str(&format!("        {}\n", render_node(node)));
        }
        out.push_str("    }\n\n");
    }

    for node in &topology.resources {
        out.push_str(&format!("    {}\n", render_node(node)));
    }
    if !topology.resources.is_empty() {
        out.push('\n');
    }

    for edge in &topology.edges {
        out.push_str(&format!(
            "    n_{} -> n_{} [arrowtail=dot, dir=both];\n",
            sanitize(&edge.from),
            sanitize(&edge.to)
        ));
    }

    if !topology.diagnostics.is_empty() {
        out.push('\n');
        for diagnostic in &topology.diagnostics {
            out.push_str(&format!("    // {}\n", diagnostic));
        }
    }

    out.push_str("}\n");
    out
}

fn render_node(node: &Node) -> String {
    let mut attrs = vec![format!("label=\"{}\"", escape(&node.label))];
    match node.kind {
        NodeKind::Listen => {
            let fill = node.fillcolor.as_deref().unwrap_or("#FFFFFF");
            attrs.push(format!("fillcolor=\"{}\"", escape(fill)));
            attrs.push("style=filled".to_string());
        }
        NodeKind::Connect => attrs.push("shape=plaintext".to_string()),
        NodeKind::Resource => attrs.push("shape=box".to_string()),
    }
    format!("n_{} [{}];", sanitize(&node.id), attrs.join(", "))
}

fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

// =============================================================================
// TESTS
// =============================================================================
