//! Example source extraction
//!
//! Turns a demo tree into the markup text shown on documentation pages.
//! Extraction is a pure function of the tree.

use tapestry_core::documentation::{DemoNode, PropValue};

/// Renders a demo tree as indented markup text, without a trailing newline
pub fn extract(node: &DemoNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn write_node(out: &mut String, node: &DemoNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        DemoNode::Text(text) => {
            out.push_str(&indent);
            out.push_str(text);
            out.push('\n');
        }
        DemoNode::Element(element) => {
            out.push_str(&indent);
            out.push('<');
            out.push_str(&element.component);
            for (name, value) in &element.props {
                out.push(' ');
                out.push_str(name);
                match value {
                    PropValue::Str(s) => out.push_str(&format!("=\"{}\"", s)),
                    PropValue::Int(n) => out.push_str(&format!("={{{}}}", n)),
                    // Bare prop name is the shorthand for true
                    PropValue::Bool(true) => {}
                    PropValue::Bool(false) => out.push_str("={false}"),
                }
            }
            if element.children.is_empty() {
                out.push_str(" />\n");
            } else {
                out.push_str(">\n");
                for child in &element.children {
                    write_node(out, child, depth + 1);
                }
                out.push_str(&indent);
                out.push_str("</");
                out.push_str(&element.component);
                out.push_str(">\n");
            }
        }
    }
}
