//! Renders merged sections as a Markdown outline.
//!
//! ```text
//! ## Rules
//! - always
//! - Setup
//!   - step 1
//!   - step 2
//!
//! ## Tooling
//! - use npm
//! ```

use crate::merge::MergedSections;
use crate::node::Node;

const HEADING_MARKER: &str = "## ";
const BULLET: &str = "- ";
const INDENT: &str = "  ";

/// Render every heading and its nodes, depth-first.
///
/// The result always ends with exactly one newline; an empty map renders as
/// `"\n"`.
pub fn render_outline(merged: &MergedSections) -> String {
    let mut lines: Vec<String> = Vec::new();
    for section in merged.iter() {
        lines.push(format!("{}{}", HEADING_MARKER, section.heading));
        for node in &section.nodes {
            render_node(&mut lines, node, 0);
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

fn render_node(lines: &mut Vec<String>, node: &Node, depth: usize) {
    lines.push(format!("{}{}{}", INDENT.repeat(depth), BULLET, node.text));
    for child in &node.children {
        render_node(lines, child, depth + 1);
    }
}
