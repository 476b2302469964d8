//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the merged
//! section tree for a composition request in a hierarchical format.
//!
//! ## Functionality
//!
//! - **Section Tree Visualization**: Shows each heading in first-seen order,
//!   with its merged items and their children beneath it.
//! - **Depth Control**: Supports `--depth` flag to limit tree depth
//!
//! No template is read. This command is a safe, read-only operation that does
//! not modify any files.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};

use super::{Globals, RequestArgs};
use mdcompose::config::ActiveConfig;
use mdcompose::merge::MergedSections;
use mdcompose::node::Node;
use mdcompose::phases;
use mdcompose::store::DirectoryStore;
use mdcompose::suggestions;

/// Show the merged section tree for a composition request
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    /// Use 0 to show only the root, 1 to show headings, 2 for top-level items, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, globals: &Globals) -> Result<()> {
    let request = args.request.load()?;
    let store = DirectoryStore::new(&globals.root);
    let (active, sections) = phases::merge_request(&request, &store, args.request.load_options())
        .map_err(|e| suggestions::explain(e, &store, &globals.root))?;

    let tree_root = build_tree(&active, &sections, args.depth.unwrap_or(usize::MAX));
    print_tree(&tree_root).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    Ok(())
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// Build the display tree: the active configuration at the root, headings
/// below it, then merged nodes.
fn build_tree(active: &ActiveConfig, sections: &MergedSections, max_depth: usize) -> TreeNode {
    let label = format!(
        "{} (targets: {}; packs: {})",
        active.profile,
        join_or_none(&active.targets),
        join_or_none(&active.packs)
    );
    if max_depth == 0 {
        return TreeNode::leaf(label);
    }

    let children = sections
        .iter()
        .map(|section| TreeNode {
            label: format!("## {}", section.heading),
            children: if max_depth > 1 {
                section
                    .nodes
                    .iter()
                    .map(|node| build_node(node, max_depth, 2))
                    .collect()
            } else {
                Vec::new()
            },
        })
        .collect();
    TreeNode { label, children }
}

fn build_node(node: &Node, max_depth: usize, current_depth: usize) -> TreeNode {
    if current_depth >= max_depth || node.children.is_empty() {
        TreeNode::leaf(node.text.clone())
    } else {
        let children = node
            .children
            .iter()
            .map(|child| build_node(child, max_depth, current_depth + 1))
            .collect();
        TreeNode {
            label: node.text.clone(),
            children,
        }
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone, Debug)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: vec![],
        }
    }
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
