//! # Graph Command Implementation
//!
//! This module implements the `graph` subcommand, which displays the include
//! dependency tree of a fragment folder.
//!
//! - **Roots**: One tree is printed per root fragment, i.e. a fragment no
//!   other fragment includes.
//! - **External includes**: Names that are not loaded fragments appear as
//!   leaves marked `(external)`.
//! - **Shared fragments**: A fragment reached a second time is shown once
//!   more, marked `(*)`, without repeating its subtree.
//! - **Depth Control**: `--depth` limits how deep each tree is printed.
//!
//! The graph is resolved first, so a cyclic folder is reported as an error
//! instead of being drawn. This command is a safe, read-only operation that
//! does not modify any files.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::collections::HashSet;

use super::SourceArgs;
use hmerge::output::OutputConfig;
use hmerge::phases::orchestrator::{self, MergePlan};

/// Display the include dependency tree
#[derive(Args, Debug)]
pub struct GraphArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree. Use 0 to show only the root
    /// fragments.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `graph` command.
pub fn execute(args: GraphArgs, out: &OutputConfig) -> Result<()> {
    let settings = args.source.settings(None, None)?;
    let plan = orchestrator::plan(&settings.input, &settings.selector)?;

    println!(
        "{} {}",
        out.emoji("🌳", "[GRAPH]"),
        out.heading(&format!(
            "Include graph for: {} ({})",
            settings.input.display(),
            settings.selector
        ))
    );

    let max_depth = args.depth.unwrap_or(usize::MAX);
    let mut shown = HashSet::new();
    for root in plan.graph.roots(&plan.fragments) {
        let tree = build_tree_node(&plan, root, max_depth, 0, &mut shown, out);
        print_tree(&tree).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    }

    Ok(())
}

/// Build a tree node for a fragment and the fragments it includes
fn build_tree_node(
    plan: &MergePlan,
    name: &str,
    max_depth: usize,
    current_depth: usize,
    shown: &mut HashSet<String>,
    out: &OutputConfig,
) -> TreeNode {
    if !plan.fragments.contains(name) {
        return TreeNode::leaf(format!("{} {}", name, out.dim("(external)")));
    }
    if !shown.insert(name.to_string()) {
        return TreeNode::leaf(format!("{} {}", name, out.dim("(*)")));
    }
    if current_depth >= max_depth {
        return TreeNode::leaf(name.to_string());
    }

    let children = plan
        .graph
        .dependencies(name)
        .map(|dep| build_tree_node(plan, dep, max_depth, current_depth + 1, shown, out))
        .collect();

    TreeNode {
        label: name.to_string(),
        children,
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
