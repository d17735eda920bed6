//! Orchestrator for a complete merge run
//!
//! This module coordinates all phases to provide a clean API for the
//! commands. [`plan`] runs Phases 1-3 (load, graph, order) and is shared by
//! the read-only commands. [`execute_merge`] adds Phase 4 and writes the
//! artifact.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{phase1, phase2, phase3, phase4, DependencyGraph, ResolvedOrder, UnresolvedInclude};
use crate::banner::RunInfo;
use crate::config::MergeSettings;
use crate::error::Result;
use crate::fragment::FragmentSet;
use crate::selector::Selector;

/// Everything known about a folder once its order is resolved
#[derive(Debug, Clone)]
pub struct MergePlan {
    pub fragments: FragmentSet,
    pub graph: DependencyGraph,
    pub order: ResolvedOrder,
}

impl MergePlan {
    /// Declared includes that name no loaded fragment
    pub fn unresolved(&self) -> Vec<UnresolvedInclude> {
        self.graph.unresolved(&self.fragments)
    }
}

/// Outcome of a successful merge
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Order fragments were written in
    pub order: ResolvedOrder,
    /// Number of fragments written
    pub merged: usize,
    /// Metadata written to the banner
    pub info: RunInfo,
    /// Where the artifact was written
    pub output: PathBuf,
}

/// Run Phases 1-3: load fragments, build the graph and resolve the order
///
/// A cycle aborts here, before anything could be written.
pub fn plan(folder: &Path, selector: &Selector) -> Result<MergePlan> {
    // Phase 1: Discovery
    let fragments = phase1::execute(folder, selector)?;

    // Phase 2: Graph Construction
    let graph = phase2::execute(&fragments);
    debug!(
        "Dependency graph has {} declared include(s)",
        graph.edge_count()
    );

    // Phase 3: Ordering
    let order = phase3::execute(&fragments, &graph)?;

    Ok(MergePlan {
        fragments,
        graph,
        order,
    })
}

/// Execute a complete merge (Phases 1-4) as described by `settings`
pub fn execute_merge(settings: &MergeSettings) -> Result<MergeReport> {
    let output = settings.require_output()?.to_path_buf();
    let plan = plan(&settings.input, &settings.selector)?;

    let info = RunInfo::collect(&output, &settings.input, settings.author.as_deref());

    // Phase 4: Writing
    let merged = phase4::execute(&plan.order, &plan.fragments, &info, &output)?;
    info!("Merged {} fragment(s) into {}", merged, output.display());

    Ok(MergeReport {
        order: plan.order,
        merged,
        info,
        output,
    })
}

/// Render the merge described by `settings` without writing it
pub fn render_merge(settings: &MergeSettings) -> Result<phase4::MergeOutput> {
    let output = settings.require_output()?;
    let plan = plan(&settings.input, &settings.selector)?;
    let info = RunInfo::collect(output, &settings.input, settings.author.as_deref());
    Ok(phase4::render(&plan.order, &plan.fragments, &info))
}
