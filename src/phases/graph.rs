//! Phase 2: Dependency Graph Construction
//!
//! Applies the include extractor to every loaded fragment and records the
//! result verbatim as that fragment's declared dependencies. Names that do not
//! correspond to a loaded fragment (system headers spelled with quotes, files
//! in other folders, files the selector excluded) stay in the graph as
//! declared edges. They are simply never expanded by the ordering phase.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::extraction::extract_includes;
use crate::fragment::FragmentSet;

/// Mapping from fragment name to the names it declares as dependencies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

/// A declared include with no matching loaded fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedInclude {
    /// Fragment that declares the include
    pub fragment: String,
    /// Name it includes
    pub include: String,
}

impl DependencyGraph {
    /// Build the graph from every fragment in the set.
    pub fn build(fragments: &FragmentSet) -> Self {
        let edges = fragments
            .iter()
            .map(|fragment| {
                let includes = extract_includes(&fragment.content);
                debug!("{} declares {} include(s)", fragment.name, includes.len());
                (fragment.name.clone(), includes)
            })
            .collect();
        Self { edges }
    }

    /// Build a graph from explicit edges.
    pub fn from_edges<I, N, D>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let edges = edges
            .into_iter()
            .map(|(name, deps)| (name.into(), deps.into_iter().map(Into::into).collect()))
            .collect();
        Self { edges }
    }

    /// Declared dependencies of a fragment (empty if unknown)
    pub fn dependencies(&self, name: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(name)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    /// Fragments that declare a dependency on `name`
    pub fn dependents<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |(_, deps)| deps.contains(name))
            .map(|(from, _)| from.as_str())
    }

    /// Declared includes that do not name a loaded fragment
    pub fn unresolved(&self, fragments: &FragmentSet) -> Vec<UnresolvedInclude> {
        self.edges
            .iter()
            .flat_map(|(from, deps)| {
                deps.iter()
                    .filter(|dep| !fragments.contains(dep))
                    .map(move |dep| UnresolvedInclude {
                        fragment: from.clone(),
                        include: dep.clone(),
                    })
            })
            .collect()
    }

    /// Loaded fragments no other loaded fragment includes
    pub fn roots<'a>(&'a self, fragments: &'a FragmentSet) -> Vec<&'a str> {
        fragments
            .names()
            .filter(|name| self.dependents(name).all(|d| d == *name))
            .collect()
    }

    /// Total number of declared edges, resolvable or not
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Number of fragments with an entry in the graph
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Execute Phase 2: Build the dependency graph for the loaded fragments
pub fn execute(fragments: &FragmentSet) -> DependencyGraph {
    DependencyGraph::build(fragments)
}
