//! Phase 3: Determining Merge Order
//!
//! This is the third phase of the hmerge pipeline. Its main responsibility is
//! to linearize the dependency graph so that every fragment appears after all
//! loaded fragments it includes.
//!
//! ## Process
//!
//! 1.  **Depth-First Traversal**: Every fragment is visited in enumeration
//!     order. Visiting a fragment first visits its resolvable dependencies
//!     (also in enumeration order), then appends the fragment (post-order).
//!
//! 2.  **Explicit Stack**: The traversal keeps its own stack of frames instead
//!     of recursing, so very long include chains cannot exhaust the call stack.
//!
//! 3.  **Status Tracking**: Each fragment is `Unvisited`, `InProgress` (on the
//!     current traversal path) or `Resolved`. Reaching an `InProgress`
//!     fragment again means the path loops back on itself, and the whole run
//!     fails with [`Error::CycleDetected`]. A resolved fragment is never
//!     expanded twice, however many fragments include it.
//!
//! Includes naming a fragment that was not loaded add no ordering constraint
//! and are skipped.

use log::{debug, info};

use super::{DependencyGraph, ResolvedOrder};
use crate::error::{Error, Result};
use crate::fragment::FragmentSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Unvisited,
    InProgress,
    Resolved,
}

/// One fragment on the traversal path, with its resolvable dependencies and
/// a cursor to the next one to visit.
#[derive(Debug)]
struct Frame {
    node: usize,
    deps: Vec<usize>,
    next: usize,
}

struct Resolver<'a> {
    fragments: &'a FragmentSet,
    graph: &'a DependencyGraph,
    status: Vec<Status>,
    stack: Vec<Frame>,
    resolved: Vec<String>,
}

impl<'a> Resolver<'a> {
    fn new(fragments: &'a FragmentSet, graph: &'a DependencyGraph) -> Self {
        Self {
            fragments,
            graph,
            status: vec![Status::Unvisited; fragments.len()],
            stack: Vec::new(),
            resolved: Vec::with_capacity(fragments.len()),
        }
    }

    fn name(&self, index: usize) -> &'a str {
        self.fragments
            .at(index)
            .map(|f| f.name.as_str())
            .unwrap_or_default()
    }

    /// Loaded dependencies of `node`, in enumeration order
    fn resolvable_deps(&self, node: usize) -> Vec<usize> {
        let name = self.name(node);
        let mut deps: Vec<usize> = self
            .graph
            .dependencies(name)
            .filter_map(|dep| {
                let index = self.fragments.index_of(dep);
                if index.is_none() {
                    debug!("{} includes {}, which is not a loaded fragment; skipping", name, dep);
                }
                index
            })
            .collect();
        deps.sort_unstable();
        deps.dedup();
        deps
    }

    fn enter(&mut self, node: usize) {
        self.status[node] = Status::InProgress;
        let deps = self.resolvable_deps(node);
        self.stack.push(Frame {
            node,
            deps,
            next: 0,
        });
    }

    fn visit(&mut self, root: usize) -> Result<()> {
        if self.status[root] == Status::Resolved {
            return Ok(());
        }
        self.enter(root);

        while let Some(frame) = self.stack.last_mut() {
            let Some(&dep) = frame.deps.get(frame.next) else {
                let node = frame.node;
                self.stack.pop();
                self.status[node] = Status::Resolved;
                let name = self.name(node).to_string();
                self.resolved.push(name);
                continue;
            };
            frame.next += 1;

            match self.status[dep] {
                Status::Resolved => {}
                Status::InProgress => return Err(self.cycle_error(dep)),
                Status::Unvisited => self.enter(dep),
            }
        }

        Ok(())
    }

    /// Describe the cycle closed by reaching `node` again
    fn cycle_error(&self, node: usize) -> Error {
        let start = self
            .stack
            .iter()
            .position(|frame| frame.node == node)
            .unwrap_or_default();
        let mut path: Vec<&str> = self.stack[start..]
            .iter()
            .map(|frame| self.name(frame.node))
            .collect();
        path.push(self.name(node));

        Error::CycleDetected {
            fragment: self.name(node).to_string(),
            cycle: path.join(" -> "),
        }
    }
}

/// Execute Phase 3: Resolve the merge order for the loaded fragments
///
/// Returns every loaded fragment exactly once, dependencies first. Fragments
/// with no dependency relation between them keep their enumeration order
/// relative to each other wherever the traversal allows it.
pub fn execute(fragments: &FragmentSet, graph: &DependencyGraph) -> Result<ResolvedOrder> {
    let mut resolver = Resolver::new(fragments, graph);

    for root in 0..fragments.len() {
        resolver.visit(root)?;
    }

    info!("Resolved merge order for {} fragment(s)", resolver.resolved.len());
    Ok(ResolvedOrder::new(resolver.resolved))
}

#[cfg(test)]
mod tests {
    use super::execute;
    use crate::error::Error;
    use crate::fragment::{Fragment, FragmentSet};
    use crate::phases::DependencyGraph;

    fn fragments(specs: &[(&str, &[&str])]) -> FragmentSet {
        FragmentSet::from_fragments(specs.iter().map(|(name, deps)| {
            let content: String = deps
                .iter()
                .map(|d| format!("#include \"{}\"\n", d))
                .collect();
            Fragment::new(*name, content)
        }))
    }

    fn resolve(specs: &[(&str, &[&str])]) -> crate::error::Result<Vec<String>> {
        let set = fragments(specs);
        let graph = DependencyGraph::build(&set);
        execute(&set, &graph).map(|order| order.order)
    }

    #[test]
    fn test_phase3_simple_dependency() {
        // a.x includes b.x, so b.x must come first
        let order = resolve(&[("b.x", &[]), ("a.x", &["b.x"])]).unwrap();
        assert_eq!(order, vec!["b.x", "a.x"]);
    }

    #[test]
    fn test_phase3_chain() {
        let order = resolve(&[("a.x", &["b.x"]), ("b.x", &["c.x"]), ("c.x", &[])]).unwrap();
        assert_eq!(order, vec!["c.x", "b.x", "a.x"]);
    }

    #[test]
    fn test_phase3_diamond_emits_shared_dependency_once() {
        // a -> b, a -> c, b -> d, c -> d
        let order = resolve(&[
            ("a.x", &["b.x", "c.x"]),
            ("b.x", &["d.x"]),
            ("c.x", &["d.x"]),
            ("d.x", &[]),
        ])
        .unwrap();
        assert_eq!(order, vec!["d.x", "b.x", "c.x", "a.x"]);
    }

    #[test]
    fn test_phase3_independent_fragments_keep_enumeration_order() {
        let order = resolve(&[("c.x", &[]), ("a.x", &[]), ("b.x", &[])]).unwrap();
        assert_eq!(order, vec!["a.x", "b.x", "c.x"]);
    }

    #[test]
    fn test_phase3_three_cycle_is_rejected() {
        let err = resolve(&[("a.x", &["b.x"]), ("b.x", &["c.x"]), ("c.x", &["a.x"])]).unwrap_err();
        match err {
            Error::CycleDetected { fragment, cycle } => {
                assert!(["a.x", "b.x", "c.x"].contains(&fragment.as_str()));
                assert_eq!(cycle, "a.x -> b.x -> c.x -> a.x");
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_phase3_self_include_is_a_cycle() {
        let err = resolve(&[("a.x", &["a.x"])]).unwrap_err();
        match err {
            Error::CycleDetected { fragment, cycle } => {
                assert_eq!(fragment, "a.x");
                assert_eq!(cycle, "a.x -> a.x");
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_phase3_cycle_path_excludes_entry_prefix() {
        // a -> b -> c -> b: the cycle is b/c, a only leads into it
        let err = resolve(&[("a.x", &["b.x"]), ("b.x", &["c.x"]), ("c.x", &["b.x"])]).unwrap_err();
        match err {
            Error::CycleDetected { fragment, cycle } => {
                assert_eq!(fragment, "b.x");
                assert_eq!(cycle, "b.x -> c.x -> b.x");
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_phase3_unresolved_include_is_tolerated() {
        let order = resolve(&[("a.x", &["missing.x", "b.x"]), ("b.x", &["other/dir.x"])]).unwrap();
        assert_eq!(order, vec!["b.x", "a.x"]);
    }

    #[test]
    fn test_phase3_unresolved_include_is_logged_at_debug() {
        testing_logger::setup();
        resolve(&[("a.x", &["vendor.x"])]).unwrap();
        testing_logger::validate(|captured_logs| {
            assert!(captured_logs.iter().any(|entry| entry.level == log::Level::Debug
                && entry.body.contains("a.x")
                && entry.body.contains("vendor.x")));
        });
    }

    #[test]
    fn test_phase3_is_deterministic() {
        let specs: &[(&str, &[&str])] = &[
            ("e.x", &["a.x"]),
            ("d.x", &[]),
            ("c.x", &["d.x", "e.x"]),
            ("b.x", &["d.x"]),
            ("a.x", &[]),
        ];
        let first = resolve(specs).unwrap();
        let second = resolve(specs).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["a.x", "d.x", "b.x", "e.x", "c.x"]);
    }

    #[test]
    fn test_phase3_graph_without_fragment_entries() {
        // The graph may lack entries for some fragments; they resolve as leaves
        let set = fragments(&[("a.x", &[]), ("b.x", &[])]);
        let graph = DependencyGraph::from_edges(vec![("b.x", vec!["a.x"])]);
        let order = execute(&set, &graph).unwrap();
        assert_eq!(order.order, vec!["a.x", "b.x"]);
    }

    #[test]
    fn test_phase3_long_chain_does_not_overflow_stack() {
        let count = 50_000;
        let names: Vec<String> = (0..count).map(|i| format!("f{:06}.x", i)).collect();
        let set = FragmentSet::from_fragments(names.iter().map(|n| Fragment::new(n.clone(), "")));
        // f000000 -> f000001 -> ... -> f049999
        let graph = DependencyGraph::from_edges(
            names
                .iter()
                .zip(names.iter().skip(1))
                .map(|(from, to)| (from.clone(), vec![to.clone()])),
        );

        let order = execute(&set, &graph).unwrap();
        assert_eq!(order.len(), count);
        assert_eq!(order.order.first().map(String::as_str), Some("f049999.x"));
        assert_eq!(order.order.last().map(String::as_str), Some("f000000.x"));
    }
}
