//! Property-based tests for dependency ordering.
//!
//! These tests use proptest to generate random include graphs and verify
//! that ordering invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::banner::RunInfo;
    use crate::error::Error;
    use crate::fragment::{Fragment, FragmentSet};
    use crate::phases::{ordering, write, DependencyGraph, ResolvedOrder};
    use chrono::NaiveDateTime;
    use proptest::prelude::*;

    /// A random acyclic graph: node `i` may only include nodes `j < i`.
    /// Names are shuffled so the enumeration order is unrelated to the
    /// topological one.
    #[derive(Debug, Clone)]
    struct Dag {
        names: Vec<String>,
        edges: Vec<Vec<usize>>,
    }

    fn dag_strategy() -> impl Strategy<Value = Dag> {
        (1usize..14).prop_flat_map(|n| {
            (
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                prop::collection::vec(prop::collection::vec(any::<bool>(), n), n),
                prop::collection::vec(any::<bool>(), n),
            )
                .prop_map(move |(perm, adjacency, external)| {
                    let names = perm.iter().map(|p| format!("f{:02}.x", p)).collect();
                    let edges = (0..n)
                        .map(|i| (0..i).filter(|&j| adjacency[i][j]).collect())
                        .collect();
                    let mut dag = Dag { names, edges };
                    // Sprinkle includes pointing outside the fragment set
                    for (i, ext) in external.into_iter().enumerate() {
                        if ext {
                            dag.edges[i].push(usize::MAX);
                        }
                    }
                    dag
                })
        })
    }

    fn to_fragments(names: &[String], edges: &[Vec<usize>]) -> FragmentSet {
        FragmentSet::from_fragments(names.iter().enumerate().map(|(i, name)| {
            let content: String = edges[i]
                .iter()
                .map(|&j| match names.get(j) {
                    Some(dep) => format!("#include \"{}\"\n", dep),
                    None => "#include \"external.h\"\n".to_string(),
                })
                .collect();
            Fragment::new(name.clone(), content)
        }))
    }

    fn resolve(fragments: &FragmentSet) -> crate::error::Result<ResolvedOrder> {
        let graph = DependencyGraph::build(fragments);
        ordering::execute(fragments, &graph)
    }

    proptest! {
        /// Property: every loaded dependency precedes its dependent
        #[test]
        fn dependencies_precede_dependents(dag in dag_strategy()) {
            let fragments = to_fragments(&dag.names, &dag.edges);
            let order = resolve(&fragments).unwrap();

            for (i, deps) in dag.edges.iter().enumerate() {
                let from = order.position(&dag.names[i]).unwrap();
                for &j in deps.iter().filter(|&&j| j < dag.names.len()) {
                    let to = order.position(&dag.names[j]).unwrap();
                    prop_assert!(
                        to < from,
                        "{} should precede {} in {:?}",
                        dag.names[j],
                        dag.names[i],
                        order.order
                    );
                }
            }
        }

        /// Property: the order contains every fragment exactly once
        #[test]
        fn order_is_total_and_duplicate_free(dag in dag_strategy()) {
            let fragments = to_fragments(&dag.names, &dag.edges);
            let order = resolve(&fragments).unwrap();

            let mut resolved = order.order.clone();
            resolved.sort();
            let mut expected = dag.names.clone();
            expected.sort();
            prop_assert_eq!(resolved, expected);
        }

        /// Property: resolving the same graph twice gives the same order
        #[test]
        fn order_is_deterministic(dag in dag_strategy()) {
            let fragments = to_fragments(&dag.names, &dag.edges);
            let first = resolve(&fragments).unwrap();
            let second = resolve(&fragments).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: closing a loop over two or more fragments is always detected
        #[test]
        fn cycles_are_detected(dag in dag_strategy().prop_filter("needs two nodes", |d| d.names.len() >= 2), len in 2usize..14) {
            let n = dag.names.len();
            let len = len.min(n);
            let mut edges = dag.edges.clone();
            // 0 -> 1 -> ... -> len-1 -> 0
            for i in 0..len {
                edges[i].push((i + 1) % len);
            }
            let fragments = to_fragments(&dag.names, &edges);

            match resolve(&fragments) {
                Err(Error::CycleDetected { fragment, cycle }) => {
                    prop_assert!(dag.names.contains(&fragment));
                    prop_assert!(cycle.starts_with(fragment.as_str()));
                    prop_assert!(cycle.ends_with(fragment.as_str()));
                }
                other => prop_assert!(false, "expected a cycle error, got {:?}", other),
            }
        }

        /// Property: the writer emits each fragment once even if the order repeats names
        #[test]
        fn writer_deduplicates_repeated_names(dag in dag_strategy(), repeats in prop::collection::vec(0usize..14, 0..10)) {
            let fragments = to_fragments(&dag.names, &dag.edges);
            let mut order = resolve(&fragments).unwrap().order;
            for r in repeats {
                let name = order[r % order.len()].clone();
                order.push(name);
            }

            let info = RunInfo {
                output: "out.x".to_string(),
                author: "prop".to_string(),
                timestamp: NaiveDateTime::default(),
                platform: "Linux".to_string(),
                folder: "src".to_string(),
            };
            let output = write::render(&ResolvedOrder::new(order), &fragments, &info);

            prop_assert_eq!(output.merged, dag.names.len());
            for name in &dag.names {
                let marker = write::section_marker(name);
                prop_assert_eq!(output.text.matches(marker.as_str()).count(), 1);
            }
        }
    }
}
