//! Property-based tests for the closure traversal.
//!
//! Random registries are generated as adjacency lists over `T0..Tn`; each
//! edge becomes a field, method or constructor reference. The traversal
//! result is checked against an independent reachability computation.

use std::collections::{BTreeSet, VecDeque};

use proptest::prelude::*;

use crate::closure::{ClosureBuilder, resolve_closure};
use crate::model::{
    ConstructorSignature, FieldDescriptor, MethodSignature, TypeKind, TypeShape,
};
use crate::normalize::PrimitivePolicy;
use crate::resolver::{Registry, TypeResolver};

fn type_name(index: usize) -> String {
    format!("gen.T{index}")
}

/// Adjacency lists for `n` types, 1 to 12 of them.
fn graph_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..=12).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n, 0..=4), n)
    })
}

fn build_registry(graph: &[Vec<usize>]) -> Registry {
    let mut registry = Registry::with_policy(PrimitivePolicy::Dropped);
    for (index, edges) in graph.iter().enumerate() {
        let mut shape = TypeShape::new(type_name(index), TypeKind::Concrete)
            .field(FieldDescriptor::new("count", "int"));
        for (slot, target) in edges.iter().enumerate() {
            let target = type_name(*target);
            shape = match slot % 3 {
                0 => shape.field(FieldDescriptor::new(format!("f{slot}"), target)),
                1 => shape.method(
                    MethodSignature::new(format!("m{slot}"), "void")
                        .with_parameter(format!("{target}[]")),
                ),
                _ => shape.constructor(ConstructorSignature::new([target])),
            };
        }
        registry.insert(shape).unwrap();
    }
    registry
}

/// Names reachable from `roots` without expanding `blocked` names.
fn reachable(graph: &[Vec<usize>], roots: &[usize], blocked: &BTreeSet<usize>) -> BTreeSet<String> {
    let mut visited: BTreeSet<usize> = roots.iter().copied().collect();
    let mut queue: VecDeque<usize> = roots.iter().copied().collect();
    while let Some(node) = queue.pop_front() {
        for &next in &graph[node] {
            if !blocked.contains(&next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    visited.into_iter().map(type_name).collect()
}

fn roots_strategy() -> impl Strategy<Value = (Vec<Vec<usize>>, Vec<usize>)> {
    graph_strategy().prop_flat_map(|graph| {
        let n = graph.len();
        (Just(graph), prop::collection::vec(0..n, 1..=3))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every reachable type appears exactly once, and nothing else does.
    #[test]
    fn prop_closure_is_complete_and_unique((graph, roots) in roots_strategy()) {
        let registry = build_registry(&graph);
        let names: Vec<String> = roots.iter().copied().map(type_name).collect();
        let document = resolve_closure(&registry, &names).unwrap();

        let identities: Vec<&str> = document.identities().collect();
        let unique: BTreeSet<String> = identities.iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(unique.len(), identities.len());
        prop_assert_eq!(unique, reachable(&graph, &roots, &BTreeSet::new()));
        prop_assert_eq!(document.roots(), names.as_slice());
    }

    /// No description lists itself among its referenced names.
    #[test]
    fn prop_no_self_reference((graph, roots) in roots_strategy()) {
        let registry = build_registry(&graph);
        let names: Vec<String> = roots.iter().copied().map(type_name).collect();
        let document = resolve_closure(&registry, &names).unwrap();

        for ty in document.types() {
            prop_assert!(!ty.referenced_names().iter().any(|name| name == ty.identity()));
            prop_assert!(!ty.referenced_names().iter().any(|name| name == "int"));
        }
    }

    /// Two runs over a stable resolver agree.
    #[test]
    fn prop_retraversal_is_idempotent((graph, roots) in roots_strategy()) {
        let registry = build_registry(&graph);
        let names: Vec<String> = roots.iter().copied().map(type_name).collect();
        let first = resolve_closure(&registry, &names).unwrap();
        let second = resolve_closure(&registry, &names).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Pre-resolved names never appear and are not expanded; a follow-up
    /// run seeded with them covers the rest.
    #[test]
    fn prop_pre_resolved_names_are_suppressed(
        (graph, roots) in roots_strategy(),
        blocked_mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let registry = build_registry(&graph);
        let blocked: BTreeSet<usize> = (0..graph.len())
            .filter(|i| blocked_mask[*i] && !roots.contains(i))
            .collect();
        let names: Vec<String> = roots.iter().copied().map(type_name).collect();

        let document = ClosureBuilder::new(&registry)
            .pre_resolved(blocked.iter().copied().map(type_name))
            .build(&names)
            .unwrap();

        let found: BTreeSet<String> = document.identities().map(str::to_string).collect();
        prop_assert_eq!(&found, &reachable(&graph, &roots, &blocked));

        // Resolving the suppressed names against what the first run found
        // completes the closure without overlap.
        let follow_up = ClosureBuilder::new(&registry)
            .pre_resolved(found.iter().cloned())
            .build(blocked.iter().copied().map(type_name))
            .unwrap();
        let rest: BTreeSet<String> = follow_up.identities().map(str::to_string).collect();
        prop_assert!(found.is_disjoint(&rest));

        let union: BTreeSet<String> = found.union(&rest).cloned().collect();
        let seeds: Vec<usize> = roots.iter().chain(blocked.iter()).copied().collect();
        prop_assert_eq!(union, reachable(&graph, &seeds, &BTreeSet::new()));
    }

    /// A missing type anywhere in the reachable set fails the whole run.
    #[test]
    fn prop_missing_type_fails_fast(
        (graph, roots) in roots_strategy(),
        victim in any::<prop::sample::Index>(),
    ) {
        let expected = reachable(&graph, &roots, &BTreeSet::new());
        let victim = expected.iter().nth(victim.index(expected.len())).unwrap().clone();

        let full = build_registry(&graph);
        let mut partial = Registry::with_policy(full.policy());
        for name in full.names().filter(|name| *name != victim) {
            partial.insert(full.shape(name).unwrap().clone()).unwrap();
        }

        let names: Vec<String> = roots.iter().copied().map(type_name).collect();
        let err = resolve_closure(&partial, &names).unwrap_err();
        prop_assert_eq!(err.unknown_type(), Some(victim.as_str()));
        prop_assert!(partial.resolve(&victim).is_err());
    }
}
