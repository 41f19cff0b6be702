//! Chain operation integration tests.
//!
//! Builds small scope hierarchies and checks lookup, shadowing and the
//! isolation guarantees of isolate / rebase / flatten.

use scoto_chain::{child, create, definitions, depth, flatten, isolate, parent, rebase, walk};
use scoto_core::{OwnEntries, Scope, ScopeError, Value};

/// Helper: build a three-generation chain g1 -> g2 -> g3 with one key each.
fn three_generations() -> (Scope, Scope, Scope) {
    let g1 = create();
    let g2 = child(&g1).unwrap();
    let g3 = child(&g2).unwrap();
    g1.set("a", 1);
    g2.set("b", 2);
    g3.set("c", 3);
    (g1, g2, g3)
}

// ============================================================================
// Create / Child / Parent
// ============================================================================

#[test]
fn test_parent_of_create_is_none() {
    assert_eq!(parent(&create()), Ok(None));
}

#[test]
fn test_unset_key_is_absent() {
    let (_, _, g3) = three_generations();
    assert_eq!(g3.get("nowhere"), None);
    assert!(!g3.has("nowhere"));
}

#[test]
fn test_fan_out_shares_parent() {
    let root = create();
    let left = child(&root).unwrap();
    let right = child(&root).unwrap();

    root.set("shared", "yes");
    assert_eq!(left.get("shared"), Some(Value::from("yes")));
    assert_eq!(right.get("shared"), Some(Value::from("yes")));

    left.set("shared", "left");
    assert_eq!(right.get("shared"), Some(Value::from("yes")));
}

#[test]
fn test_child_of_scope_value() {
    let root = create();
    root.set("x", 1);
    let kid = child(&Value::from(&root)).unwrap();
    assert_eq!(kid.get("x"), Some(Value::from(1)));
}

#[test]
fn test_child_of_primitive_fails() {
    assert_eq!(
        child(&Value::from(42)),
        Err(ScopeError::InvalidScope { found: "number" })
    );
}

// ============================================================================
// Shadowing
// ============================================================================

#[test]
fn test_shadow_and_restore() {
    let root = create();
    let kid = child(&root).unwrap();
    root.set("k", "v1");

    kid.set("k", "v2");
    assert_eq!(kid.get("k"), Some(Value::from("v2")));
    assert_eq!(root.get("k"), Some(Value::from("v1")));

    kid.delete("k");
    assert_eq!(kid.get("k"), Some(Value::from("v1")));
}

// ============================================================================
// Walk
// ============================================================================

#[test]
fn test_walk_is_reusable() {
    let (g1, g2, g3) = three_generations();
    let chain = walk(&g3).unwrap();

    let first: Vec<_> = chain.iter().map(|s| s.own_len()).collect();
    let second: Vec<_> = chain.iter().map(|s| s.own_len()).collect();
    assert_eq!(first, second);
    assert_eq!(chain, vec![g3, g2, g1]);
}

#[test]
fn test_depth_counts_ancestors() {
    let (g1, g2, g3) = three_generations();
    assert_eq!(depth(&g1), Ok(0));
    assert_eq!(depth(&g2), Ok(1));
    assert_eq!(depth(&g3), Ok(2));
}

#[test]
fn test_definitions_identify_shadowing() {
    let (g1, g2, g3) = three_generations();
    g3.set("a", 10);

    let defs = definitions(&g3, "a").unwrap();
    assert_eq!(defs, vec![g3.clone(), g1]);
    assert_eq!(definitions(&g3, "b").unwrap(), vec![g2]);
}

// ============================================================================
// Isolate
// ============================================================================

#[test]
fn test_isolate_keeps_only_own() {
    let root = create();
    root.set("k", 1);
    let kid = child(&root).unwrap();
    kid.set("j", 2);

    let isolated = isolate(&kid).unwrap();
    assert!(!isolated.has("k"));
    assert_eq!(isolated.get("j"), Some(Value::from(2)));
    assert_ne!(isolated, kid);

    root.set("k", 5);
    assert!(!isolated.has("k"));
}

#[test]
fn test_isolate_copies_values() {
    let kid = child(&create()).unwrap();
    kid.set("bar", 2);
    let isolated = isolate(&kid).unwrap();

    kid.set("bar", 3);
    assert_eq!(isolated.get("bar"), Some(Value::from(2)));
}

#[test]
fn test_isolate_is_shallow() {
    let scope = create();
    let list = Value::array([Value::from(1), Value::from(2)]);
    scope.set("list", list.clone());

    let isolated = isolate(&scope).unwrap();
    if let Value::Array(items) = &list {
        items.borrow_mut().push(Value::from(3));
    }
    assert_eq!(isolated.get("list"), Some(list));
}

#[test]
fn test_isolate_is_idempotent() {
    let (_, _, g3) = three_generations();
    g3.set("d", 4);

    let once = isolate(&g3).unwrap();
    let twice = isolate(&once).unwrap();
    assert_eq!(once.own_entries(), twice.own_entries());
    assert_ne!(once, twice);
}

#[test]
fn test_isolate_root_is_value_equal_copy() {
    let root = create();
    root.set("x", 1);
    let copy = isolate(&root).unwrap();
    assert_eq!(copy.own_entries(), root.own_entries());
    assert_ne!(copy, root);
}

// ============================================================================
// Rebase
// ============================================================================

#[test]
fn test_rebase_swaps_ancestry() {
    let r1 = create();
    r1.set("from", "r1");
    let r2 = create();
    r2.set("from", "r2");

    let kid = child(&r1).unwrap();
    kid.set("own", true);

    let rebased = rebase(&kid, &r2).unwrap();
    assert_eq!(rebased.own_entries(), kid.own_entries());
    assert_eq!(parent(&rebased), Ok(Some(r2.clone())));
    assert_ne!(parent(&rebased), parent(&kid));
    assert_eq!(rebased.get("from"), Some(Value::from("r2")));
}

#[test]
fn test_rebase_to_same_parent_is_new_scope() {
    let root = create();
    let kid = child(&root).unwrap();
    kid.set("x", 1);

    let rebased = rebase(&kid, &root).unwrap();
    assert_ne!(rebased, kid);
    assert_eq!(parent(&rebased), parent(&kid));
}

#[test]
fn test_rebase_sees_later_parent_writes() {
    let root = create();
    let other = create();
    let rebased = rebase(&child(&root).unwrap(), &other).unwrap();

    other.set("late", 1);
    root.set("late", 2);
    assert_eq!(rebased.get("late"), Some(Value::from(1)));
}

// ============================================================================
// Flatten
// ============================================================================

#[test]
fn test_flatten_merges_hierarchy() {
    let (_, _, g3) = three_generations();
    let flat = flatten(&g3).unwrap();

    assert!(flat.is_root());
    assert_eq!(flat.get_own("a"), Some(Value::from(1)));
    assert_eq!(flat.get_own("b"), Some(Value::from(2)));
    assert_eq!(flat.get_own("c"), Some(Value::from(3)));
}

#[test]
fn test_flatten_not_affected_by_source() {
    let (g1, g2, g3) = three_generations();
    let flat = flatten(&g3).unwrap();

    g1.set("a", 4);
    g2.set("b", 5);
    g3.set("c", 6);

    assert_eq!(flat.get("a"), Some(Value::from(1)));
    assert_eq!(flat.get("b"), Some(Value::from(2)));
    assert_eq!(flat.get("c"), Some(Value::from(3)));
}

#[test]
fn test_flatten_does_not_affect_source() {
    let (_, _, g3) = three_generations();
    let flat = flatten(&g3).unwrap();

    flat.set("a", 7);
    flat.set("b", 8);
    flat.set("c", 9);

    assert_eq!(g3.get("a"), Some(Value::from(1)));
    assert_eq!(g3.get("b"), Some(Value::from(2)));
    assert_eq!(g3.get("c"), Some(Value::from(3)));
}

#[test]
fn test_flatten_root_equals_isolate_root() {
    let root = create();
    root.set("x", 1);
    root.set("y", "two");
    assert_eq!(
        flatten(&root).unwrap().own_entries(),
        isolate(&root).unwrap().own_entries()
    );
}

#[test]
fn test_flatten_resolved_view() {
    let (_, _, g3) = three_generations();
    g3.set("a", "near");
    let flat = flatten(&g3).unwrap();

    let expected: OwnEntries = [
        ("a", Value::from("near")),
        ("b", Value::from(2)),
        ("c", Value::from(3)),
    ]
    .into_iter()
    .collect();
    assert_eq!(flat.own_entries(), expected);
}

// ============================================================================
// Deep Chains
// ============================================================================

const DEEP: usize = 100_000;

/// Helper: a chain `DEEP` scopes below a root that owns `origin`.
fn deep_chain() -> (Scope, Scope) {
    let root = create();
    root.set("origin", "root");
    let mut leaf = root.clone();
    for _ in 0..DEEP {
        leaf = child(&leaf).unwrap();
    }
    (root, leaf)
}

#[test]
fn test_deep_chain_operations() {
    let (root, leaf) = deep_chain();
    leaf.set("tip", 1);

    assert_eq!(depth(&leaf), Ok(DEEP));
    let chain = walk(&leaf).unwrap();
    assert_eq!(chain.len(), DEEP + 1);
    assert_eq!(chain.last(), Some(&root));
    drop(chain);

    assert_eq!(leaf.get("origin"), Some(Value::from("root")));
    assert!(leaf.has("origin"));

    let flat = flatten(&leaf).unwrap();
    assert_eq!(flat.own_len(), 2);
    assert_eq!(flat.get_own("origin"), Some(Value::from("root")));
    assert_eq!(flat.get_own("tip"), Some(Value::from(1)));
}

#[test]
fn test_deep_chain_drops_without_overflow() {
    let (root, leaf) = deep_chain();
    let isolated = isolate(&leaf).unwrap();

    drop(leaf);
    // The root is still held here, so only the intermediate scopes are freed.
    assert_eq!(root.get("origin"), Some(Value::from("root")));
    assert!(isolated.is_root());

    let (root, leaf) = deep_chain();
    drop(root);
    drop(leaf);
}
