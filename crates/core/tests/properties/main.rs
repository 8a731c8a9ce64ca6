//! Property tests for swaps, braids, weaving and composition.

mod strategy;

use std::collections::HashMap;

use {
    braidweave_core::{
        asymm_diff, compute_swaps, simplify, weave_pattern, Braid, Diagram, MonoidalObject, Object,
        StringDiagram,
    },
    proptest::{prop_assert, prop_assert_eq, proptest},
    strategy::{covered_rows_strategy, diagram_strategy, permuted_rows_strategy},
};

fn multiset(row: &[Object]) -> HashMap<Object, usize> {
    let mut counts = HashMap::new();
    for o in row {
        *counts.entry(o.clone()).or_insert(0) += 1;
    }
    counts
}

fn joined(left: &MonoidalObject, right: &[Object]) -> Vec<Object> {
    left.iter().chain(right).cloned().collect()
}

proptest! {
    /// Applying the swaps in order turns `a` into `b`.
    #[test]
    fn test_swap_round_trip((a, b) in permuted_rows_strategy()) {
        let swaps = compute_swaps(&a, &b).expect("By construction a permutation");
        let mut row = a.clone();
        for swap in &swaps {
            let next = swap.apply(&row);
            prop_assert!(next.is_some(), "{:?} not applicable to {:?}", swap, row);
            row = next.unwrap_or_default();
        }
        prop_assert_eq!(row, b);
    }

    /// Cancelling adjacent inverse braids never changes where the wires end up.
    #[test]
    fn test_simplified_braids_reach_target((a, b) in permuted_rows_strategy()) {
        let swaps = compute_swaps(&a, &b).expect("By construction a permutation");
        let braids = simplify(swaps.into_iter().map(Braid::from).collect::<Vec<Braid>>());
        let row = braids.iter().fold(a, |mut row, braid| {
            row.swap(braid.swap.position, braid.swap.position + 1);
            row
        });
        prop_assert_eq!(row, b);
    }

    /// Weaving a row into one that already carries all its wires is a no-op.
    #[test]
    fn test_weave_idempotence((cloth, yarn) in covered_rows_strategy()) {
        prop_assert_eq!(weave_pattern(&cloth, &yarn), cloth);
    }
}

proptest! {
    /// `(f * g).domain` is `f.domain` plus the wires `g` needs that `f`
    /// doesn't produce; dually for the codomain. Compared as multisets.
    #[test]
    fn test_composition_boundary_law(f in diagram_strategy("f"), g in diagram_strategy("g")) {
        let fg = f.compose(&g).expect("Weaving makes any pair composable");

        let extra_in = asymm_diff(f.codomain().objects(), g.domain().objects());
        let extra_out = asymm_diff(g.domain().objects(), f.codomain().objects());

        prop_assert_eq!(
            multiset(fg.domain().objects()),
            multiset(&joined(&f.domain(), &extra_in))
        );
        prop_assert_eq!(
            multiset(fg.codomain().objects()),
            multiset(&joined(&g.codomain(), &extra_out))
        );
        prop_assert!(fg.as_composite().is_ok());
    }

    /// `(f * g) * h` and `f * (g * h)` carry the same wires on each end.
    #[test]
    fn test_associativity(
        f in diagram_strategy("f"),
        g in diagram_strategy("g"),
        h in diagram_strategy("h"),
    ) {
        let left = f
            .compose(&g)
            .and_then(|fg| fg.compose(&h))
            .expect("Weaving makes any chain composable");
        let right = g
            .compose(&h)
            .and_then(|gh| StringDiagram::from(f.clone()).compose(&gh))
            .expect("Weaving makes any chain composable");

        prop_assert_eq!(
            multiset(left.domain().objects()),
            multiset(right.domain().objects())
        );
        prop_assert_eq!(
            multiset(left.codomain().objects()),
            multiset(right.codomain().objects())
        );
    }
}

#[test]
fn test_self_composition_is_stable() {
    let f = Diagram::new(
        braidweave_core::Morphism::named(
            MonoidalObject::new(["a", "b"]),
            MonoidalObject::new(["b", "a"]),
            "f",
        )
        .expect("named"),
    );
    let ff = f.compose(&f).expect("composable");
    assert_eq!(ff.linear_syntax(), "f * τ(b, a) * f");
    assert_eq!(ff.domain(), MonoidalObject::new(["a", "b"]));
    assert_eq!(ff.codomain(), MonoidalObject::new(["b", "a"]));
}
