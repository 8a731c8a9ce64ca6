use {
    braidweave_core::{Diagram, Morphism, MonoidalObject, Object},
    proptest::prelude::{Just, Strategy},
};

const WIRE_NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];
const MAX_WIRES: usize = 6;

pub(crate) fn wire_strategy() -> impl Strategy<Value = Object> {
    proptest::sample::select(WIRE_NAMES.to_vec()).prop_map(Object::new)
}

/// A row of wires drawn from a small alphabet, so names repeat often.
pub(crate) fn row_strategy(allow_empty: bool) -> impl Strategy<Value = Vec<Object>> {
    let min = usize::from(!allow_empty);
    proptest::collection::vec(wire_strategy(), min..MAX_WIRES)
}

/// A row and a permutation of it.
pub(crate) fn permuted_rows_strategy() -> impl Strategy<Value = (Vec<Object>, Vec<Object>)> {
    row_strategy(true).prop_flat_map(|row| (Just(row.clone()), Just(row).prop_shuffle()))
}

/// A row and a reordered selection of its wires.
pub(crate) fn covered_rows_strategy() -> impl Strategy<Value = (Vec<Object>, Vec<Object>)> {
    row_strategy(true).prop_flat_map(|row| {
        let len = row.len();
        let picked = proptest::sample::subsequence(row.clone(), 0..=len).prop_shuffle();
        (Just(row), picked)
    })
}

/// A single labelled box with random boundaries.
pub(crate) fn diagram_strategy(name: &'static str) -> impl Strategy<Value = Diagram> {
    (row_strategy(false), row_strategy(false)).prop_map(move |(domain, codomain)| {
        let morphism =
            Morphism::named(MonoidalObject::from(domain), MonoidalObject::from(codomain), name)
                .expect("By construction named");
        Diagram::new(morphism)
    })
}
