//! End-to-end composition scenarios through the public API.

use braidweave_core::{
    compute_swaps, simplify, swap, Chain, CoreError, Diagram, Morphism, MonoidalObject, Object,
    StringDiagram,
};

fn named(dom: &[&str], cod: &[&str], name: &str) -> Diagram {
    let morphism = Morphism::named(
        MonoidalObject::new(dom.iter().copied()),
        MonoidalObject::new(cod.iter().copied()),
        name,
    )
    .expect("non-empty name");
    Diagram::new(morphism)
}

fn row(names: &[&str]) -> Vec<Object> {
    names.iter().map(|n| Object::new(*n)).collect()
}

#[test]
fn scenario_braided_composition() {
    let f = named(&["foo"], &["a", "b", "c", "d"], "f");
    let g = named(&["a", "b", "e"], &["bar"], "g");
    let fg = f.compose(&g).expect("composable");

    assert_eq!(fg.domain(), MonoidalObject::new(["foo", "e"]));
    assert_eq!(fg.codomain(), MonoidalObject::new(["bar", "c", "d"]));

    let names: Vec<&str> = fg.diagrams().iter().map(Diagram::name).collect();
    assert_eq!(
        names,
        [
            "f @ id_{e}",
            "id_{a} @ id_{b} @ id_{c} @ τ(d, e)",
            "id_{a} @ id_{b} @ τ(c, e) @ id_{d}",
            "g @ id_{c} @ id_{d}",
        ]
    );
    assert!(fg.diagrams()[1].morphism().components()[3].is_braid());
}

#[test]
fn scenario_swaps_then_simplify() {
    let swaps = compute_swaps(&row(&["a", "b", "c", "d", "e"]), &row(&["a", "b", "e", "c", "d"]))
        .expect("same wires");
    let pairs: Vec<(&str, &str)> = swaps
        .iter()
        .map(|s| (s.left.name(), s.right.name()))
        .collect();
    assert_eq!(pairs, [("c", "d"), ("d", "c"), ("d", "e"), ("c", "e")]);

    let braids: Vec<Morphism> = swaps.iter().map(|s| swap(&s.left, &s.right)).collect();
    let names: Vec<String> = simplify(braids).iter().map(Morphism::name).collect();
    assert_eq!(names, ["τ(d, e)", "τ(c, e)"]);
}

#[test]
fn scenario_braid_cancellation() {
    let (x, y) = (Object::new("x"), Object::new("y"));
    assert!(simplify(vec![swap(&x, &y), swap(&y, &x)]).is_empty());
    assert_eq!(simplify(vec![swap(&x, &y)]), vec![swap(&x, &y)]);
}

#[test]
fn scenario_swap_preconditions() {
    assert_eq!(
        compute_swaps(&row(&["a", "b"]), &row(&["a"])),
        Err(CoreError::SwapLengthMismatch { left: 2, right: 1 })
    );
    let err = compute_swaps(&row(&["a", "b"]), &row(&["a", "c"])).unwrap_err();
    assert!(err.to_string().contains("same wires"));
}

#[test]
fn scenario_chain_of_three() {
    let f = named(&["1", "2"], &["3", "4", "foo"], "f");
    let g = named(&["3", "4", "5"], &["6", "7"], "g");
    let h = named(&["6", "7", "8"], &["bar"], "h");

    let left = f.compose(&g).and_then(|fg| fg.compose(&h)).expect("composable");
    assert_eq!(left.domain(), MonoidalObject::new(["1", "2", "5", "8"]));
    assert_eq!(left.codomain(), MonoidalObject::new(["bar", "foo"]));

    let right = g
        .compose(&h)
        .and_then(|gh| StringDiagram::from(f.clone()).compose(&gh))
        .expect("composable");
    assert_eq!(right.domain(), left.domain());
    assert_eq!(right.codomain(), left.codomain());
}

#[test]
fn scenario_chains_compose_with_chains() {
    let f = named(&["1", "2"], &["3", "4", "foo"], "f");
    let g = named(&["3", "4", "5"], &["6", "7"], "g");
    let h = named(&["6", "7", "8"], &["bar"], "h");
    let i = named(&["bar", "foo"], &["9"], "i");

    let fg = f.compose(&g).expect("composable");
    let hi = h.compose(&i).expect("composable");
    let k = fg.compose(&hi).expect("composable");

    assert_eq!(k.domain(), MonoidalObject::new(["1", "2", "5", "8"]));
    assert_eq!(k.codomain(), MonoidalObject::new(["9"]));
    assert_eq!(k.len(), Chain::diagrams(&k).len());
}

#[test]
fn scenario_mismatched_chain_is_rejected() {
    let f = named(&["1", "2"], &["3", "4"], "f");
    let g = named(&["3", "4", "5"], &["6", "7"], "g");
    let err = StringDiagram::new(vec![f, g], None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot compose: codomain 3 @ 4 ≠ domain 3 @ 4 @ 5"
    );
}

#[test]
fn scenario_associativity_up_to_wire_order() {
    let f = named(&["a"], &["a", "a"], "f");
    let g = named(&["b"], &["a"], "g");
    let h = named(&["b"], &["b"], "h");

    let left = f
        .compose(&g)
        .and_then(|fg| fg.compose(&h))
        .expect("composable");
    let right = g
        .compose(&h)
        .and_then(|gh| StringDiagram::from(f.clone()).compose(&gh))
        .expect("composable");

    assert_eq!(left.codomain(), MonoidalObject::new(["b", "a", "a", "a"]));
    assert_eq!(right.codomain(), MonoidalObject::new(["a", "a", "b", "a"]));

    let sorted = |row: MonoidalObject| {
        let mut names: Vec<String> = row.iter().map(|o| o.name().to_string()).collect();
        names.sort();
        names
    };
    assert_eq!(sorted(left.domain()), sorted(right.domain()));
    assert_eq!(sorted(left.codomain()), sorted(right.codomain()));

    // crossings of two equal wires are never drawn
    assert!(!right.linear_syntax().contains("τ(b, b)"));
    assert!(right.as_composite().is_ok());
}
