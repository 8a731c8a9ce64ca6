//! Composing diagrams whose boundaries don't line up.
//!
//! Run with: RUST_LOG=debug cargo run --example compose_diagrams
//!
//! This example demonstrates:
//! - Weaving missing wires onto both diagrams
//! - Braids inserted to reorder shared wires
//! - Associative composition of whole chains

use braidweave_core::{CoreError, Diagram, Morphism, MonoidalObject, StringDiagram};
use tracing_subscriber::EnvFilter;

fn named(dom: &[&str], cod: &[&str], name: &str) -> Result<Diagram, CoreError> {
    let morphism = Morphism::named(
        MonoidalObject::new(dom.iter().copied()),
        MonoidalObject::new(cod.iter().copied()),
        name,
    )?;
    Ok(Diagram::new(morphism))
}

fn print_chain(title: &str, chain: &StringDiagram) {
    println!("{title}");
    for diagram in chain.diagrams() {
        println!("  {}", diagram.linear_syntax());
    }
    println!("  domain:   {}", chain.domain());
    println!("  codomain: {}\n", chain.codomain());
}

fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // -------------------------------------------------------------------------
    // Weaving and braiding
    // -------------------------------------------------------------------------

    let f = named(&["foo"], &["a", "b", "c", "d"], "f")?;
    let g = named(&["a", "b", "e"], &["bar"], "g")?;
    print_chain("f * g", &f.compose(&g)?);

    // -------------------------------------------------------------------------
    // Associativity
    // -------------------------------------------------------------------------

    let f = named(&["1", "2"], &["3", "4", "foo"], "f")?;
    let g = named(&["3", "4", "5"], &["6", "7"], "g")?;
    let h = named(&["6", "7", "8"], &["bar"], "h")?;

    let left = f.compose(&g)?.compose(&h)?;
    let right = StringDiagram::from(f).compose(&g.compose(&h)?)?;
    print_chain("(f * g) * h", &left);
    print_chain("f * (g * h)", &right);

    println!("slices as JSON:\n{}", left.to_json()?);
    Ok(())
}
