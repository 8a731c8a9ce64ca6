//! # Braidweave Core - String Diagrams in Symmetric Monoidal Categories
//!
//! This crate models boxes-and-wires diagrams and composes them even when
//! their boundaries don't line up:
//!
//! - **Objects**: wires and ordered rows of wires
//! - **Morphisms**: identities, labelled boxes, and boxes side by side
//! - **Weaving**: threading missing wires onto a diagram as identities
//! - **Swaps & Braids**: reordering wires with adjacent transpositions
//! - **Diagrams**: composition `f * g` producing a chain of layers
//! - **String Diagrams**: associative composition of whole chains
//!
//! ## Example
//!
//! ```rust
//! use braidweave_core::{Diagram, Morphism, MonoidalObject};
//!
//! let f = Morphism::named(MonoidalObject::new(["foo"]), MonoidalObject::new(["a", "b", "c", "d"]), "f")?;
//! let g = Morphism::named(MonoidalObject::new(["a", "b", "e"]), MonoidalObject::new(["bar"]), "g")?;
//!
//! let fg = Diagram::new(f).compose(&Diagram::new(g))?;
//! assert_eq!(fg.domain(), MonoidalObject::new(["foo", "e"]));
//! assert_eq!(fg.codomain(), MonoidalObject::new(["bar", "c", "d"]));
//! # Ok::<(), braidweave_core::CoreError>(())
//! ```

pub mod braid;
pub mod diagram;
pub mod error;
pub mod morphism;
pub mod object;
pub mod string_diagram;
pub mod swaps;
pub mod weave;

pub use braid::{add_braids, is_braid_identity, simplify, swap, Braid, BraidIdentity};
pub use diagram::{wires, Diagram, Slice};
pub use error::CoreError;
pub use morphism::{
    Composite, IdentityMorphism, Morphism, MorphismKind, MonoidalMorphism, NamedMorphism,
};
pub use object::{MonoidalObject, Object};
pub use string_diagram::{Chain, StringDiagram};
pub use swaps::{compute_swaps, Swap};
pub use weave::{asymm_diff, weave_pattern, yarn_pattern, Side};
