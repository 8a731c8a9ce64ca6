//! # Braids - Symmetric Structure
//!
//! In a symmetric monoidal category every pair of wires can cross:
//! `τ(x, y): x ⊗ y → y ⊗ x`. Swap lists from
//! [`compute_swaps`](crate::compute_swaps) become braid morphisms here,
//! redundant crossings are cancelled with the braid identity
//! `τ(x, y) ; τ(y, x) = id`, and the survivors are inserted as layers
//! between two diagrams.

use tracing::{debug, warn};

use crate::diagram::Diagram;
use crate::error::CoreError;
use crate::morphism::{Composite, MonoidalMorphism, Morphism, NamedMorphism};
use crate::object::{MonoidalObject, Object};
use crate::swaps::{compute_swaps, Swap};

/// The transposition `τ(x, y): x ⊗ y → y ⊗ x`, flagged as a swap.
pub fn swap(x: &Object, y: &Object) -> Morphism {
    let tau = NamedMorphism {
        domain: MonoidalObject::new([x.clone(), y.clone()]),
        codomain: MonoidalObject::new([y.clone(), x.clone()]),
        name: format!("\u{03C4}({}, {})", x, y),
        braid: true,
    };
    Morphism::Monoidal(MonoidalMorphism {
        morphisms: vec![Morphism::Named(tau)],
        is_swap: true,
    })
}

/// True iff both are swaps, `t1 ; t2` is defined, and `t2` undoes `t1`.
pub fn is_braid_identity(t1: &Morphism, t2: &Morphism) -> bool {
    if !(t1.is_swap() && t2.is_swap()) {
        return false;
    }
    match Composite::new(vec![t1.clone(), t2.clone()]) {
        Ok(composed) => composed.domain() == composed.codomain(),
        Err(_) => false,
    }
}

/// Values that can cancel against the crossing that follows them.
pub trait BraidIdentity {
    fn cancels(&self, next: &Self) -> bool;
}

impl BraidIdentity for Morphism {
    fn cancels(&self, next: &Self) -> bool {
        is_braid_identity(self, next)
    }
}

/// A swap morphism together with the place it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Braid {
    pub swap: Swap,
    pub morphism: Morphism,
}

impl From<Swap> for Braid {
    fn from(swap: Swap) -> Self {
        let morphism = self::swap(&swap.left, &swap.right);
        Self { swap, morphism }
    }
}

impl BraidIdentity for Braid {
    fn cancels(&self, next: &Self) -> bool {
        self.swap.position == next.swap.position && self.morphism.cancels(&next.morphism)
    }
}

/// Drop adjacent crossings that undo each other.
///
/// A single left-to-right pass: a cancelling pair is removed and scanning
/// resumes after it. Pairs that only become adjacent after a removal are
/// kept.
///
/// ```text
/// start:  A B C D E
/// end:    A B E C D
/// swaps:            [(C D), (D C), (D E), (C E)]
/// simplify(swaps) = [(D E), (C E)]
/// ```
pub fn simplify<T: BraidIdentity>(swaps: Vec<T>) -> Vec<T> {
    if swaps.len() < 2 {
        return swaps;
    }

    let mut simplified = Vec::with_capacity(swaps.len());
    let mut rest = swaps.into_iter();
    let mut carried = rest.next();
    while let Some(next) = rest.next() {
        match carried.take() {
            Some(previous) if previous.cancels(&next) => carried = rest.next(),
            Some(previous) => {
                simplified.push(previous);
                carried = Some(next);
            }
            None => carried = Some(next),
        }
    }
    simplified.extend(carried);
    simplified
}

/// Interleave braid layers between two diagrams whose boundaries hold the
/// same wires in different orders.
///
/// Returns `[from, layer₁, …, layerₖ, to]`, where each layer is one crossing
/// tensored with identities on the remaining wires.
///
/// # Errors
///
/// [`CoreError::WireMismatch`] if `from.codomain` and `to.domain` don't hold
/// the same wires.
pub fn add_braids(from: &Diagram, to: &Diagram) -> Result<Vec<Diagram>, CoreError> {
    let top = from.codomain();
    let bottom = to.domain();

    let swaps = compute_swaps(top.objects(), bottom.objects()).map_err(|_| {
        CoreError::WireMismatch {
            codomain: top.to_string(),
            domain: bottom.to_string(),
        }
    })?;
    let found = swaps.len();
    let braids = simplify(
        swaps
            .into_iter()
            .filter(|s| !s.is_trivial())
            .map(Braid::from)
            .collect::<Vec<_>>(),
    );
    debug!(swaps = found, braids = braids.len(), "inserting braid layers");

    let mut chain = Vec::with_capacity(braids.len() + 2);
    chain.push(from.clone());
    chain.extend(braid_layers(top.into_objects(), braids));
    chain.push(to.clone());
    Ok(chain)
}

/// One layer per braid, each acting on the codomain of the layer above.
/// Braids from [`compute_swaps`] always locate; a braid that doesn't is
/// skipped.
fn braid_layers(mut above: Vec<Object>, braids: Vec<Braid>) -> Vec<Diagram> {
    let mut layers = Vec::with_capacity(braids.len());
    for braid in braids {
        let Some(position) = braid.swap.locate(&above) else {
            warn!(
                braid = %braid.morphism,
                codomain = %MonoidalObject::from(above.clone()),
                "braid wires are not adjacent in the running codomain, skipping layer"
            );
            continue;
        };
        let layer = braid_layer(&above, position, braid.morphism);
        above = layer.codomain().into_objects();
        layers.push(Diagram::new(layer));
    }
    layers
}

fn braid_layer(row: &[Object], position: usize, crossing: Morphism) -> Morphism {
    let before = row[..position].iter().map(|o| Morphism::identity(o.clone()));
    let after = row[position + 2..]
        .iter()
        .map(|o| Morphism::identity(o.clone()));
    Morphism::monoidal(before.chain(std::iter::once(crossing)).chain(after))
}
