//! # Swap Computation
//!
//! Once weaving has made two boundaries carry the same wires, what is left
//! is a permutation. [`compute_swaps`] expresses it as adjacent
//! transpositions, each of which becomes one braid layer.
//!
//! ```text
//! start:  a b c d e
//! end:    a b e c d
//! swaps:  (c d) (d c) (d e) (c e)
//! ```
//!
//! The scan is bubble-sort style, O(n²); redundant
//! back-and-forth pairs such as `(c d) (d c)` are removed afterwards by
//! [`simplify`](crate::braid::simplify).

use std::collections::HashMap;

use crate::error::CoreError;
use crate::object::Object;

/// One adjacent transposition `(left, right) → (right, left)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Swap {
    pub left: Object,
    pub right: Object,
    /// Index of `left` in the row the swap applies to.
    pub position: usize,
}

impl Swap {
    pub fn new(left: Object, right: Object, position: usize) -> Self {
        Self {
            left,
            right,
            position,
        }
    }

    /// Crossing two wires of the same name leaves the row unchanged.
    pub fn is_trivial(&self) -> bool {
        self.left == self.right
    }

    /// Where this swap applies in `row`: its recorded position if the pair
    /// sits there, otherwise the first adjacent occurrence of the pair.
    pub fn locate(&self, row: &[Object]) -> Option<usize> {
        let matches_at = |i: usize| {
            row.get(i) == Some(&self.left) && row.get(i + 1) == Some(&self.right)
        };
        if matches_at(self.position) {
            return Some(self.position);
        }
        (0..row.len().saturating_sub(1)).find(|&i| matches_at(i))
    }

    /// Apply the swap to a copy of `row`, or `None` if the pair isn't there.
    pub fn apply(&self, row: &[Object]) -> Option<Vec<Object>> {
        let position = self.locate(row)?;
        let mut swapped = row.to_vec();
        swapped.swap(position, position + 1);
        Some(swapped)
    }
}

/// An occurrence-tagged wire: the second `x` in a row is `(x, 1)`.
type Label = (Object, usize);

fn label_occurrences(row: &[Object]) -> Vec<Label> {
    let mut seen: HashMap<&Object, usize> = HashMap::new();
    row.iter()
        .map(|o| {
            let ordinal = seen.entry(o).or_insert(0);
            let label = (o.clone(), *ordinal);
            *ordinal += 1;
            label
        })
        .collect()
}

fn multiset(row: &[Object]) -> HashMap<&Object, usize> {
    let mut counts = HashMap::new();
    for o in row {
        *counts.entry(o).or_insert(0) += 1;
    }
    counts
}

fn join(row: &[Object]) -> String {
    row.iter().map(Object::name).collect::<Vec<_>>().join(", ")
}

/// Compute the adjacent swaps that turn `a` into `b`.
///
/// Applying the returned swaps in order to `a` yields exactly `b`.
///
/// # Errors
///
/// Fails when the rows differ in length or don't hold the same wires with
/// the same multiplicities.
///
/// ```rust
/// use braidweave_core::{compute_swaps, Object};
///
/// let row = |s: &str| s.split(' ').map(Object::new).collect::<Vec<_>>();
/// let swaps = compute_swaps(&row("a b c d e"), &row("a b e c d")).unwrap();
/// let pairs: Vec<_> = swaps.iter().map(|s| (s.left.name(), s.right.name())).collect();
/// assert_eq!(pairs, [("c", "d"), ("d", "c"), ("d", "e"), ("c", "e")]);
/// ```
pub fn compute_swaps(a: &[Object], b: &[Object]) -> Result<Vec<Swap>, CoreError> {
    if a.len() != b.len() {
        return Err(CoreError::SwapLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if multiset(a) != multiset(b) {
        return Err(CoreError::SwapMultisetMismatch {
            left: join(a),
            right: join(b),
        });
    }

    let target = label_occurrences(b);
    let target_index: HashMap<&Label, usize> =
        target.iter().enumerate().map(|(i, l)| (l, i)).collect();

    let mut working = label_occurrences(a);
    let mut pending: Vec<Label> = working.clone();
    let mut swaps = Vec::new();

    // Resolve labels in `a` order: a label in place is retired, otherwise it
    // moves one step toward its target and the scan restarts.
    while let Some(label) = pending.first() {
        let Some(current) = working.iter().position(|l| l == label) else {
            break;
        };
        let wanted = target_index[label];
        if current == wanted {
            pending.remove(0);
            continue;
        }
        let position = if current < wanted { current } else { current - 1 };
        swaps.push(Swap::new(
            working[position].0.clone(),
            working[position + 1].0.clone(),
            position,
        ));
        working.swap(position, position + 1);
    }

    // Retired labels can be displaced by later moves; finish with a plain
    // bubble pass so the result always reaches `b`.
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for position in 0..working.len().saturating_sub(1) {
            if target_index[&working[position]] > target_index[&working[position + 1]] {
                swaps.push(Swap::new(
                    working[position].0.clone(),
                    working[position + 1].0.clone(),
                    position,
                ));
                working.swap(position, position + 1);
                sorted = false;
            }
        }
    }

    Ok(swaps)
}
