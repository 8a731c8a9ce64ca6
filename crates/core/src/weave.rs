//! # Weaving
//!
//! Two diagrams can only be stacked when the wires leaving the upper one are
//! the wires entering the lower one. Weaving makes that true by threading
//! the missing wires in as identities on either edge of a diagram.
//!
//! ```text
//! cloth (top codomain):     a b c d          a b c d e
//! yarn  (bottom domain):    a b e      =>    a b e c d
//! ```
//!
//! `e` is missing from the cloth and goes on its right; `c` and `d` are
//! missing from the yarn and also go right. Existing wires never move;
//! reordering is left to the braids.

use crate::object::Object;

/// Which edge of a row a wire is threaded onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Elements of `elements` not accounted for by `base`, in `elements` order.
///
/// Duplicates are matched one-for-one: an element present `k` times in
/// `base` cancels at most `k` occurrences.
pub fn asymm_diff<T: PartialEq + Clone>(base: &[T], elements: &[T]) -> Vec<T> {
    let mut remaining: Vec<&T> = base.iter().collect();
    let mut diff = Vec::new();
    for el in elements {
        match remaining.iter().position(|b| *b == el) {
            Some(i) => {
                remaining.remove(i);
            }
            None => diff.push(el.clone()),
        }
    }
    diff
}

/// Decide the side for a wire found at `index` in the yarn, given a cloth of
/// `cloth_len` wires. Ties go right.
///
/// ```text
/// index:    [-3 -2 -1  0  1  2]
/// cloth:    [ _  A  B  C  D  _]
/// ```
pub(crate) fn side_for(index: usize, cloth_len: usize) -> Side {
    let room_left = index + 1;
    let room_right = cloth_len as isize - index as isize;
    if (room_left as isize) < room_right {
        Side::Left
    } else {
        Side::Right
    }
}

/// The wires of `yarn` missing from `cloth`, each tagged with the side of
/// `cloth` it should be added to. The cloth length is fixed while deciding.
pub fn yarn_pattern(cloth: &[Object], yarn: &[Object]) -> Vec<(Object, Side)> {
    asymm_diff(cloth, yarn)
        .into_iter()
        .map(|wire| {
            let index = first_index(yarn, &wire);
            let side = side_for(index, cloth.len());
            (wire, side)
        })
        .collect()
}

/// Thread the missing wires of `yarn` into a copy of `cloth`.
///
/// Unlike [`yarn_pattern`], the cloth grows as wires are added, so later
/// decisions see the longer row.
pub fn weave_pattern(cloth: &[Object], yarn: &[Object]) -> Vec<Object> {
    let mut woven = cloth.to_vec();
    for wire in asymm_diff(cloth, yarn) {
        let index = first_index(yarn, &wire);
        match side_for(index, woven.len()) {
            Side::Left => woven.insert(0, wire),
            Side::Right => woven.push(wire),
        }
    }
    woven
}

fn first_index(row: &[Object], wire: &Object) -> usize {
    row.iter().position(|o| o == wire).unwrap_or(0)
}
