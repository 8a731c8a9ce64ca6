//! # String Diagrams - Sequential Chains
//!
//! A [`StringDiagram`] is a non-empty chain of diagrams `d₁ ; d₂ ; … ; dₙ`
//! where every codomain feeds the next domain exactly.
//!
//! ## Associativity
//!
//! Composing pairwise only widens wires forward: a wire that `h` needs in
//! `(f ; g) ; h` is threaded through `g` but not back up through `f`.
//! [`StringDiagram::compose`] therefore weaves the whole chain twice, once
//! top-down and once bottom-up on the inverted chain, so wires introduced
//! anywhere reach both ends.

use serde::Serialize;
use std::fmt;

use crate::diagram::{wires, Diagram, Slice};
use crate::error::CoreError;
use crate::morphism::{Composite, Morphism};
use crate::object::MonoidalObject;

/// Anything that reads as a chain of diagrams.
pub trait Chain {
    fn diagrams(&self) -> &[Diagram];
}

impl Chain for Diagram {
    fn diagrams(&self) -> &[Diagram] {
        std::slice::from_ref(self)
    }
}

impl Chain for StringDiagram {
    fn diagrams(&self) -> &[Diagram] {
        &self.diagrams
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringDiagram {
    diagrams: Vec<Diagram>,
    name: String,
}

impl StringDiagram {
    /// Build a chain, checking that consecutive boundaries match.
    ///
    /// Without a name, the chain is named by its [`linear_syntax`](Self::linear_syntax).
    pub fn new(diagrams: Vec<Diagram>, name: Option<String>) -> Result<Self, CoreError> {
        if diagrams.is_empty() {
            return Err(CoreError::EmptyChain);
        }
        for pair in diagrams.windows(2) {
            let (codomain, domain) = (pair[0].codomain(), pair[1].domain());
            if codomain != domain {
                return Err(CoreError::CompositionUndefined {
                    codomain: codomain.to_string(),
                    domain: domain.to_string(),
                });
            }
        }
        let name = name.unwrap_or_else(|| joined_names(&diagrams));
        Ok(Self { diagrams, name })
    }

    pub fn diagrams(&self) -> &[Diagram] {
        &self.diagrams
    }

    pub fn into_diagrams(self) -> Vec<Diagram> {
        self.diagrams
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diagram names joined by ` * `.
    pub fn linear_syntax(&self) -> String {
        joined_names(&self.diagrams)
    }

    pub fn morphisms(&self) -> Vec<Morphism> {
        self.diagrams.iter().map(|d| d.morphism().clone()).collect()
    }

    pub fn domain(&self) -> MonoidalObject {
        self.diagrams
            .first()
            .map(Diagram::domain)
            .unwrap_or_default()
    }

    pub fn codomain(&self) -> MonoidalObject {
        self.diagrams
            .last()
            .map(Diagram::codomain)
            .unwrap_or_default()
    }

    pub fn as_composite(&self) -> Result<Composite, CoreError> {
        Composite::new(self.morphisms())
    }

    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }

    /// The domain wires, then every diagram's slices without its domain row.
    /// Seams are shared: a diagram's codomain row doubles as the next one's
    /// domain row.
    pub fn slices(&self) -> Vec<Slice> {
        let mut slices = vec![wires(&self.domain())];
        for diagram in &self.diagrams {
            slices.extend(diagram.slices().into_iter().skip(1));
        }
        slices
    }

    /// Fold a list of diagrams top to bottom, composing each neighbouring
    /// pair and splicing the braided result back into the list.
    pub fn weave(diagrams: Vec<Diagram>) -> Result<Vec<Diagram>, CoreError> {
        let mut rest = diagrams.into_iter();
        let mut top = rest.next().ok_or(CoreError::EmptyChain)?;
        let mut woven = Vec::new();
        for bottom in rest {
            woven.extend(top.compose(&bottom)?.into_diagrams());
            top = woven.pop().ok_or(CoreError::EmptyChain)?;
        }
        woven.push(top);
        Ok(woven)
    }

    /// Stack `other` below this chain.
    ///
    /// Composition is associative up to wire order: `(f * g) * h` and
    /// `f * (g * h)` carry the same wires on each end, but missing wires
    /// can be woven in at different places. With `f: a → a a`, `g: b → a`
    /// and `h: b → b`, the codomains are `b @ a @ a @ a` and
    /// `a @ a @ b @ a`.
    ///
    /// ```rust
    /// use braidweave_core::{Diagram, Morphism, MonoidalObject, StringDiagram};
    ///
    /// let box_ = |dom: &[&str], cod: &[&str], name: &str| {
    ///     Diagram::new(Morphism::named(
    ///         MonoidalObject::new(dom.iter().copied()),
    ///         MonoidalObject::new(cod.iter().copied()),
    ///         name,
    ///     ).unwrap())
    /// };
    /// let f = box_(&["1", "2"], &["3", "4"], "f");
    /// let g = box_(&["3", "4", "5"], &["6", "7"], "g");
    /// let h = box_(&["6", "7", "8"], &["bar"], "h");
    ///
    /// let k = f.compose(&g).unwrap().compose(&h).unwrap();
    /// assert_eq!(k.domain(), MonoidalObject::new(["1", "2", "5", "8"]));
    /// assert_eq!(k.linear_syntax(), "f @ id_{5} @ id_{8} * g @ id_{8} * h");
    /// ```
    pub fn compose<C: Chain + ?Sized>(&self, other: &C) -> Result<StringDiagram, CoreError> {
        let chain: Vec<Diagram> = self
            .diagrams
            .iter()
            .chain(other.diagrams())
            .cloned()
            .collect();

        let down = Self::weave(chain)?;
        let flipped = down.iter().rev().map(Diagram::inverse).collect();
        let up = Self::weave(flipped)?;
        let diagrams = up.iter().rev().map(Diagram::inverse).collect();
        StringDiagram::new(diagrams, None)
    }

    /// The slice list as JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(&self.slices()).map_err(|e| CoreError::Serialization {
            reason: e.to_string(),
        })
    }
}

fn joined_names(diagrams: &[Diagram]) -> String {
    diagrams
        .iter()
        .map(Diagram::name)
        .collect::<Vec<_>>()
        .join(" * ")
}

impl From<Diagram> for StringDiagram {
    fn from(diagram: Diagram) -> Self {
        let name = diagram.name().to_string();
        Self {
            diagrams: vec![diagram],
            name,
        }
    }
}

impl fmt::Display for StringDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Serialize for StringDiagram {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.diagrams.serialize(serializer)
    }
}
