//! # Diagrams - Composable Boxes and Wires
//!
//! A [`Diagram`] wraps a single morphism under a display name. Stacking two
//! diagrams is where the work happens: [`Diagram::compose`] threads missing
//! wires onto both sides, braids the shared wires into the same order, and
//! returns the resulting chain as a [`StringDiagram`].
//!
//! ## Slices
//!
//! For layout, a diagram is read as three rows:
//!
//! ```text
//! 1   2        domain wires (identities)
//! [  f  ]      components of the morphism
//! 3   4        codomain wires (identities)
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

use crate::braid::add_braids;
use crate::error::CoreError;
use crate::morphism::Morphism;
use crate::object::{MonoidalObject, Object};
use crate::string_diagram::StringDiagram;
use crate::weave::{yarn_pattern, Side};

/// One layer of a diagram: a row of wires or a row of boxes.
pub type Slice = Vec<Morphism>;

/// One identity per wire of `row`, left to right.
pub fn wires(row: &MonoidalObject) -> Slice {
    row.iter().map(|o| Morphism::identity(o.clone())).collect()
}

/// A morphism with a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    morphism: Morphism,
    name: String,
}

impl Diagram {
    /// Wrap a morphism, named after it.
    pub fn new(morphism: Morphism) -> Self {
        let name = morphism.name();
        Self { morphism, name }
    }

    /// Wrap a morphism under a custom display name.
    pub fn with_name(morphism: Morphism, name: impl Into<String>) -> Self {
        Self {
            morphism,
            name: name.into(),
        }
    }

    pub fn morphism(&self) -> &Morphism {
        &self.morphism
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> MonoidalObject {
        self.morphism.domain()
    }

    pub fn codomain(&self) -> MonoidalObject {
        self.morphism.codomain()
    }

    /// `"f: 1 @ 2 -> 3 @ 4"`
    pub fn linear_syntax(&self) -> String {
        format!("{}: {} -> {}", self.name, self.domain(), self.codomain())
    }

    /// The same diagram read bottom to top. The display name is kept.
    pub fn inverse(&self) -> Diagram {
        Self {
            morphism: self.morphism.inverse(),
            name: self.name.clone(),
        }
    }

    /// Place `other` to the right of this diagram.
    pub fn tensor(&self, other: &Diagram) -> Diagram {
        Diagram::new(self.morphism.tensor(&other.morphism))
    }

    /// `[domain wires, components, codomain wires]`
    pub fn slices(&self) -> Vec<Slice> {
        vec![
            wires(&self.domain()),
            self.morphism.components().to_vec(),
            wires(&self.codomain()),
        ]
    }

    /// Stack `other` below this diagram.
    ///
    /// Wires that `other` consumes but `self` doesn't produce are passed
    /// through `self` as identities, and vice versa. The shared wires are
    /// then braided into the order `other` expects.
    ///
    /// ```rust
    /// use braidweave_core::{Diagram, Morphism, MonoidalObject};
    ///
    /// let f = Morphism::named(MonoidalObject::new(["foo"]), MonoidalObject::new(["a", "b"]), "f").unwrap();
    /// let g = Morphism::named(MonoidalObject::new(["b", "a"]), MonoidalObject::new(["bar"]), "g").unwrap();
    ///
    /// let fg = Diagram::new(f).compose(&Diagram::new(g)).unwrap();
    /// assert_eq!(fg.linear_syntax(), "f * τ(a, b) * g");
    /// ```
    ///
    /// # Errors
    ///
    /// [`CoreError::WireMismatch`] if the boundaries can't be reconciled, and
    /// [`CoreError::CompositionUndefined`] if the braided chain doesn't line up.
    pub fn compose(&self, other: &Diagram) -> Result<StringDiagram, CoreError> {
        let top = self.codomain();
        let bottom = other.domain();

        let widen_top = yarn_pattern(top.objects(), bottom.objects());
        let widen_bottom = yarn_pattern(bottom.objects(), top.objects());
        debug!(
            top = %self.name,
            bottom = %other.name,
            widen_top = widen_top.len(),
            widen_bottom = widen_bottom.len(),
            "weaving diagrams"
        );

        let upper = self.weave_onto(&widen_top);
        let lower = other.weave_onto(&widen_bottom);
        let chain = add_braids(&upper, &lower)?;
        StringDiagram::new(chain, None)
    }

    /// Tensor identities onto either edge; the name follows the new morphism.
    fn weave_onto(&self, pattern: &[(Object, Side)]) -> Diagram {
        if pattern.is_empty() {
            return self.clone();
        }
        let woven = pattern
            .iter()
            .fold(self.morphism.clone(), |morphism, (wire, side)| {
                let id = Morphism::identity(wire.clone());
                match side {
                    Side::Left => id.tensor(&morphism),
                    Side::Right => morphism.tensor(&id),
                }
            });
        Diagram::new(woven)
    }

    /// The slice list as JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(&self.slices()).map_err(|e| CoreError::Serialization {
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<Morphism> for Diagram {
    fn from(morphism: Morphism) -> Self {
        Self::new(morphism)
    }
}

impl Serialize for Diagram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Diagram", 4)?;
        record.serialize_field("name", &self.name)?;
        record.serialize_field("domain", self.domain().objects())?;
        record.serialize_field("codomain", self.codomain().objects())?;
        record.serialize_field("linear_syntax", &self.linear_syntax())?;
        record.end()
    }
}
