//! # Morphisms - Boxes and Wires
//!
//! A morphism `f: A → B` connects two rows of wires. Three kinds exist:
//!
//! - **Identity**: wires passing straight through (`id_A: A → A`)
//! - **Named**: an opaque labelled box
//! - **Monoidal**: morphisms placed side by side (`f ⊗ g`)
//!
//! Monoidal morphisms are kept flat: building `f ⊗ (g ⊗ h)` yields the three
//! components `[f, g, h]`, never a nested monoidal value. This is what lets a
//! diagram be sliced into rows of boxes.
//!
//! Sequential composition (`f ; g`) lives in [`Composite`] and in
//! [`StringDiagram`](crate::StringDiagram).

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::CoreError;
use crate::object::MonoidalObject;

/// The tag of a [`Morphism`], used where only the kind matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphismKind {
    Identity,
    Named,
    Monoidal,
}

impl MorphismKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MorphismKind::Identity => "identity",
            MorphismKind::Named => "named",
            MorphismKind::Monoidal => "monoidal",
        }
    }
}

/// Wires passing through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityMorphism {
    pub(crate) object: MonoidalObject,
}

impl IdentityMorphism {
    pub fn object(&self) -> &MonoidalObject {
        &self.object
    }
}

/// An opaque box with a non-empty label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedMorphism {
    pub(crate) domain: MonoidalObject,
    pub(crate) codomain: MonoidalObject,
    pub(crate) name: String,
    /// Set for the elementary transposition boxes built by [`crate::braid::swap`].
    pub(crate) braid: bool,
}

impl NamedMorphism {
    pub fn domain(&self) -> &MonoidalObject {
        &self.domain
    }

    pub fn codomain(&self) -> &MonoidalObject {
        &self.codomain
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_braid(&self) -> bool {
        self.braid
    }
}

/// Morphisms composed in parallel. Never contains another monoidal morphism.
#[derive(Debug, Clone, Eq)]
pub struct MonoidalMorphism {
    pub(crate) morphisms: Vec<Morphism>,
    /// Marks a single 2-wire transposition.
    pub(crate) is_swap: bool,
}

impl MonoidalMorphism {
    pub fn morphisms(&self) -> &[Morphism] {
        &self.morphisms
    }

    pub fn is_swap(&self) -> bool {
        self.is_swap
    }
}

impl PartialEq for MonoidalMorphism {
    fn eq(&self, other: &Self) -> bool {
        self.morphisms == other.morphisms
    }
}

/// A morphism of a (symmetric) monoidal category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Morphism {
    Identity(IdentityMorphism),
    Named(NamedMorphism),
    Monoidal(MonoidalMorphism),
}

impl Morphism {
    /// The identity on a wire or row of wires.
    pub fn identity(object: impl Into<MonoidalObject>) -> Self {
        Morphism::Identity(IdentityMorphism {
            object: object.into(),
        })
    }

    /// A labelled box `name: domain → codomain`.
    ///
    /// ```rust
    /// use braidweave_core::{Morphism, MonoidalObject};
    ///
    /// let f = Morphism::named(
    ///     MonoidalObject::new(["1", "2"]),
    ///     MonoidalObject::new(["3"]),
    ///     "f",
    /// ).unwrap();
    /// assert_eq!(f.to_string(), "f");
    ///
    /// assert!(Morphism::named(MonoidalObject::unit(), MonoidalObject::unit(), "").is_err());
    /// ```
    pub fn named(
        domain: impl Into<MonoidalObject>,
        codomain: impl Into<MonoidalObject>,
        name: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Morphism::Named(NamedMorphism {
            domain: domain.into(),
            codomain: codomain.into(),
            name,
            braid: false,
        }))
    }

    /// Place morphisms side by side, flattening nested monoidal components.
    pub fn monoidal<I>(morphisms: I) -> Self
    where
        I: IntoIterator<Item = Morphism>,
    {
        Morphism::Monoidal(MonoidalMorphism {
            morphisms: flatten(morphisms),
            is_swap: false,
        })
    }

    /// `self ⊗ other`.
    pub fn tensor(&self, other: &Morphism) -> Morphism {
        Morphism::monoidal([self.clone(), other.clone()])
    }

    pub fn kind(&self) -> MorphismKind {
        match self {
            Morphism::Identity(_) => MorphismKind::Identity,
            Morphism::Named(_) => MorphismKind::Named,
            Morphism::Monoidal(_) => MorphismKind::Monoidal,
        }
    }

    pub fn domain(&self) -> MonoidalObject {
        match self {
            Morphism::Identity(id) => id.object.clone(),
            Morphism::Named(named) => named.domain.clone(),
            Morphism::Monoidal(m) => m
                .morphisms
                .iter()
                .flat_map(|c| c.domain().into_objects())
                .collect(),
        }
    }

    pub fn codomain(&self) -> MonoidalObject {
        match self {
            Morphism::Identity(id) => id.object.clone(),
            Morphism::Named(named) => named.codomain.clone(),
            Morphism::Monoidal(m) => m
                .morphisms
                .iter()
                .flat_map(|c| c.codomain().into_objects())
                .collect(),
        }
    }

    /// `id_{a @ b}` for identities, the label for boxes, and the component
    /// names joined by ` @ ` for monoidal morphisms.
    pub fn name(&self) -> String {
        match self {
            Morphism::Identity(id) => format!("id_{{{}}}", id.object.name()),
            Morphism::Named(named) => named.name.clone(),
            Morphism::Monoidal(m) => m
                .morphisms
                .iter()
                .map(Morphism::name)
                .collect::<Vec<_>>()
                .join(" @ "),
        }
    }

    /// Flip domain and codomain. Identities are their own inverse; boxes
    /// keep their label.
    pub fn inverse(&self) -> Morphism {
        match self {
            Morphism::Identity(_) => self.clone(),
            Morphism::Named(named) => Morphism::Named(NamedMorphism {
                domain: named.codomain.clone(),
                codomain: named.domain.clone(),
                name: named.name.clone(),
                braid: named.braid,
            }),
            Morphism::Monoidal(m) => Morphism::monoidal(m.morphisms.iter().map(Morphism::inverse)),
        }
    }

    /// The parallel components: the flattened list for a monoidal morphism,
    /// or the morphism itself otherwise.
    pub fn components(&self) -> &[Morphism] {
        match self {
            Morphism::Monoidal(m) => &m.morphisms,
            _ => std::slice::from_ref(self),
        }
    }

    pub fn is_swap(&self) -> bool {
        matches!(self, Morphism::Monoidal(m) if m.is_swap)
    }

    /// True for transposition boxes and for swap morphisms wrapping them.
    pub fn is_braid(&self) -> bool {
        match self {
            Morphism::Named(named) => named.braid,
            Morphism::Monoidal(m) => m.is_swap,
            Morphism::Identity(_) => false,
        }
    }
}

fn flatten<I>(morphisms: I) -> Vec<Morphism>
where
    I: IntoIterator<Item = Morphism>,
{
    let mut flat = Vec::new();
    for morphism in morphisms {
        match morphism {
            Morphism::Monoidal(m) => flat.extend(m.morphisms),
            other => flat.push(other),
        }
    }
    flat
}

impl fmt::Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Morphism {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if let Morphism::Monoidal(_) = self { 5 } else { 4 };
        let mut record = serializer.serialize_struct("Morphism", fields)?;
        record.serialize_field("domain", &self.domain())?;
        record.serialize_field("codomain", &self.codomain())?;
        record.serialize_field("name", &self.name())?;
        record.serialize_field("type", self.kind().as_str())?;
        if let Morphism::Monoidal(m) = self {
            record.serialize_field("morphisms", &m.morphisms)?;
        }
        record.end()
    }
}

/// A validated sequential chain `f₁ ; f₂ ; … ; fₙ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    morphisms: Vec<Morphism>,
}

impl Composite {
    /// Fails unless the chain is non-empty and `cod(fᵢ) = dom(fᵢ₊₁)` throughout.
    pub fn new(morphisms: Vec<Morphism>) -> Result<Self, CoreError> {
        if morphisms.is_empty() {
            return Err(CoreError::EmptyChain);
        }
        for pair in morphisms.windows(2) {
            let (codomain, domain) = (pair[0].codomain(), pair[1].domain());
            if codomain != domain {
                return Err(CoreError::CompositionUndefined {
                    codomain: codomain.to_string(),
                    domain: domain.to_string(),
                });
            }
        }
        Ok(Self { morphisms })
    }

    pub fn morphisms(&self) -> &[Morphism] {
        &self.morphisms
    }

    pub fn domain(&self) -> MonoidalObject {
        self.morphisms
            .first()
            .map(Morphism::domain)
            .unwrap_or_default()
    }

    pub fn codomain(&self) -> MonoidalObject {
        self.morphisms
            .last()
            .map(Morphism::codomain)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.morphisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphisms.is_empty()
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.morphisms.iter().map(Morphism::name).collect();
        write!(f, "{}", names.join(" * "))
    }
}
