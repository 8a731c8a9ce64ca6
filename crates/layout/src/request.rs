//! # Build Requests
//!
//! A request names boxes by key and lists the keys to compose, top to
//! bottom:
//!
//! ```json
//! {
//!   "morphisms": {
//!     "first":  {"name": "f", "input": ["1", "2"], "output": ["3", "4"]},
//!     "second": {"name": "g", "input": ["3", "4", "5"], "output": ["6"]}
//!   },
//!   "compose": ["first", "second"],
//!   "scale": 100,
//!   "labels": true
//! }
//! ```
//!
//! Unknown fields are ignored.

use braidweave_core::{Diagram, Morphism, MonoidalObject, StringDiagram};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::array::NameGrid;
use crate::config::{LayoutConfig, VisConfig};
use crate::engine::to_graph_from_slices;
use crate::error::LayoutError;
use crate::export::LayoutExport;
use crate::graph::Graph;
use crate::vis::{to_elements, Element};

/// One labelled box.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MorphismSpec {
    pub name: String,
    #[serde(default)]
    pub input: Vec<String>,
    #[serde(default)]
    pub output: Vec<String>,
}

impl MorphismSpec {
    pub fn to_diagram(&self) -> Result<Diagram, LayoutError> {
        let morphism = Morphism::named(
            MonoidalObject::new(&self.input),
            MonoidalObject::new(&self.output),
            self.name.as_str(),
        )?;
        Ok(Diagram::new(morphism))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuildRequest {
    #[serde(default)]
    pub morphisms: BTreeMap<String, MorphismSpec>,
    #[serde(default)]
    pub compose: Vec<String>,
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub labels: Option<bool>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl BuildRequest {
    pub fn from_json(body: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The diagrams named by `compose`, in order.
    pub fn resolve(&self) -> Result<Vec<Diagram>, LayoutError> {
        self.compose
            .iter()
            .map(|key| {
                self.morphisms
                    .get(key)
                    .ok_or_else(|| LayoutError::UnknownMorphism { key: key.clone() })?
                    .to_diagram()
            })
            .collect()
    }

    /// Compose the resolved diagrams left to right.
    pub fn build(&self) -> Result<StringDiagram, LayoutError> {
        let mut diagrams = self.resolve()?.into_iter();
        let first = diagrams.next().ok_or(LayoutError::EmptyComposition)?;
        let mut chain = match diagrams.next() {
            Some(second) => first.compose(&second)?,
            None => StringDiagram::from(first),
        };
        for next in diagrams {
            chain = chain.compose(&next)?;
        }
        debug!(layers = chain.len(), name = %chain, "built string diagram");
        Ok(chain)
    }

    pub fn vis_config(&self) -> VisConfig {
        let defaults = VisConfig::default();
        VisConfig {
            scale: self.scale.unwrap_or(defaults.scale),
            label_strings: self.labels.unwrap_or(defaults.label_strings),
        }
    }

    pub fn graph(&self) -> Result<Graph, LayoutError> {
        Ok(to_graph_from_slices(&self.build()?.slices(), &self.layout))
    }

    pub fn layout(&self) -> Result<LayoutExport, LayoutError> {
        Ok(LayoutExport::from(&self.graph()?))
    }

    pub fn vis(&self) -> Result<Vec<Element>, LayoutError> {
        Ok(to_elements(&self.graph()?, &self.vis_config()))
    }

    pub fn array(&self) -> Result<NameGrid, LayoutError> {
        Ok(NameGrid::from_graph(&self.graph()?))
    }
}
