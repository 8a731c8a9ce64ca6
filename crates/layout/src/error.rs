//! # Error Types
//!
//! Layout itself never fails: unmatched wires only drop edges. Errors come
//! from the diagrams fed into it and from resolving build requests.

use braidweave_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Building or composing the diagrams failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body or an export couldn't be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The composition list names a morphism the request doesn't define.
    #[error("Cannot find morphism with key: {key}")]
    UnknownMorphism { key: String },

    /// The composition list is empty.
    #[error("Nothing to compose")]
    EmptyComposition,
}
