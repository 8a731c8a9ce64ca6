//! # Error Types
//!
//! Composition in a monoidal category is only defined when `cod(f) = dom(g)`.
//! Weaving and braiding make far more pairs composable than plain
//! composition does, but some failures remain: malformed chains, boxes
//! without names, and wire sequences that no permutation can reconcile.

use thiserror::Error;

/// Errors raised while building or composing string diagrams.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A named morphism was given an empty name.
    #[error("Empty morphism names not allowed")]
    EmptyName,

    /// Consecutive members of a chain don't line up.
    /// This is the categorical equivalent of `cod(f) ≠ dom(g)`.
    #[error("Cannot compose: codomain {codomain} ≠ domain {domain}")]
    CompositionUndefined { codomain: String, domain: String },

    /// A chain must contain at least one member.
    #[error("Cannot build an empty composition chain")]
    EmptyChain,

    /// The two boundaries still carry different wires after weaving.
    #[error("Cannot braid {codomain} into {domain}: wire multisets differ")]
    WireMismatch { codomain: String, domain: String },

    /// Swap computation needs sequences of equal length.
    #[error("Swap sequences must have equal lengths (got {left} and {right})")]
    SwapLengthMismatch { left: usize, right: usize },

    /// Swap computation needs sequences holding the same wires.
    #[error("Swap sequences must contain the same wires: [{left}] vs [{right}]")]
    SwapMultisetMismatch { left: String, right: String },

    /// JSON encoding failed.
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}
