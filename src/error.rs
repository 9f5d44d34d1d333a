//! Typed generation failures.
//!
//! Every variant is detected before any sampling begins; the engine never
//! returns a partial result. These are deterministic input-validation
//! failures, so there is nothing to retry - the caller presents the error
//! and lets the user adjust the inputs.

use thiserror::Error;

/// Reasons a generation call can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Zero icons supplied. No generation attempted.
    #[error("icon pool is empty")]
    EmptyIconPool,

    /// Pool smaller than the grid requires.
    #[error("need at least {required} icons to fill the grid ({available} available)")]
    InsufficientIcons {
        /// Icons the requested grid needs.
        required: usize,
        /// Icons the caller supplied.
        available: usize,
    },

    /// Grid size outside the supported range. Callers are expected to
    /// constrain this upstream; the engine re-validates defensively.
    #[error("grid size {size} is outside the supported range 3..=8")]
    InvalidGridSize {
        /// The rejected size.
        size: usize,
    },
}
