//! Core types: icon identity, generation options, RNG.
//!
//! These are the inputs to the engine. The produced grid data lives in
//! `crate::grid`, the algorithm itself in `crate::engine`.

pub mod icon;
pub mod options;
pub mod rng;

pub use icon::{IconId, IconRef};
pub use options::{Difficulty, GenerationOptions, GRID_SIZE_MAX, GRID_SIZE_MIN};
pub use rng::CardRng;
