//! Generated grid data: cells, cards, card sets.
//!
//! Everything here is plain owned data, created fresh on each generation
//! call and handed to the caller. Rendering and persistence layers consume
//! it read-only; the engine keeps no reference to it.

pub mod card;
pub mod cell;
pub mod set;

pub use card::Card;
pub use cell::Cell;
pub use set::{CardSet, GenerationResult, SetIdentifier};
