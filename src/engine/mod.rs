//! The card generation engine.
//!
//! Pure, synchronous, deterministic given a seed. Four concerns applied in
//! sequence per card: feasibility check, icon sampling, free-space
//! placement, multi-hit annotation. No I/O, no state between calls.

pub mod difficulty;
pub mod feasibility;
pub mod generator;

pub use difficulty::{expected_multi_hit_count, DifficultySettings};
pub use feasibility::{center_blank_applies, check_feasibility, required_icon_count};
pub use generator::{generate_bingo_cards, generate_with_rng};
