//! # trip-bingo
//!
//! Card generation engine for printable road-trip bingo cards: an N x N
//! grid of icons sampled from a user-curated pool, optionally with a blank
//! center cell and a multi-hit mode where some cells must be spotted
//! several times.
//!
//! ## Design Principles
//!
//! 1. **Pure**: no I/O, no persistence, no state between calls. Storage
//!    and rendering are the surrounding product's concern.
//!
//! 2. **Fail fast**: every input problem is detected before sampling
//!    begins; a call never returns partial card sets.
//!
//! 3. **Deterministic given a seed**: all randomness flows through an
//!    injectable [`CardRng`], so any generated deck is reproducible.
//!
//! ## Modules
//!
//! - `core`: icon references, generation options, RNG
//! - `grid`: produced data - cells, cards, card sets
//! - `engine`: feasibility, difficulty presets, the generator
//! - `error`: the typed failure taxonomy
//!
//! ## Example
//!
//! ```
//! use trip_bingo::{generate_bingo_cards, GenerationOptions, IconId, IconRef};
//!
//! let icons: Vec<IconRef> = (0..9)
//!     .map(|i| IconRef::new(IconId::new(i), format!("icon-{i}"), format!("icons/{i}.png")))
//!     .collect();
//!
//! let options = GenerationOptions::default()
//!     .with_icons(icons)
//!     .with_grid_size(3);
//!
//! let result = generate_bingo_cards(&options).unwrap();
//! assert_eq!(result.sets.len(), 1);
//! assert_eq!(result.sets[0].cards[0].icon_ids().count(), 9);
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod grid;

// Re-export the public surface
pub use crate::core::{
    CardRng, Difficulty, GenerationOptions, IconId, IconRef, GRID_SIZE_MAX, GRID_SIZE_MIN,
};

pub use crate::engine::{
    center_blank_applies, check_feasibility, expected_multi_hit_count, generate_bingo_cards,
    generate_with_rng, required_icon_count, DifficultySettings,
};

pub use crate::error::GenerationError;

pub use crate::grid::{Card, CardSet, Cell, GenerationResult, SetIdentifier};
