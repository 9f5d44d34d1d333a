//! Generation options - the user's request, expressed declaratively.

use serde::{Deserialize, Serialize};

use super::icon::IconRef;
use crate::error::GenerationError;

/// Smallest supported grid dimension.
pub const GRID_SIZE_MIN: usize = 3;

/// Largest supported grid dimension.
pub const GRID_SIZE_MAX: usize = 8;

/// Multi-hit difficulty preset.
///
/// Controls what fraction of cells require multiple sightings and how many
/// sightings each requires. The concrete numbers live in
/// [`Difficulty::settings`]; being a closed enum, an unknown difficulty
/// cannot reach the engine at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 20-30% of cells, 2-3 hits each.
    Light,
    /// 40-50% of cells, 2-4 hits each.
    Medium,
    /// 60-70% of cells, 3-5 hits each.
    Hard,
}

/// Options for one generation call.
///
/// ## Example
///
/// ```
/// use trip_bingo::{Difficulty, GenerationOptions, IconId, IconRef};
///
/// let icons: Vec<IconRef> = (0..24)
///     .map(|i| IconRef::new(IconId::new(i), format!("icon-{i}"), format!("icons/{i}.png")))
///     .collect();
///
/// let options = GenerationOptions::default()
///     .with_icons(icons)
///     .with_grid_size(5)
///     .with_center_blank(true)
///     .with_multi_hit(Difficulty::Hard);
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// The curated icon pool to sample from.
    pub icons: Vec<IconRef>,

    /// Grid dimension N for an N x N card (3-8).
    pub grid_size: usize,

    /// Number of card sets, each with its own identifier.
    pub set_count: usize,

    /// Number of cards in every set.
    pub cards_per_set: usize,

    /// Title printed at the top of every card.
    pub title: String,

    /// Leave the center cell blank as a free space.
    /// Only takes effect on odd grids of 5x5 and up.
    pub leave_center_blank: bool,

    /// Reuse one layout for every card in a set instead of
    /// randomizing each card independently.
    pub same_card_per_set: bool,

    /// Mark a difficulty-dependent subset of cells as multi-hit.
    pub multi_hit_mode: bool,

    /// Difficulty preset for multi-hit annotation.
    pub difficulty: Difficulty,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            icons: Vec::new(),
            grid_size: 5,
            set_count: 1,
            cards_per_set: 1,
            title: "Road Trip Bingo".to_string(),
            leave_center_blank: false,
            same_card_per_set: false,
            multi_hit_mode: false,
            difficulty: Difficulty::Medium,
        }
    }
}

impl GenerationOptions {
    /// Set the icon pool.
    #[must_use]
    pub fn with_icons(mut self, icons: Vec<IconRef>) -> Self {
        self.icons = icons;
        self
    }

    /// Set the grid dimension.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the number of card sets.
    #[must_use]
    pub fn with_set_count(mut self, set_count: usize) -> Self {
        self.set_count = set_count;
        self
    }

    /// Set the number of cards per set.
    #[must_use]
    pub fn with_cards_per_set(mut self, cards_per_set: usize) -> Self {
        self.cards_per_set = cards_per_set;
        self
    }

    /// Set the card title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Request a blank center cell.
    #[must_use]
    pub fn with_center_blank(mut self, leave_center_blank: bool) -> Self {
        self.leave_center_blank = leave_center_blank;
        self
    }

    /// Reuse one layout for every card in a set.
    #[must_use]
    pub fn with_same_card_per_set(mut self, same_card_per_set: bool) -> Self {
        self.same_card_per_set = same_card_per_set;
        self
    }

    /// Enable multi-hit mode at the given difficulty.
    #[must_use]
    pub fn with_multi_hit(mut self, difficulty: Difficulty) -> Self {
        self.multi_hit_mode = true;
        self.difficulty = difficulty;
        self
    }

    /// Check these options against the current icon pool without
    /// generating anything.
    ///
    /// UI callers use this to surface "Need at least N icons" while the
    /// user is still adjusting the form. The engine re-runs the same check
    /// at the start of every generation call.
    pub fn validate(&self) -> Result<(), GenerationError> {
        crate::engine::check_feasibility(self.icons.len(), self.grid_size, self.leave_center_blank)
            .map(|_| ())
    }
}
