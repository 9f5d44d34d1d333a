//! Difficulty presets for multi-hit annotation.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Concrete numbers behind a difficulty preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Smallest percentage of grid cells to mark.
    pub min_percentage: u32,
    /// Largest percentage of grid cells to mark.
    pub max_percentage: u32,
    /// Fewest sightings a marked cell can require.
    pub min_hits: u32,
    /// Most sightings a marked cell can require.
    pub max_hits: u32,
}

impl Difficulty {
    /// Look up the settings for this preset.
    ///
    /// The match is exhaustive over the closed enum, so an unknown
    /// difficulty cannot exist past the type system. Gameplay balance
    /// hangs on these numbers; change them only deliberately.
    #[must_use]
    pub const fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Light => DifficultySettings {
                min_percentage: 20,
                max_percentage: 30,
                min_hits: 2,
                max_hits: 3,
            },
            Difficulty::Medium => DifficultySettings {
                min_percentage: 40,
                max_percentage: 50,
                min_hits: 2,
                max_hits: 4,
            },
            Difficulty::Hard => DifficultySettings {
                min_percentage: 60,
                max_percentage: 70,
                min_hits: 3,
                max_hits: 5,
            },
        }
    }
}

/// Expected number of multi-hit cells, for UI preview text only.
///
/// Uses the midpoint of the difficulty's percentage range. Generation
/// draws its own random percentage per card and must never consult this,
/// or run-to-run variability would be lost.
#[must_use]
pub fn expected_multi_hit_count(
    grid_size: usize,
    center_blank_applied: bool,
    difficulty: Difficulty,
) -> usize {
    let eligible = grid_size * grid_size - usize::from(center_blank_applied);
    let settings = difficulty.settings();
    let avg_percentage = f64::from(settings.min_percentage + settings.max_percentage) / 2.0;
    (eligible as f64 * avg_percentage / 100.0).round() as usize
}
