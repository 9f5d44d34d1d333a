//! Feasibility check: can this pool fill this grid?
//!
//! Runs before any sampling. A failed check means no partial card sets -
//! the call returns an error and nothing else.

use crate::core::{GRID_SIZE_MAX, GRID_SIZE_MIN};
use crate::error::GenerationError;

/// Whether a blank center is possible on this grid.
///
/// Only odd grids of 5x5 and up get one. 3x3 grids never do, even when
/// requested: with nine cells a free space trivializes the game, so the
/// product always fills the 3x3 center. Policy, not an oversight.
#[must_use]
pub const fn center_blank_applies(grid_size: usize) -> bool {
    grid_size % 2 == 1 && grid_size >= 5
}

/// Number of distinct icons one card needs.
#[must_use]
pub const fn required_icon_count(grid_size: usize, leave_center_blank: bool) -> usize {
    let cells = grid_size * grid_size;
    if leave_center_blank && center_blank_applies(grid_size) {
        cells - 1
    } else {
        cells
    }
}

/// Validate the pool against the requested grid.
///
/// Returns the required icon count on success so the generator can reuse
/// it for sampling.
pub fn check_feasibility(
    available: usize,
    grid_size: usize,
    leave_center_blank: bool,
) -> Result<usize, GenerationError> {
    if grid_size < GRID_SIZE_MIN || grid_size > GRID_SIZE_MAX {
        return Err(GenerationError::InvalidGridSize { size: grid_size });
    }
    if available == 0 {
        return Err(GenerationError::EmptyIconPool);
    }

    let required = required_icon_count(grid_size, leave_center_blank);
    if available < required {
        return Err(GenerationError::InsufficientIcons {
            required,
            available,
        });
    }

    Ok(required)
}
