//! One printable grid.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::IconId;

/// One printable bingo card.
///
/// `cells` is row-major: `cells[row][col]`, both 0-based. The layout
/// invariant is that no icon appears twice among the filled cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Title printed at the top of the card.
    pub title: String,

    /// Grid dimension N.
    pub grid_size: usize,

    /// The N x N grid, row-major.
    pub cells: Vec<Vec<Cell>>,
}

impl Card {
    /// The cell at `(row, col)`, if in bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Iterate over all cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter())
    }

    /// Icon ids of every filled cell, row-major.
    pub fn icon_ids(&self) -> impl Iterator<Item = IconId> + '_ {
        self.iter_cells().filter_map(|cell| cell.icon().map(|i| i.id))
    }

    /// Number of cells marked multi-hit.
    #[must_use]
    pub fn multi_hit_cell_count(&self) -> usize {
        self.iter_cells().filter(|cell| cell.is_multi_hit()).count()
    }

    /// Number of free-space cells (0 or 1).
    #[must_use]
    pub fn free_space_count(&self) -> usize {
        self.iter_cells().filter(|cell| cell.is_free_space()).count()
    }
}
