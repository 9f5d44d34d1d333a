//! Grid cells.
//!
//! A cell either holds an icon or is the free space - never both, never
//! neither. Encoding that as a sum type removes the "free cells have no
//! icon" invariant from runtime checks entirely.

use serde::{Deserialize, Serialize};

use crate::core::IconRef;

/// One grid position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// A cell holding an icon to spot.
    Filled {
        /// The icon occupying this cell.
        icon: IconRef,
        /// Sightings required to mark the cell. Always 1 unless multi-hit.
        hit_count: u32,
        /// Whether this cell was selected for multi-hit play.
        multi_hit: bool,
    },
    /// The blank center cell, granted for free.
    FreeSpace,
}

impl Cell {
    /// Create a plain single-hit cell for an icon.
    #[must_use]
    pub fn filled(icon: IconRef) -> Self {
        Self::Filled {
            icon,
            hit_count: 1,
            multi_hit: false,
        }
    }

    /// Whether this is the free-space cell.
    #[must_use]
    pub fn is_free_space(&self) -> bool {
        matches!(self, Self::FreeSpace)
    }

    /// Whether this cell requires multiple sightings.
    #[must_use]
    pub fn is_multi_hit(&self) -> bool {
        matches!(self, Self::Filled { multi_hit: true, .. })
    }

    /// Sightings required to mark this cell. `None` for the free space.
    #[must_use]
    pub fn hit_count(&self) -> Option<u32> {
        match self {
            Self::Filled { hit_count, .. } => Some(*hit_count),
            Self::FreeSpace => None,
        }
    }

    /// The icon in this cell. `None` for the free space.
    #[must_use]
    pub fn icon(&self) -> Option<&IconRef> {
        match self {
            Self::Filled { icon, .. } => Some(icon),
            Self::FreeSpace => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IconId, IconRef};

    fn icon() -> IconRef {
        IconRef::new(IconId::new(1), "Red barn", "barn.png")
    }

    #[test]
    fn test_filled_defaults_to_single_hit() {
        let cell = Cell::filled(icon());
        assert!(!cell.is_free_space());
        assert!(!cell.is_multi_hit());
        assert_eq!(cell.hit_count(), Some(1));
        assert_eq!(cell.icon().map(|i| i.id), Some(IconId::new(1)));
    }

    #[test]
    fn test_free_space_has_no_icon() {
        let cell = Cell::FreeSpace;
        assert!(cell.is_free_space());
        assert!(!cell.is_multi_hit());
        assert_eq!(cell.hit_count(), None);
        assert_eq!(cell.icon(), None);
    }

    #[test]
    fn test_serialization() {
        let cell = Cell::Filled {
            icon: icon(),
            hit_count: 3,
            multi_hit: true,
        };

        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();

        assert_eq!(cell, deserialized);
    }
}
