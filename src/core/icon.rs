//! Icon references - the engine's view of the user's icon pool.
//!
//! The pool is supplied fully materialized by the storage layer; the engine
//! never loads images. `image` is an opaque handle (a path, URL, or blob
//! key) passed through untouched for the rendering layer.

use serde::{Deserialize, Serialize};

/// Unique identifier for an icon within one generation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconId(pub u32);

impl IconId {
    /// Create a new icon ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Icon({})", self.0)
    }
}

/// One selectable icon from the user's curated pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    /// Identifier, unique within the pool passed to one generation call.
    pub id: IconId,

    /// Display name shown under the icon on the printed card.
    pub name: String,

    /// Opaque image handle for the rendering layer.
    pub image: String,
}

impl IconRef {
    /// Create a new icon reference.
    #[must_use]
    pub fn new(id: IconId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}
