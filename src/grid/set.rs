//! Card sets and the overall generation result.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::CardRng;

/// Characters an identifier is drawn from.
const IDENTIFIER_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random characters after the `ID:` prefix.
const IDENTIFIER_LENGTH: usize = 3;

/// Short human-writable tag shared by every card in a set, e.g. `ID:K7Q`.
///
/// Identifiers are sampled independently per set with no collision check
/// against previously issued tags. With 36^3 combinations, two sets in one
/// batch can in principle receive the same tag; the surrounding product has
/// always accepted that, so this type deliberately does not deduplicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetIdentifier(String);

impl SetIdentifier {
    /// Sample a fresh identifier.
    #[must_use]
    pub fn generate(rng: &mut CardRng) -> Self {
        let mut tag = String::with_capacity(3 + IDENTIFIER_LENGTH);
        tag.push_str("ID:");
        for _ in 0..IDENTIFIER_LENGTH {
            let idx = rng.gen_range_usize(0..IDENTIFIER_ALPHABET.len());
            tag.push(IDENTIFIER_ALPHABET[idx] as char);
        }
        Self(tag)
    }

    /// The full tag, prefix included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SetIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A logical deck of cards sharing one identifier, printed together for
/// one group of players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    /// Tag shared by every card in this set.
    pub identifier: SetIdentifier,

    /// The cards, in generation order.
    pub cards: Vec<Card>,
}

/// Output of one generation call: one entry per requested set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The generated sets, in request order. Length equals the requested
    /// set count.
    pub sets: Vec<CardSet>,
}

impl GenerationResult {
    /// Total number of cards across all sets.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.sets.iter().map(|set| set.cards.len()).sum()
    }
}
