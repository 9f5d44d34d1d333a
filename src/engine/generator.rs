//! Card layout: sampling, free-space placement, multi-hit annotation.
//!
//! The single entry point the surrounding product calls. Feasibility is
//! checked once up front; after that every card is laid out independently
//! (or once per set when `same_card_per_set` is on).

use crate::core::{CardRng, Difficulty, GenerationOptions};
use crate::engine::feasibility::{center_blank_applies, check_feasibility};
use crate::error::GenerationError;
use crate::grid::{Card, CardSet, Cell, GenerationResult, SetIdentifier};

/// Generate card sets from the given options, using OS entropy.
///
/// This is the production entry point. For reproducible output (tests,
/// debugging a reported card), use [`generate_with_rng`] with a seeded
/// [`CardRng`].
pub fn generate_bingo_cards(
    options: &GenerationOptions,
) -> Result<GenerationResult, GenerationError> {
    let mut rng = CardRng::from_entropy();
    generate_with_rng(options, &mut rng)
}

/// Generate card sets from the given options with an explicit RNG.
///
/// Fails fast: every error is detected before any sampling, so a failed
/// call never produces partial sets.
pub fn generate_with_rng(
    options: &GenerationOptions,
    rng: &mut CardRng,
) -> Result<GenerationResult, GenerationError> {
    let required = check_feasibility(
        options.icons.len(),
        options.grid_size,
        options.leave_center_blank,
    )?;

    let mut sets = Vec::with_capacity(options.set_count);
    for _ in 0..options.set_count {
        let identifier = SetIdentifier::generate(rng);
        let cards = if options.same_card_per_set {
            // One layout, reused verbatim across the set.
            let card = lay_out_card(options, required, rng);
            vec![card; options.cards_per_set]
        } else {
            (0..options.cards_per_set)
                .map(|_| lay_out_card(options, required, rng))
                .collect()
        };
        sets.push(CardSet { identifier, cards });
    }

    Ok(GenerationResult { sets })
}

/// Lay out one card: sample icons, place the free space, annotate.
fn lay_out_card(options: &GenerationOptions, required: usize, rng: &mut CardRng) -> Card {
    let n = options.grid_size;
    let blank_center = options.leave_center_blank && center_blank_applies(n);
    let center = n / 2;

    let picks = rng.sample(&options.icons, required);
    let mut next_pick = 0;

    let mut cells = Vec::with_capacity(n);
    for row in 0..n {
        let mut row_cells = Vec::with_capacity(n);
        for col in 0..n {
            if blank_center && row == center && col == center {
                row_cells.push(Cell::FreeSpace);
            } else {
                row_cells.push(Cell::filled(picks[next_pick].clone()));
                next_pick += 1;
            }
        }
        cells.push(row_cells);
    }

    let mut card = Card {
        title: options.title.clone(),
        grid_size: n,
        cells,
    };

    if options.multi_hit_mode {
        annotate_multi_hit(&mut card, options.difficulty, rng);
    }

    card
}

/// Mark a difficulty-sized random subset of filled cells as multi-hit.
///
/// The free space is never eligible. The percentage is re-drawn per card
/// so two cards at the same difficulty rarely have the same density.
fn annotate_multi_hit(card: &mut Card, difficulty: Difficulty, rng: &mut CardRng) {
    let settings = difficulty.settings();

    let mut eligible: Vec<(usize, usize)> = Vec::with_capacity(card.grid_size * card.grid_size);
    for (row, row_cells) in card.cells.iter().enumerate() {
        for (col, cell) in row_cells.iter().enumerate() {
            if !cell.is_free_space() {
                eligible.push((row, col));
            }
        }
    }

    let percentage = rng.gen_f64(f64::from(settings.min_percentage)..f64::from(settings.max_percentage));
    let target = ((eligible.len() as f64) * percentage / 100.0).round() as usize;

    rng.shuffle(&mut eligible);
    for &(row, col) in eligible.iter().take(target) {
        let hits = rng.gen_range_u32(settings.min_hits..=settings.max_hits);
        if let Cell::Filled {
            hit_count,
            multi_hit,
            ..
        } = &mut card.cells[row][col]
        {
            *hit_count = hits;
            *multi_hit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IconId, IconRef};
    use std::collections::HashSet;

    fn pool(n: u32) -> Vec<IconRef> {
        (0..n)
            .map(|i| IconRef::new(IconId::new(i), format!("icon-{i}"), format!("{i}.png")))
            .collect()
    }

    #[test]
    fn test_no_duplicate_icons_within_card() {
        let options = GenerationOptions::default()
            .with_icons(pool(30))
            .with_grid_size(5);
        let mut rng = CardRng::seeded(42);

        let result = generate_with_rng(&options, &mut rng).unwrap();
        let card = &result.sets[0].cards[0];

        let ids: Vec<IconId> = card.icon_ids().collect();
        let unique: HashSet<IconId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_input_pool_not_mutated() {
        let icons = pool(30);
        let before = icons.clone();
        let options = GenerationOptions::default()
            .with_icons(icons)
            .with_grid_size(5);
        let mut rng = CardRng::seeded(42);

        let _ = generate_with_rng(&options, &mut rng).unwrap();
        assert_eq!(options.icons, before);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let options = GenerationOptions::default()
            .with_icons(pool(40))
            .with_grid_size(5)
            .with_set_count(2)
            .with_cards_per_set(3)
            .with_multi_hit(Difficulty::Medium);

        let mut rng1 = CardRng::seeded(123);
        let mut rng2 = CardRng::seeded(123);

        let result1 = generate_with_rng(&options, &mut rng1).unwrap();
        let result2 = generate_with_rng(&options, &mut rng2).unwrap();

        assert_eq!(result1, result2);
    }

    #[test]
    fn test_fail_fast_before_sampling() {
        let options = GenerationOptions::default()
            .with_icons(pool(5))
            .with_grid_size(5);
        let mut rng = CardRng::seeded(42);

        assert_eq!(
            generate_with_rng(&options, &mut rng),
            Err(GenerationError::InsufficientIcons {
                required: 25,
                available: 5
            })
        );
    }

    #[test]
    fn test_multi_hit_target_redrawn_per_card() {
        // Over many 8x8 Medium cards the marked-cell count should not be
        // constant, since the percentage is re-drawn each time.
        let options = GenerationOptions::default()
            .with_icons(pool(64))
            .with_grid_size(8)
            .with_cards_per_set(20)
            .with_multi_hit(Difficulty::Medium);
        let mut rng = CardRng::seeded(7);

        let result = generate_with_rng(&options, &mut rng).unwrap();
        let counts: HashSet<usize> = result.sets[0]
            .cards
            .iter()
            .map(Card::multi_hit_cell_count)
            .collect();

        assert!(counts.len() > 1);
    }
}
