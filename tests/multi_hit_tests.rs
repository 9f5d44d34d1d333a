//! Multi-hit annotation behavior across the difficulty presets.

use trip_bingo::{
    expected_multi_hit_count, generate_with_rng, Card, CardRng, Difficulty, GenerationOptions,
    IconId, IconRef,
};

fn pool(n: u32) -> Vec<IconRef> {
    (0..n)
        .map(|i| IconRef::new(IconId::new(i), format!("icon-{i}"), format!("icons/{i}.png")))
        .collect()
}

fn marked_count_bounds(eligible: usize, difficulty: Difficulty) -> (usize, usize) {
    let settings = difficulty.settings();
    let low = (eligible as f64 * f64::from(settings.min_percentage) / 100.0).round() as usize;
    let high = (eligible as f64 * f64::from(settings.max_percentage) / 100.0).round() as usize;
    // +-1 slack for rounding at the range edges
    (low.saturating_sub(1), high + 1)
}

fn assert_multi_hit_invariants(card: &Card, eligible: usize, difficulty: Difficulty) {
    let settings = difficulty.settings();
    let (low, high) = marked_count_bounds(eligible, difficulty);

    let marked = card.multi_hit_cell_count();
    assert!(
        (low..=high).contains(&marked),
        "marked {marked} outside [{low}, {high}] for {difficulty:?}"
    );

    for cell in card.iter_cells() {
        if cell.is_multi_hit() {
            let hits = cell.hit_count().unwrap();
            assert!(
                (settings.min_hits..=settings.max_hits).contains(&hits),
                "hit count {hits} outside preset range for {difficulty:?}"
            );
        } else if !cell.is_free_space() {
            assert_eq!(cell.hit_count(), Some(1));
        }
    }
}

/// 5x5, blank center, HARD: 24 eligible cells, 60-70% marked, 3-5 hits.
#[test]
fn test_hard_5x5_scenario() {
    let options = GenerationOptions::default()
        .with_icons(pool(24))
        .with_grid_size(5)
        .with_center_blank(true)
        .with_multi_hit(Difficulty::Hard);
    let mut rng = CardRng::seeded(42);

    let result = generate_with_rng(&options, &mut rng).unwrap();
    let card = &result.sets[0].cards[0];

    assert!(card.cell(2, 2).unwrap().is_free_space());
    assert_eq!(card.icon_ids().count(), 24);
    assert_multi_hit_invariants(card, 24, Difficulty::Hard);
}

#[test]
fn test_bounds_hold_across_difficulties_and_seeds() {
    for difficulty in [Difficulty::Light, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..20 {
            let options = GenerationOptions::default()
                .with_icons(pool(36))
                .with_grid_size(6)
                .with_multi_hit(difficulty);
            let mut rng = CardRng::seeded(seed);

            let result = generate_with_rng(&options, &mut rng).unwrap();
            assert_multi_hit_invariants(&result.sets[0].cards[0], 36, difficulty);
        }
    }
}

#[test]
fn test_free_space_never_marked() {
    for seed in 0..30 {
        let options = GenerationOptions::default()
            .with_icons(pool(48))
            .with_grid_size(7)
            .with_center_blank(true)
            .with_multi_hit(Difficulty::Hard);
        let mut rng = CardRng::seeded(seed);

        let result = generate_with_rng(&options, &mut rng).unwrap();
        let center = result.sets[0].cards[0].cell(3, 3).unwrap();

        assert!(center.is_free_space());
        assert!(!center.is_multi_hit());
    }
}

#[test]
fn test_disabled_mode_marks_nothing() {
    let options = GenerationOptions::default()
        .with_icons(pool(25))
        .with_grid_size(5);
    let mut rng = CardRng::seeded(42);

    let result = generate_with_rng(&options, &mut rng).unwrap();
    let card = &result.sets[0].cards[0];

    assert_eq!(card.multi_hit_cell_count(), 0);
    for cell in card.iter_cells() {
        assert_eq!(cell.hit_count(), Some(1));
    }
}

/// The preview helper is a midpoint estimate; the count actually generated
/// must stay inside the full preset range around it.
#[test]
fn test_preview_estimate_sits_inside_generated_range() {
    let eligible = 24;
    let expected = expected_multi_hit_count(5, true, Difficulty::Medium);
    let (low, high) = marked_count_bounds(eligible, Difficulty::Medium);

    assert!((low..=high).contains(&expected));
    // 24 * 45% = 10.8 -> 11
    assert_eq!(expected, 11);
}
