//! Word pool selection tests.
//!
//! These tests exercise batch selection through the public API:
//! - Variety across the guaranteed categories
//! - Category filtering and no repeats within a match
//! - Recycling when the pool runs low
//! - Short batches from tiny catalogs

use charades_engine::core::GameRng;
use charades_engine::words::{Category, CategorySet, WordCatalog, WordEntry, WordId, WordPoolSelector};
use im::HashSet as ImHashSet;

fn build_catalog(layout: &[(Category, u32)]) -> WordCatalog {
    let mut entries = Vec::new();
    let mut next = 1;
    for &(category, count) in layout {
        for _ in 0..count {
            entries.push(WordEntry::new(WordId::new(next), format!("{category} {next}"), category));
            next += 1;
        }
    }
    WordCatalog::from_entries(entries).expect("catalog should be valid")
}

/// Three words in each core category, everything enabled, nothing used.
#[test]
fn test_three_by_three_catalog() {
    let catalog = build_catalog(&[
        (Category::Action, 3),
        (Category::Object, 3),
        (Category::PersonPlace, 3),
    ]);
    let selector = WordPoolSelector::new();

    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let outcome = selector.generate_batch(&catalog, CategorySet::all(), &ImHashSet::new(), &mut rng);

        let ids: ImHashSet<WordId> = outcome.batch.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), 6, "seed {seed} produced duplicates");

        for category in [Category::Action, Category::Object, Category::PersonPlace] {
            assert!(
                outcome.batch.iter().any(|w| w.category == category),
                "seed {seed} missing {category}"
            );
        }
    }
}

/// Filtered catalog of 10, all but 4 used: history is dropped and the batch
/// comes from the full 10.
#[test]
fn test_recycling_scenario() {
    let catalog = build_catalog(&[(Category::Media, 10), (Category::Hard, 5)]);
    let enabled = CategorySet::from_iter([Category::Media]);
    let used: ImHashSet<WordId> = (1..=6).map(WordId::new).collect();
    let mut rng = GameRng::new(21);

    let outcome = WordPoolSelector::new().generate_batch(&catalog, enabled, &used, &mut rng);

    assert!(outcome.recycled);
    assert_eq!(outcome.batch.len(), 6);
    assert!(outcome.batch.iter().all(|w| w.category == Category::Media));

    let mut history = used;
    outcome.merge_into(&mut history);
    let expected: ImHashSet<WordId> = outcome.newly_used_ids.iter().copied().collect();
    assert_eq!(history, expected);
}

/// Exactly six unused words left: no recycling, those six are dealt.
#[test]
fn test_exactly_full_batch_left() {
    let catalog = build_catalog(&[(Category::Action, 12)]);
    let used: ImHashSet<WordId> = (1..=6).map(WordId::new).collect();
    let mut rng = GameRng::new(2);

    let outcome = WordPoolSelector::new().generate_batch(&catalog, CategorySet::all(), &used, &mut rng);

    assert!(!outcome.recycled);
    assert!(outcome.batch.iter().all(|w| w.id.raw() > 6));
}

/// Successive batches never repeat until the pool is exhausted.
#[test]
fn test_no_repeats_across_batches() {
    let catalog = WordCatalog::builtin().unwrap();
    let selector = WordPoolSelector::new();
    let mut rng = GameRng::new(99);
    let mut used = ImHashSet::new();
    let mut seen = Vec::new();

    // 50 words: 8 full batches fit before recycling
    for _ in 0..8 {
        let outcome = selector.generate_batch(&catalog, CategorySet::all(), &used, &mut rng);
        assert!(!outcome.recycled);
        outcome.merge_into(&mut used);
        seen.extend(outcome.newly_used_ids.iter().copied());
    }

    let unique: ImHashSet<WordId> = seen.iter().copied().collect();
    assert_eq!(unique.len(), seen.len());

    // 2 words left: the next batch recycles
    let outcome = selector.generate_batch(&catalog, CategorySet::all(), &used, &mut rng);
    assert!(outcome.recycled);
}

/// The variety pass must not pin guaranteed categories to the front.
#[test]
fn test_shuffle_varies_leading_category() {
    let catalog = build_catalog(&[
        (Category::Action, 10),
        (Category::Object, 10),
        (Category::PersonPlace, 10),
        (Category::Media, 10),
    ]);
    let selector = WordPoolSelector::new();
    let mut rng = GameRng::new(5);
    let mut leading = ImHashSet::new();

    for _ in 0..40 {
        let outcome = selector.generate_batch(&catalog, CategorySet::all(), &ImHashSet::new(), &mut rng);
        leading.insert(outcome.batch[0].category);
    }

    assert!(leading.len() > 1);
}

/// Only two words exist for the filter: the batch is just those two.
#[test]
fn test_tiny_catalog_short_batch() {
    let catalog = build_catalog(&[(Category::Hard, 2), (Category::Action, 10)]);
    let enabled = CategorySet::from_iter([Category::Hard]);
    let mut rng = GameRng::new(8);

    let outcome = WordPoolSelector::new().generate_batch(&catalog, enabled, &ImHashSet::new(), &mut rng);

    assert_eq!(outcome.batch.len(), 2);
    assert!(outcome.recycled);
}

/// Seeded selection is reproducible.
#[test]
fn test_seeded_determinism() {
    let catalog = WordCatalog::builtin().unwrap();
    let selector = WordPoolSelector::new();

    let first = selector.generate_batch(&catalog, CategorySet::all(), &ImHashSet::new(), &mut GameRng::new(77));
    let second = selector.generate_batch(&catalog, CategorySet::all(), &ImHashSet::new(), &mut GameRng::new(77));

    assert_eq!(first.newly_used_ids, second.newly_used_ids);
}
