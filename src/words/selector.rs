//! Batch selection from the word pool.
//!
//! A batch is drawn in three passes over the eligible words:
//!
//! 1. **Variety**: one word from each guaranteed category that is enabled
//! 2. **Fill**: uniform draws from whatever is left until the batch is full
//! 3. **Shuffle**: so guaranteed categories don't always lead
//!
//! Eligible words are those in an enabled category that have not been
//! shown yet this match. When fewer than a full batch remain, the used
//! history is ignored and the whole filtered catalog becomes eligible again
//! (recycling).

use im::HashSet as ImHashSet;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info, warn};

use super::catalog::WordCatalog;
use super::entry::{Category, CategorySet, WordEntry, WordId};
use crate::core::RandomSource;

/// Words shown per turn.
pub const BATCH_SIZE: usize = 6;

/// Words dealt for one turn.
pub type Batch = SmallVec<[WordEntry; BATCH_SIZE]>;

/// Result of one selection.
#[derive(Clone, Debug)]
pub struct BatchOutcome {
    /// The dealt words, shuffled. Shorter than the batch size only when the
    /// filtered catalog itself is that small.
    pub batch: Batch,

    /// Ids of `batch`, to merge into the used history.
    pub newly_used_ids: SmallVec<[WordId; BATCH_SIZE]>,

    /// The used history was ignored for this draw and must be cleared.
    pub recycled: bool,
}

impl BatchOutcome {
    /// Fold this outcome into a used-word history.
    pub fn merge_into(&self, used: &mut ImHashSet<WordId>) {
        if self.recycled {
            *used = ImHashSet::new();
        }
        used.extend(self.newly_used_ids.iter().copied());
    }
}

/// Draws batches from a catalog.
///
/// ## Example
///
/// ```
/// use charades_engine::core::GameRng;
/// use charades_engine::words::{CategorySet, WordCatalog, WordPoolSelector};
///
/// let catalog = WordCatalog::builtin().unwrap();
/// let selector = WordPoolSelector::default();
/// let mut rng = GameRng::new(42);
///
/// let outcome = selector.generate_batch(&catalog, CategorySet::all(), &Default::default(), &mut rng);
/// assert_eq!(outcome.batch.len(), 6);
/// assert!(!outcome.recycled);
/// ```
#[derive(Clone, Debug)]
pub struct WordPoolSelector {
    batch_size: usize,
    guaranteed: SmallVec<[Category; 5]>,
}

impl Default for WordPoolSelector {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            guaranteed: smallvec![Category::Action, Category::Object, Category::PersonPlace],
        }
    }
}

impl WordPoolSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the categories that get one guaranteed slot, in draw order.
    #[must_use]
    pub fn with_guaranteed(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.guaranteed = categories.into_iter().collect();
        self
    }

    /// Set the number of words per batch.
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Batch size must be at least 1");
        self.batch_size = size;
        self
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    #[must_use]
    pub fn guaranteed(&self) -> &[Category] {
        &self.guaranteed
    }

    /// Draw a batch.
    ///
    /// `used` is only read; apply the result with `BatchOutcome::merge_into`.
    pub fn generate_batch<R: RandomSource>(
        &self,
        catalog: &WordCatalog,
        enabled: CategorySet,
        used: &ImHashSet<WordId>,
        rng: &mut R,
    ) -> BatchOutcome {
        let mut available: Vec<&WordEntry> = catalog
            .filtered(enabled)
            .filter(|w| !used.contains(&w.id))
            .collect();

        let recycled = available.len() < self.batch_size;
        if recycled {
            available = catalog.filtered(enabled).collect();
            info!(
                unused_before = used.len(),
                pool = available.len(),
                "word pool exhausted, recycling used words"
            );
        }

        let mut batch = Batch::new();

        for &category in &self.guaranteed {
            if batch.len() >= self.batch_size || !enabled.contains(category) {
                continue;
            }
            let candidates: Vec<usize> = available
                .iter()
                .enumerate()
                .filter(|(_, w)| w.category == category)
                .map(|(i, _)| i)
                .collect();
            if candidates.is_empty() {
                continue;
            }
            let pick = candidates[rng.gen_index(candidates.len())];
            batch.push(available.swap_remove(pick).clone());
        }

        while batch.len() < self.batch_size && !available.is_empty() {
            let pick = rng.gen_index(available.len());
            batch.push(available.swap_remove(pick).clone());
        }

        rng.shuffle(batch.as_mut_slice());

        if batch.len() < self.batch_size {
            warn!(
                dealt = batch.len(),
                batch_size = self.batch_size,
                "filtered catalog too small for a full batch"
            );
        }

        let newly_used_ids: SmallVec<[WordId; BATCH_SIZE]> = batch.iter().map(|w| w.id).collect();
        debug!(ids = ?newly_used_ids, recycled, "batch generated");

        BatchOutcome {
            batch,
            newly_used_ids,
            recycled,
        }
    }
}
