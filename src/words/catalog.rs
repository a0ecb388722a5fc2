//! Word catalog for filtered lookup.
//!
//! The `WordCatalog` holds every word a match can draw from. It is built
//! once, validated, and never mutated afterwards; engines share it through
//! an `Arc`.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::entry::{Category, CategorySet, WordEntry, WordId};

const BUILTIN_WORDS: &str = include_str!("../../data/words.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate word id {0}")]
    DuplicateId(WordId),

    #[error("word {id} has difficulty {difficulty}, expected 1-3")]
    InvalidDifficulty { id: WordId, difficulty: u8 },

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable catalog of words.
///
/// Iteration follows insertion order, so seeded selections are reproducible.
///
/// ## Example
///
/// ```
/// use charades_engine::words::{Category, CategorySet, WordCatalog, WordEntry, WordId};
///
/// let catalog = WordCatalog::from_entries(vec![
///     WordEntry::new(WordId::new(1), "Swim", Category::Action),
///     WordEntry::new(WordId::new(2), "Lamp", Category::Object),
/// ])
/// .unwrap();
///
/// let actions = CategorySet::from_iter([Category::Action]);
/// assert_eq!(catalog.filtered(actions).count(), 1);
/// assert_eq!(catalog.get(WordId::new(2)).unwrap().text, "Lamp");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
    index: FxHashMap<WordId, usize>,
}

impl WordCatalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range difficulty.
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        index.reserve(entries.len());

        for (pos, entry) in entries.iter().enumerate() {
            if !(1..=3).contains(&entry.difficulty) {
                return Err(CatalogError::InvalidDifficulty {
                    id: entry.id,
                    difficulty: entry.difficulty,
                });
            }
            if index.insert(entry.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }

        Ok(Self { entries, index })
    }

    /// Parse a JSON array of `{id, word, category, difficulty}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<WordEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// The word list bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_WORDS)
    }

    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&WordEntry> {
        self.index.get(&id).map(|&pos| &self.entries[pos])
    }

    #[must_use]
    pub fn contains(&self, id: WordId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// Entries whose category is enabled.
    pub fn filtered(&self, enabled: CategorySet) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter().filter(move |w| enabled.contains(w.category))
    }

    /// Entries of a single category.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter().filter(move |w| w.category == category)
    }
}
