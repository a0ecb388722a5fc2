//! Word entries and categories.
//!
//! `WordEntry` is the immutable unit of the catalog. Its `category` drives
//! filtering and the variety rule; `difficulty` is display-only.

use serde::{Deserialize, Serialize};

/// Unique identifier for a word in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u32);

impl WordId {
    /// Create a new word ID.
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

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

/// Word category. Serialized as its single-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "A")]
    Action,
    #[serde(rename = "O")]
    Object,
    #[serde(rename = "P")]
    PersonPlace,
    #[serde(rename = "L")]
    Media,
    #[serde(rename = "D")]
    Hard,
}

impl Category {
    /// The full category universe.
    pub const ALL: [Category; 5] = [
        Category::Action,
        Category::Object,
        Category::PersonPlace,
        Category::Media,
        Category::Hard,
    ];

    /// Single-letter wire code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Category::Action => 'A',
            Category::Object => 'O',
            Category::PersonPlace => 'P',
            Category::Media => 'L',
            Category::Hard => 'D',
        }
    }

    /// Parse a wire code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.code() == code)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Action => "Action",
            Category::Object => "Objects",
            Category::PersonPlace => "People",
            Category::Media => "Media",
            Category::Hard => "Hard",
        }
    }

    /// Short description shown under the label on the setup screen.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Category::Action => "Verbs & movements",
            Category::Object => "Things & stuff",
            Category::PersonPlace => "Places & animals",
            Category::Media => "Movies & books",
            Category::Hard => "Brain teasers",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of categories.
///
/// Iterates in `Category::ALL` order. Serialized as a list of codes.
///
/// ```
/// use charades_engine::words::{Category, CategorySet};
///
/// let mut set = CategorySet::from_iter([Category::Action, Category::Media]);
/// assert!(set.contains(Category::Media));
///
/// set.remove(Category::Media);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Category>", from = "Vec<Category>")]
pub struct CategorySet(u8);

impl CategorySet {
    /// No categories.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every category.
    #[must_use]
    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    #[must_use]
    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    /// Add a category. Returns true if it was not already present.
    pub fn insert(&mut self, category: Category) -> bool {
        let added = !self.contains(category);
        self.0 |= category.bit();
        added
    }

    /// Remove a category. Returns true if it was present.
    pub fn remove(&mut self, category: Category) -> bool {
        let removed = self.contains(category);
        self.0 &= !category.bit();
        removed
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate in `Category::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(set: CategorySet) -> Self {
        set.iter().collect()
    }
}

/// A single word in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,

    /// Text to act out. Opaque to the engine.
    #[serde(rename = "word")]
    pub text: String,

    pub category: Category,

    /// 1 (easy) to 3 (hard). Display only.
    pub difficulty: u8,
}

impl WordEntry {
    /// Create a new entry with difficulty 1.
    pub fn new(id: WordId, text: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            difficulty: 1,
        }
    }

    /// Set the difficulty rating.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id() {
        let id = WordId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Word(5)");
    }

    #[test]
    fn test_category_codes() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code('Z'), None);
        assert_eq!(Category::Media.code(), 'L');
        assert_eq!(Category::Hard.code(), 'D');
    }

    #[test]
    fn test_category_serde_uses_codes() {
        let json = serde_json::to_string(&Category::PersonPlace).unwrap();
        assert_eq!(json, "\"P\"");

        let parsed: Category = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(parsed, Category::Media);
    }

    #[test]
    fn test_category_set_insert_remove() {
        let mut set = CategorySet::empty();
        assert!(set.is_empty());

        assert!(set.insert(Category::Object));
        assert!(!set.insert(Category::Object));
        assert_eq!(set.len(), 1);

        assert!(set.remove(Category::Object));
        assert!(!set.remove(Category::Object));
        assert!(set.is_empty());
    }

    #[test]
    fn test_category_set_all() {
        let all = CategorySet::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all.iter().collect::<Vec<_>>(), Category::ALL.to_vec());
    }

    #[test]
    fn test_category_set_iter_order() {
        let set = CategorySet::from_iter([Category::Hard, Category::Action]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Category::Action, Category::Hard]);
    }

    #[test]
    fn test_category_set_serde() {
        let set = CategorySet::from_iter([Category::Action, Category::Media]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"A\",\"L\"]");

        let parsed: CategorySet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_word_entry_json_shape() {
        let entry: WordEntry =
            serde_json::from_str(r#"{"id": 7, "word": "Juggle", "category": "A", "difficulty": 2}"#)
                .unwrap();

        assert_eq!(entry, WordEntry::new(WordId::new(7), "Juggle", Category::Action).with_difficulty(2));
    }
}
