//! Word catalog and batch selection.
//!
//! ## Key Types
//!
//! - `WordId`, `WordEntry`: catalog entries
//! - `Category`, `CategorySet`: the category tags and filter sets
//! - `WordCatalog`: immutable, validated word list
//! - `WordPoolSelector`: draws a varied, non-repeating batch per turn

pub mod catalog;
pub mod entry;
pub mod selector;

pub use catalog::{CatalogError, WordCatalog};
pub use entry::{Category, CategorySet, WordEntry, WordId};
pub use selector::{Batch, BatchOutcome, WordPoolSelector, BATCH_SIZE};
