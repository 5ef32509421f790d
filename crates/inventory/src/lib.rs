//! Inventory domain module.
//!
//! Stock records and the recipe book, implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod item;
pub mod recipe;
pub mod unit;

pub use item::{ALL_CATEGORIES, DEFAULT_CATEGORY, InventoryDraft, InventoryItem, category_total};
pub use recipe::{Ingredient, Recipe, RecipeDraft};
pub use unit::Unit;
