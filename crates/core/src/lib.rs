//! `barmaster-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory,
//! planning and logistics crates (no storage, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EventPlanId, InventoryItemId, RecipeId, ShiftId};
pub use value_object::ValueObject;
