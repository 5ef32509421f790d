//! `barmaster-infra`: persistence façade and application services.
//!
//! Stores hold the three durable collections (events, inventory, recipes).
//! Services load snapshots from them and hand those to the pure engine in
//! `barmaster-logistics`; the engine itself never touches storage.

pub mod error;
pub mod seed;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{ServiceError, StoreError};
pub use services::{ChecklistRefresh, DashboardService, PlanningService, RecipeService};
pub use storage::{Snapshot, StorageService};
pub use store::{InMemoryRecordStore, JsonFileStore, RecordStore};
