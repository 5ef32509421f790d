//! Persistence façade over the three durable collections.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use barmaster_core::{EventPlanId, InventoryItemId, RecipeId};
use barmaster_inventory::{InventoryDraft, InventoryItem, Recipe, RecipeDraft};
use barmaster_planning::EventPlan;

use crate::error::StoreError;
use crate::seed::{seed_inventory, seed_recipes};
use crate::store::{InMemoryRecordStore, JsonFileStore, RecordStore};

pub const INVENTORY_FILE: &str = "barmaster_inventory.json";
pub const RECIPES_FILE: &str = "barmaster_recipes.json";
pub const EVENTS_FILE: &str = "barmaster_events.json";

/// Events and inventory read together for one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub events: Vec<EventPlan>,
    pub inventory: Vec<InventoryItem>,
}

pub struct StorageService {
    events: Arc<dyn RecordStore<EventPlan>>,
    inventory: Arc<dyn RecordStore<InventoryItem>>,
    recipes: Arc<dyn RecordStore<Recipe>>,
}

impl core::fmt::Debug for StorageService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StorageService").finish_non_exhaustive()
    }
}

impl StorageService {
    pub fn new(
        events: Arc<dyn RecordStore<EventPlan>>,
        inventory: Arc<dyn RecordStore<InventoryItem>>,
        recipes: Arc<dyn RecordStore<Recipe>>,
    ) -> Self {
        Self {
            events,
            inventory,
            recipes,
        }
    }

    /// In-memory collections holding the seed inventory and recipes.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRecordStore::<EventPlan>::new()),
            Arc::new(InMemoryRecordStore::with_records(seed_inventory(Utc::now()))),
            Arc::new(InMemoryRecordStore::with_records(seed_recipes())),
        )
    }

    /// In-memory collections with no records at all.
    pub fn empty() -> Self {
        Self::new(
            Arc::new(InMemoryRecordStore::<EventPlan>::new()),
            Arc::new(InMemoryRecordStore::<InventoryItem>::new()),
            Arc::new(InMemoryRecordStore::<Recipe>::new()),
        )
    }

    /// One JSON file per collection inside `dir` (created if missing).
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        tracing::info!(dir = %dir.display(), "opening JSON collections");

        Ok(Self::new(
            Arc::new(JsonFileStore::<EventPlan>::new(dir.join(EVENTS_FILE))),
            Arc::new(JsonFileStore::with_seed(dir.join(INVENTORY_FILE), seed_inventory(Utc::now()))),
            Arc::new(JsonFileStore::with_seed(dir.join(RECIPES_FILE), seed_recipes())),
        ))
    }

    // Inventory

    pub fn inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        self.inventory.list()
    }

    pub fn save_inventory_item(&self, item: InventoryItem) -> Result<(), StoreError> {
        self.inventory.save(item)
    }

    /// Validate a form draft, stamp it and save it.
    pub fn save_inventory_draft(
        &self,
        draft: InventoryDraft,
        now: DateTime<Utc>,
    ) -> Result<InventoryItem, StoreError> {
        let item = draft.into_item(now)?;
        self.inventory.save(item.clone())?;
        Ok(item)
    }

    pub fn delete_inventory_item(&self, id: &InventoryItemId) -> Result<bool, StoreError> {
        self.inventory.delete(id)
    }

    // Recipes

    pub fn recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        self.recipes.list()
    }

    pub fn save_recipe(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let recipe = draft.into_recipe()?;
        self.recipes.save(recipe.clone())?;
        Ok(recipe)
    }

    pub fn delete_recipe(&self, id: &RecipeId) -> Result<bool, StoreError> {
        self.recipes.delete(id)
    }

    // Events

    /// All events, with fields missing from older records filled in.
    pub fn events(&self) -> Result<Vec<EventPlan>, StoreError> {
        Ok(self.events.list()?.into_iter().map(EventPlan::migrate).collect())
    }

    pub fn event_by_id(&self, id: &EventPlanId) -> Result<Option<EventPlan>, StoreError> {
        Ok(self.events.get(id)?.map(EventPlan::migrate))
    }

    pub fn save_event(&self, event: EventPlan) -> Result<(), StoreError> {
        self.events.save(event)
    }

    pub fn delete_event(&self, id: &EventPlanId) -> Result<bool, StoreError> {
        self.events.delete(id)
    }

    pub fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot {
            events: self.events()?,
            inventory: self.inventory()?,
        })
    }
}
