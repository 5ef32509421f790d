//! Application services composing storage, suggestions and the engine.

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};

use barmaster_ai::{
    ChecklistSuggester, RecipeSuggester, SuggestionOutcome, fetch_suggestions, suggest_recipe,
};
use barmaster_core::{DomainError, EventPlanId, ShiftId};
use barmaster_inventory::Recipe;
use barmaster_logistics::{
    DashboardSnapshot, LogisticsConfig, MergeOutcome, build_dashboard, fresh_checklist,
    merge_suggestions,
};
use barmaster_planning::{EventDraft, EventPlan, ShiftDraft};

use crate::error::{ServiceError, StoreError};
use crate::storage::StorageService;

/// Checklist after merging suggestions; not yet saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistRefresh {
    pub event: EventPlan,
    pub outcomes: Vec<MergeOutcome>,
    /// Set when no suggestions could be used; the checklist is then unchanged.
    pub notice: Option<String>,
}

pub struct PlanningService {
    storage: Arc<StorageService>,
    suggester: Arc<dyn ChecklistSuggester>,
}

impl PlanningService {
    pub fn new(storage: Arc<StorageService>, suggester: Arc<dyn ChecklistSuggester>) -> Self {
        Self { storage, suggester }
    }

    fn load(&self, id: &EventPlanId) -> Result<EventPlan, StoreError> {
        self.storage
            .event_by_id(id)?
            .ok_or_else(|| StoreError::Domain(DomainError::not_found(format!("event {id}"))))
    }

    fn touch_and_save(&self, mut event: EventPlan) -> Result<EventPlan, StoreError> {
        event.updated_at = Utc::now();
        self.storage.save_event(event.clone())?;
        Ok(event)
    }

    /// Planner flow: replace the draft's checklist with fresh suggestions.
    ///
    /// On failure the draft is returned untouched together with the notice.
    pub fn suggest_for_draft(&self, mut draft: EventDraft) -> (EventDraft, Option<String>) {
        match fetch_suggestions(self.suggester.as_ref(), draft.guest_count, draft.event_type) {
            SuggestionOutcome::Suggested(items) => {
                draft.checklist = fresh_checklist(&items);
                (draft, None)
            }
            SuggestionOutcome::Unavailable { notice } => (draft, Some(notice)),
        }
    }

    pub fn create_event(&self, draft: EventDraft) -> Result<EventPlan, StoreError> {
        let event = draft.into_plan(Utc::now())?;
        self.storage.save_event(event.clone())?;
        tracing::info!(event_id = %event.id, name = %event.name, "created event");
        Ok(event)
    }

    /// Editor flow: merge suggestions into the event's current checklist.
    pub fn refresh_checklist(&self, event: &EventPlan) -> ChecklistRefresh {
        let outcome = fetch_suggestions(self.suggester.as_ref(), event.guest_count, event.event_type);
        let mut refreshed = event.clone();

        match outcome {
            SuggestionOutcome::Suggested(items) => {
                let merged = merge_suggestions(&event.checklist, &items);
                refreshed.checklist = merged.checklist;
                ChecklistRefresh {
                    event: refreshed,
                    outcomes: merged.outcomes,
                    notice: None,
                }
            }
            SuggestionOutcome::Unavailable { notice } => ChecklistRefresh {
                event: refreshed,
                outcomes: Vec::new(),
                notice: Some(notice),
            },
        }
    }

    /// Persist an edited event.
    pub fn save_event(&self, event: EventPlan) -> Result<EventPlan, StoreError> {
        self.touch_and_save(event)
    }

    pub fn toggle_packed(&self, id: &EventPlanId, index: usize) -> Result<EventPlan, StoreError> {
        let mut event = self.load(id)?;
        event.toggle_packed(index)?;
        self.touch_and_save(event)
    }

    pub fn save_shift(&self, id: &EventPlanId, draft: ShiftDraft) -> Result<EventPlan, StoreError> {
        let mut event = self.load(id)?;
        event.save_shift(draft)?;
        self.touch_and_save(event)
    }

    pub fn remove_shift(&self, id: &EventPlanId, shift_id: ShiftId) -> Result<EventPlan, StoreError> {
        let mut event = self.load(id)?;
        if !event.remove_shift(shift_id) {
            return Err(DomainError::not_found(format!("shift {shift_id}")).into());
        }
        self.touch_and_save(event)
    }
}

/// Recipe book flows that involve the suggestion service.
pub struct RecipeService {
    storage: Arc<StorageService>,
    suggester: Arc<dyn RecipeSuggester>,
}

impl RecipeService {
    pub fn new(storage: Arc<StorageService>, suggester: Arc<dyn RecipeSuggester>) -> Self {
        Self { storage, suggester }
    }

    /// Ask for a recipe built around `ingredients` and add it to the book.
    pub fn suggest(&self, ingredients: &str) -> Result<Recipe, ServiceError> {
        let draft = suggest_recipe(self.suggester.as_ref(), ingredients)?;
        let recipe = self.storage.save_recipe(draft)?;
        tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "saved suggested recipe");
        Ok(recipe)
    }
}

pub struct DashboardService {
    storage: Arc<StorageService>,
    config: LogisticsConfig,
}

impl DashboardService {
    pub fn new(storage: Arc<StorageService>, config: LogisticsConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &LogisticsConfig {
        &self.config
    }

    /// Recompute the dashboard from a fresh snapshot.
    pub fn snapshot(&self, today: NaiveDate) -> Result<DashboardSnapshot, StoreError> {
        let snapshot = self.storage.snapshot()?;
        Ok(build_dashboard(today, &snapshot.events, &snapshot.inventory, &self.config))
    }

    /// Dashboard anchored on today in the host's local zone.
    pub fn snapshot_local(&self) -> Result<DashboardSnapshot, StoreError> {
        self.snapshot(Local::now().date_naive())
    }
}
