use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use barmaster_core::{DomainError, DomainResult, Entity, EventPlanId, ShiftId};

use crate::checklist::{ChecklistCategory, ChecklistItem, PROGRESS_CATEGORIES, PackingProgress};
use crate::staff::{ShiftDraft, StaffShift};

/// Start time assumed for events stored without one.
pub const DEFAULT_EVENT_TIME: &str = "19:00";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    #[serde(rename = "Casamento", alias = "Wedding")]
    Wedding,
    #[serde(rename = "Aniversário", alias = "Birthday")]
    Birthday,
    #[serde(rename = "Corporativo", alias = "Corporate")]
    Corporate,
    #[serde(rename = "Outro", alias = "Other")]
    Other,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Wedding => "Casamento",
            EventType::Birthday => "Aniversário",
            EventType::Corporate => "Corporativo",
            EventType::Other => "Outro",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Draft,
    Confirmed,
    Completed,
}

/// A planned event with its checklist and roster.
///
/// `date` is a bare `YYYY-MM-DD` string. It is never converted into an instant,
/// so no timezone is ever attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPlan {
    pub id: EventPlanId,
    pub name: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub guest_count: u32,
    #[serde(default)]
    pub bartender_count: u32,
    #[serde(default)]
    pub drink_menu: Vec<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub staff: Vec<StaffShift>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for EventPlan {
    type Id = EventPlanId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl EventPlan {
    /// Fill fields that older stored records may lack.
    ///
    /// Collections and counters are covered by serde defaults; the start time
    /// also replaces an empty string.
    pub fn migrate(mut self) -> Self {
        if self.time.as_deref().is_none_or(|t| t.trim().is_empty()) {
            self.time = Some(DEFAULT_EVENT_TIME.to_string());
        }
        self
    }

    /// Flip the packed flag of one checklist line, returning the new state.
    pub fn toggle_packed(&mut self, index: usize) -> DomainResult<bool> {
        let item = self
            .checklist
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found(format!("checklist line {index}")))?;
        item.is_packed = !item.is_packed;
        Ok(item.is_packed)
    }

    pub fn remove_checklist_line(&mut self, index: usize) -> DomainResult<ChecklistItem> {
        if index >= self.checklist.len() {
            return Err(DomainError::not_found(format!("checklist line {index}")));
        }
        Ok(self.checklist.remove(index))
    }

    pub fn packing_progress(&self) -> PackingProgress {
        PackingProgress::from_items(&self.checklist)
    }

    pub fn category_progress(&self, category: ChecklistCategory) -> PackingProgress {
        PackingProgress::from_items(self.checklist.iter().filter(|i| i.category == category))
    }

    /// Breakdown for the analytics view.
    pub fn progress_by_category(&self) -> Vec<(ChecklistCategory, PackingProgress)> {
        PROGRESS_CATEGORIES
            .iter()
            .map(|c| (*c, self.category_progress(*c)))
            .collect()
    }

    /// Insert or replace a roster entry keyed by shift id.
    pub fn save_shift(&mut self, draft: ShiftDraft) -> DomainResult<ShiftId> {
        let shift = draft.into_shift()?;
        let id = shift.id;
        match self.staff.iter_mut().find(|s| s.id == id) {
            Some(existing) => *existing = shift,
            None => self.staff.push(shift),
        }
        Ok(id)
    }

    pub fn remove_shift(&mut self, id: ShiftId) -> bool {
        let before = self.staff.len();
        self.staff.retain(|s| s.id != id);
        self.staff.len() != before
    }
}

/// Planner form input for a new event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub event_type: EventType,
    pub guest_count: u32,
    #[serde(default)]
    pub bartender_count: u32,
    #[serde(default)]
    pub drink_menu: Vec<String>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            client_name: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            event_type: EventType::Wedding,
            guest_count: 100,
            bartender_count: 2,
            drink_menu: vec![
                "Gin Tônica".to_string(),
                "Moscow Mule".to_string(),
                "Whisky Sour".to_string(),
            ],
            checklist: Vec::new(),
        }
    }
}

impl EventDraft {
    /// Validate and turn the draft into a new `Draft`-status plan.
    pub fn into_plan(self, now: DateTime<Utc>) -> DomainResult<EventPlan> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("event name cannot be empty"));
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err(DomainError::validation("event date is required"));
        }
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(DomainError::validation("event date must be YYYY-MM-DD"));
        }
        let date = date.to_string();

        let time = (!self.time.trim().is_empty()).then_some(self.time);

        Ok(EventPlan {
            id: EventPlanId::new(),
            name: self.name,
            client_name: self.client_name,
            date: Some(date),
            time,
            location: self.location,
            event_type: self.event_type,
            guest_count: self.guest_count,
            bartender_count: self.bartender_count,
            drink_menu: self.drink_menu,
            status: EventStatus::Draft,
            checklist: self.checklist,
            staff: Vec::new(),
            created_at: now,
            updated_at: now,
        }
        .migrate())
    }
}
