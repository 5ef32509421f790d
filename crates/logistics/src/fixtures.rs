//! Shared builders for unit tests.

use chrono::Utc;

use barmaster_core::{EventPlanId, InventoryItemId};
use barmaster_inventory::{InventoryItem, Unit};
use barmaster_planning::{
    ChecklistCategory, ChecklistItem, EventPlan, EventStatus, EventType, SuggestedItem,
};

pub fn line(name: &str, quantity: f64) -> ChecklistItem {
    ChecklistItem {
        name: name.to_string(),
        quantity_needed: quantity,
        ..ChecklistItem::blank(ChecklistCategory::Supply)
    }
}

pub fn event(checklist: Vec<ChecklistItem>) -> EventPlan {
    dated_event("2024-06-15", checklist)
}

pub fn dated_event(date: &str, checklist: Vec<ChecklistItem>) -> EventPlan {
    EventPlan {
        id: EventPlanId::new(),
        name: format!("Evento {date}"),
        client_name: String::new(),
        date: Some(date.to_string()),
        time: None,
        location: String::new(),
        event_type: EventType::Other,
        guest_count: 50,
        bartender_count: 1,
        drink_menu: Vec::new(),
        status: EventStatus::Draft,
        checklist,
        staff: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn stock(name: &str, category: &str, quantity: f64, unit: Unit) -> InventoryItem {
    InventoryItem {
        id: InventoryItemId::new(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        min_stock: 0.0,
        unit,
        updated_at: Utc::now(),
    }
}

pub fn suggestion(name: &str, category: ChecklistCategory, quantity: f64) -> SuggestedItem {
    SuggestedItem {
        name: name.to_string(),
        category,
        quantity_needed: quantity,
        notes: String::new(),
    }
}
