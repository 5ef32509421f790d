//! End-to-end reconciliation through storage, services and the engine.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use barmaster_ai::{OfflineSuggester, StaticSuggester};
use barmaster_infra::{DashboardService, PlanningService, StorageService};
use barmaster_inventory::{InventoryDraft, Unit};
use barmaster_logistics::{LogisticsConfig, StockStatus};
use barmaster_planning::{ChecklistCategory, ChecklistItem, EventDraft, EventType};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn line(name: &str, needed: f64) -> ChecklistItem {
    ChecklistItem {
        name: name.to_string(),
        category: ChecklistCategory::Supply,
        quantity_needed: needed,
        quantity_packed: 0.0,
        notes: String::new(),
        is_packed: false,
    }
}

fn event_on(date: &str, checklist: Vec<ChecklistItem>) -> EventDraft {
    EventDraft {
        name: format!("Evento {date}"),
        date: date.to_string(),
        checklist,
        ..EventDraft::default()
    }
}

fn temp_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("barmaster-it-{}", uuid::Uuid::now_v7()))
}

#[test]
fn lime_shortfall_reaches_the_dashboard() {
    let storage = Arc::new(StorageService::empty());
    storage
        .save_inventory_draft(
            InventoryDraft {
                name: "lime".to_string(),
                quantity: 6.0,
                unit: Some(Unit::Unit),
                ..InventoryDraft::default()
            },
            Utc::now(),
        )
        .unwrap();

    let planning = PlanningService::new(storage.clone(), Arc::new(OfflineSuggester));
    planning
        .create_event(event_on("2024-06-10", vec![line("Lime", 5.0)]))
        .unwrap();
    planning
        .create_event(event_on("2024-06-12", vec![line("Lime", 5.0)]))
        .unwrap();
    // Outside the seven-day window.
    planning
        .create_event(event_on("2024-06-17", vec![line("Lime", 100.0)]))
        .unwrap();

    let dashboard = DashboardService::new(storage, LogisticsConfig::default());
    let snapshot = dashboard.snapshot(today()).unwrap();

    assert_eq!(snapshot.days.len(), 7);
    assert_eq!(snapshot.events_in_window, 2);
    assert_eq!(snapshot.days[0].events.len(), 1);
    assert_eq!(snapshot.days[2].events.len(), 1);

    assert_eq!(snapshot.logistics.len(), 1);
    let lime = &snapshot.logistics[0];
    assert_eq!(lime.name, "Lime");
    assert_eq!(lime.needed, 10.0);
    assert_eq!(lime.stock, 6.0);
    assert_eq!(lime.balance, -4.0);
    assert_eq!(lime.status, StockStatus::Deficit);
}

#[test]
fn seeded_storage_feeds_spirit_shares() {
    let storage = Arc::new(StorageService::in_memory());
    let dashboard = DashboardService::new(storage, LogisticsConfig::default());
    let snapshot = dashboard.snapshot(today()).unwrap();

    assert!(snapshot.logistics.is_empty());
    assert_eq!(snapshot.share_category, "Destilado");
    assert_eq!(snapshot.shares.total, 20.0);
    assert_eq!(snapshot.shares.segments.len(), 2);
    assert_eq!(snapshot.shares.segments[0].percent, 60.0);
    assert_eq!(snapshot.shares.segments[1].end, 100.0);
    assert!(snapshot.gradient.ends_with("60% 100%"));
}

#[test]
fn refreshed_checklist_is_saved_and_reconciled() {
    let storage = Arc::new(StorageService::empty());
    let suggester = StaticSuggester::new(
        r#"[
            {"name": "gelo", "category": "Insumo", "quantityNeeded": 80},
            {"name": "Limão Taiti", "category": "Insumo", "quantityNeeded": 30}
        ]"#,
    );
    let planning = PlanningService::new(storage.clone(), Arc::new(suggester));

    let mut packed = line("Gelo", 40.0);
    packed.is_packed = true;
    let event = planning
        .create_event(EventDraft {
            event_type: EventType::Birthday,
            ..event_on("2024-06-12", vec![packed])
        })
        .unwrap();

    let refresh = planning.refresh_checklist(&event);
    assert!(refresh.notice.is_none());
    assert_eq!(refresh.event.checklist.len(), 2);
    assert!(refresh.event.checklist[0].is_packed);
    planning.save_event(refresh.event).unwrap();

    let dashboard = DashboardService::new(storage, LogisticsConfig::default());
    let report = dashboard.snapshot(today()).unwrap().logistics;

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].name, "Gelo");
    assert_eq!(report[0].needed, 80.0);
    assert!(!report[0].matched);
    assert_eq!(report[1].name, "Limão Taiti");
    assert_eq!(report[1].needed, 30.0);
}

#[test]
fn json_collections_survive_reopen() {
    let dir = temp_dir();

    let event_id = {
        let storage = Arc::new(StorageService::open_dir(&dir).unwrap());
        assert_eq!(storage.inventory().unwrap().len(), 6);

        let planning = PlanningService::new(storage.clone(), Arc::new(OfflineSuggester));
        let event = planning
            .create_event(event_on("2024-06-14", vec![line("Vodka Premium", 15.0)]))
            .unwrap();
        planning.toggle_packed(&event.id, 0).unwrap();
        event.id
    };

    let storage = Arc::new(StorageService::open_dir(&dir).unwrap());
    let stored = storage.event_by_id(&event_id).unwrap().unwrap();
    assert!(stored.checklist[0].is_packed);
    assert_eq!(stored.time.as_deref(), Some("19:00"));

    let dashboard = DashboardService::new(storage, LogisticsConfig::default());
    let report = dashboard.snapshot(today()).unwrap().logistics;
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].stock, 12.0);
    assert_eq!(report[0].balance, -3.0);
    assert_eq!(report[0].status, StockStatus::Deficit);

    std::fs::remove_dir_all(&dir).ok();
}
