//! Weekly dashboard composition.

use chrono::NaiveDate;
use serde::Serialize;

use barmaster_core::EventPlanId;
use barmaster_inventory::InventoryItem;
use barmaster_planning::{EventPlan, EventType};

use crate::calendar::CalendarWindow;
use crate::config::LogisticsConfig;
use crate::reconcile::{LogisticsReportEntry, logistics_report};
use crate::share::{ShareBreakdown, category_breakdown};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub id: EventPlanId,
    pub name: String,
    pub event_type: EventType,
    pub time: Option<String>,
}

impl From<&EventPlan> for EventSummary {
    fn from(event: &EventPlan) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            event_type: event.event_type,
            time: event.time.clone(),
        }
    }
}

/// One column of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<EventSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub days: Vec<DaySchedule>,
    pub events_in_window: usize,
    pub logistics: Vec<LogisticsReportEntry>,
    pub share_category: String,
    pub shares: ShareBreakdown,
    pub gradient: String,
}

/// Compose schedule, logistics report and share chart from one snapshot.
pub fn build_dashboard(
    today: NaiveDate,
    events: &[EventPlan],
    inventory: &[InventoryItem],
    config: &LogisticsConfig,
) -> DashboardSnapshot {
    let window = CalendarWindow::starting(today, config.window_days);

    let days = window
        .days()
        .iter()
        .enumerate()
        .map(|(i, day)| DaySchedule {
            date: *day,
            is_today: i == 0,
            events: CalendarWindow::events_on(*day, events)
                .into_iter()
                .map(EventSummary::from)
                .collect(),
        })
        .collect();

    let events_in_window = window.events_within(events).len();
    let logistics = logistics_report(&window, events, inventory, config);
    let shares = category_breakdown(inventory, &config.share_category, &config.palette);
    let gradient = shares.conic_gradient();

    tracing::debug!(
        %today,
        events_in_window,
        report_rows = logistics.len(),
        segments = shares.segments.len(),
        "built dashboard snapshot"
    );

    DashboardSnapshot {
        days,
        events_in_window,
        logistics,
        share_category: config.share_category.clone(),
        shares,
        gradient,
    }
}
