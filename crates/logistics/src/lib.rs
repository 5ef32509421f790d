//! `barmaster-logistics`: reconciliation and checklist merge engine.
//!
//! Every function here is synchronous and side-effect free: it takes immutable
//! snapshots of events and inventory and returns freshly computed view values.
//! Nothing is cached between passes; callers recompute from a new snapshot
//! whenever persisted state changes.
//!
//! - [`calendar`]: rolling window of local calendar days, timezone-safe matching
//! - [`demand`]: per-item demand summed across the window's event checklists
//! - [`reconcile`]: demand joined against stock, ranked and truncated
//! - [`merge`]: non-destructive upsert of suggested checklist lines
//! - [`share`]: cumulative percentage segments for ring charts
//! - [`dashboard`]: the composed weekly snapshot

pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod demand;
pub mod merge;
pub mod reconcile;
pub mod share;

pub use calendar::{CalendarDate, CalendarWindow, format_date_br, is_same_day};
pub use config::{LogisticsConfig, MAX_WINDOW_DAYS};
pub use dashboard::{DashboardSnapshot, DaySchedule, build_dashboard};
pub use demand::{DemandLine, DemandTotals, aggregate_demand, normalize_item_name};
pub use merge::{
    MergeKey, MergeOutcome, MergeSummary, admit_suggestion, fresh_checklist, merge_suggestions,
    refresh_quantity,
};
pub use reconcile::{
    DEFAULT_REPORT_LIMIT, LogisticsReportEntry, StockIndex, StockStatus, logistics_report,
    reconcile_stock,
};
pub use share::{DEFAULT_PALETTE, Palette, ShareBreakdown, ShareSegment, share_breakdown};

#[cfg(test)]
mod fixtures;
