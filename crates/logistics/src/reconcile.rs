//! Demand vs. stock reconciliation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use barmaster_core::ValueObject;
use barmaster_inventory::{InventoryItem, Unit};
use barmaster_planning::EventPlan;

use crate::calendar::CalendarWindow;
use crate::config::LogisticsConfig;
use crate::demand::{DemandTotals, aggregate_demand};

/// Number of report rows shown when no limit is configured.
pub const DEFAULT_REPORT_LIMIT: usize = 5;

/// Outcome of comparing stock with demand. There is no intermediate state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Sufficient,
    Deficit,
}

/// One reconciled item. Recomputed per pass, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsReportEntry {
    pub name: String,
    pub needed: f64,
    /// Quantity on hand, 0 when no inventory record matched.
    pub stock: f64,
    pub unit: Unit,
    /// Whether an inventory record matched by name.
    pub matched: bool,
    /// `stock - needed`.
    pub balance: f64,
    pub status: StockStatus,
}

impl ValueObject for LogisticsReportEntry {}

impl LogisticsReportEntry {
    pub fn new(name: impl Into<String>, needed: f64, stock: Option<&InventoryItem>, default_unit: Unit) -> Self {
        let (on_hand, unit) = match stock {
            Some(item) => (item.quantity, item.unit),
            None => (0.0, default_unit),
        };
        let balance = on_hand - needed;
        let status = if balance < 0.0 {
            StockStatus::Deficit
        } else {
            StockStatus::Sufficient
        };

        Self {
            name: name.into(),
            needed,
            stock: on_hand,
            unit,
            matched: stock.is_some(),
            balance,
            status,
        }
    }

    pub fn is_deficit(&self) -> bool {
        self.status == StockStatus::Deficit
    }
}

/// Case-insensitive name lookup over an inventory snapshot, built once per pass.
///
/// When several records share a name the first one in snapshot order wins;
/// duplicates are neither summed nor rejected.
#[derive(Debug, Clone)]
pub struct StockIndex<'a> {
    by_name: HashMap<String, &'a InventoryItem>,
}

impl<'a> StockIndex<'a> {
    pub fn new(inventory: &'a [InventoryItem]) -> Self {
        let mut by_name = HashMap::with_capacity(inventory.len());
        for item in inventory {
            if let Entry::Vacant(slot) = by_name.entry(item.name.to_lowercase()) {
                slot.insert(item);
            }
        }
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a InventoryItem> {
        self.by_name.get(&name.to_lowercase()).copied()
    }
}

/// Join demand against stock, keep positive demand, rank by quantity needed
/// (descending, ties in first-seen order) and keep the top `limit` rows.
pub fn reconcile_stock(
    demand: &DemandTotals,
    inventory: &[InventoryItem],
    limit: usize,
    default_unit: Unit,
) -> Vec<LogisticsReportEntry> {
    let index = StockIndex::new(inventory);

    let mut entries: Vec<LogisticsReportEntry> = demand
        .lines()
        .iter()
        .filter(|line| line.needed > 0.0)
        .map(|line| {
            LogisticsReportEntry::new(line.name.clone(), line.needed, index.lookup(&line.name), default_unit)
        })
        .collect();

    entries.sort_by(|a, b| b.needed.total_cmp(&a.needed));
    entries.truncate(limit);

    let deficits = entries.iter().filter(|e| e.is_deficit()).count();
    tracing::debug!(
        demand_lines = demand.len(),
        rows = entries.len(),
        deficits,
        "reconciled demand against stock"
    );
    entries
}

/// Full reconciliation pass: window filter, aggregation, stock join.
pub fn logistics_report(
    window: &CalendarWindow,
    events: &[EventPlan],
    inventory: &[InventoryItem],
    config: &LogisticsConfig,
) -> Vec<LogisticsReportEntry> {
    let demand = aggregate_demand(window.events_within(events));
    reconcile_stock(&demand, inventory, config.report_limit, config.default_unit)
}
