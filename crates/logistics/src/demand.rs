//! Demand aggregation across event checklists.

use std::collections::HashMap;

use serde::Serialize;

use barmaster_planning::EventPlan;

/// Display key for an item name: surrounding whitespace removed, case kept.
pub fn normalize_item_name(name: &str) -> &str {
    name.trim()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandLine {
    pub name: String,
    pub needed: f64,
}

/// Total quantity needed per normalized item name.
///
/// Lines keep first-seen order, so later ranking by quantity is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemandTotals {
    lines: Vec<DemandLine>,
    index: HashMap<String, usize>,
}

impl DemandTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to the line for `name`.
    ///
    /// Plain addition: zero and negative quantities are accumulated as given.
    pub fn add(&mut self, name: &str, quantity: f64) {
        let key = normalize_item_name(name);
        match self.index.get(key) {
            Some(&i) => self.lines[i].needed += quantity,
            None => {
                self.index.insert(key.to_string(), self.lines.len());
                self.lines.push(DemandLine {
                    name: key.to_string(),
                    needed: quantity,
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index
            .get(normalize_item_name(name))
            .map(|&i| self.lines[i].needed)
    }

    pub fn lines(&self) -> &[DemandLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<DemandLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Sum `quantity_needed` of every checklist line of every given event.
///
/// Callers restrict `events` to the active window first (see
/// [`CalendarWindow::events_within`](crate::calendar::CalendarWindow::events_within)).
pub fn aggregate_demand<'a>(events: impl IntoIterator<Item = &'a EventPlan>) -> DemandTotals {
    let mut totals = DemandTotals::new();
    let mut event_count = 0usize;
    for event in events {
        event_count += 1;
        for item in &event.checklist {
            totals.add(&item.name, item.quantity_needed);
        }
    }
    tracing::debug!(events = event_count, lines = totals.len(), "aggregated checklist demand");
    totals
}
