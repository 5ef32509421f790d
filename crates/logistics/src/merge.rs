//! Upsert of suggested checklist lines into an edited checklist.
//!
//! Two rules decide the outcome for each suggestion, keyed by
//! (lower-cased name, exact category):
//!
//! - [`refresh_quantity`]: the key already exists. Only `quantity_needed` is
//!   overwritten; notes and packing state belong to the user.
//! - [`admit_suggestion`]: the key is new. The line is appended with packing
//!   state reset, whatever the payload claimed.
//!
//! Quantities are set, never added, so applying the same suggestions again
//! yields the same checklist.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use barmaster_core::ValueObject;
use barmaster_planning::{ChecklistCategory, ChecklistItem, SuggestedItem};

/// Merge identity of a checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    name: String,
    category: ChecklistCategory,
}

impl ValueObject for MergeKey {}

impl MergeKey {
    pub fn new(name: &str, category: ChecklistCategory) -> Self {
        Self {
            name: name.to_lowercase(),
            category,
        }
    }

    pub fn of_item(item: &ChecklistItem) -> Self {
        Self::new(&item.name, item.category)
    }

    pub fn of_suggestion(suggestion: &SuggestedItem) -> Self {
        Self::new(&suggestion.name, suggestion.category)
    }
}

/// What happened to one suggestion, with the checklist position it landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum MergeOutcome {
    Updated(usize),
    Appended(usize),
}

/// Result of one merge pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSummary {
    pub checklist: Vec<ChecklistItem>,
    /// One entry per suggestion, in suggestion order.
    pub outcomes: Vec<MergeOutcome>,
}

impl MergeSummary {
    pub fn updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MergeOutcome::Updated(_)))
            .count()
    }

    pub fn appended(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MergeOutcome::Appended(_)))
            .count()
    }
}

/// Update rule: overwrite the needed quantity, leave everything else alone.
pub fn refresh_quantity(existing: &mut ChecklistItem, suggestion: &SuggestedItem) {
    existing.quantity_needed = suggestion.quantity_needed;
}

/// Append rule: a new line always starts unpacked.
pub fn admit_suggestion(suggestion: &SuggestedItem) -> ChecklistItem {
    ChecklistItem {
        name: suggestion.name.clone(),
        category: suggestion.category,
        quantity_needed: suggestion.quantity_needed,
        quantity_packed: 0.0,
        notes: suggestion.notes.clone(),
        is_packed: false,
    }
}

/// Merge `suggestions` into a copy of `existing`.
///
/// Existing lines keep their relative order; new lines are appended in
/// suggestion order. When the existing checklist already holds duplicate keys
/// the first occurrence is the one updated. A key repeated inside
/// `suggestions` is appended once and then updated by the later occurrences.
pub fn merge_suggestions(existing: &[ChecklistItem], suggestions: &[SuggestedItem]) -> MergeSummary {
    let mut checklist = existing.to_vec();
    let mut positions: HashMap<MergeKey, usize> = HashMap::with_capacity(existing.len() + suggestions.len());
    for (i, item) in checklist.iter().enumerate() {
        positions.entry(MergeKey::of_item(item)).or_insert(i);
    }

    let mut outcomes = Vec::with_capacity(suggestions.len());
    for suggestion in suggestions {
        match positions.entry(MergeKey::of_suggestion(suggestion)) {
            Entry::Occupied(slot) => {
                let i = *slot.get();
                refresh_quantity(&mut checklist[i], suggestion);
                outcomes.push(MergeOutcome::Updated(i));
            }
            Entry::Vacant(slot) => {
                let i = checklist.len();
                checklist.push(admit_suggestion(suggestion));
                slot.insert(i);
                outcomes.push(MergeOutcome::Appended(i));
            }
        }
    }

    let summary = MergeSummary { checklist, outcomes };
    tracing::debug!(
        existing = existing.len(),
        suggestions = suggestions.len(),
        updated = summary.updated(),
        appended = summary.appended(),
        "merged checklist suggestions"
    );
    summary
}

/// Replace a checklist wholesale with suggestions (new-event planner flow).
pub fn fresh_checklist(suggestions: &[SuggestedItem]) -> Vec<ChecklistItem> {
    suggestions.iter().map(admit_suggestion).collect()
}
