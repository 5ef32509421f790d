use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use barmaster_core::{DomainError, DomainResult, Entity, InventoryItemId};

use crate::unit::Unit;

/// Category assigned when a draft leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Outro";

/// Pseudo-category meaning "every category" in totals and filters.
pub const ALL_CATEGORIES: &str = "Todos";

/// A stock record.
///
/// Category is an open string (`Destilado`, `Xarope`, `Vidraria`, ...). Quantity
/// and minimum stock are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub min_stock: f64,
    pub unit: Unit,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Replenishment is due once stock falls to the threshold.
    pub fn needs_replenishment(&self) -> bool {
        self.quantity <= self.min_stock
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Form input for creating or editing a stock record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDraft {
    /// Present when editing an existing record.
    #[serde(default)]
    pub id: Option<InventoryItemId>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub min_stock: Option<f64>,
    #[serde(default)]
    pub unit: Option<Unit>,
}

impl InventoryDraft {
    /// Validate the draft and stamp it into a record.
    pub fn into_item(self, updated_at: DateTime<Utc>) -> DomainResult<InventoryItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !(self.quantity.is_finite() && self.quantity > 0.0) {
            return Err(DomainError::validation("quantity must be a positive number"));
        }

        let min_stock = self.min_stock.unwrap_or(0.0);
        if !(min_stock.is_finite() && min_stock >= 0.0) {
            return Err(DomainError::validation("minimum stock cannot be negative"));
        }

        let category = match self.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY.to_string(),
        };

        Ok(InventoryItem {
            id: self.id.unwrap_or_default(),
            name: name.to_string(),
            category,
            quantity: self.quantity,
            min_stock,
            unit: self.unit.unwrap_or_default(),
            updated_at,
        })
    }
}

/// Total quantity on hand for one category (or every category for `Todos`).
pub fn category_total(items: &[InventoryItem], category: &str) -> f64 {
    items
        .iter()
        .filter(|i| i.is_in_category(category))
        .map(|i| i.quantity)
        .sum()
}
