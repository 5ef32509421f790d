//! Proportional share breakdown for ring charts.

use serde::{Deserialize, Serialize};

use barmaster_core::{DomainError, DomainResult, InventoryItemId, ValueObject};
use barmaster_inventory::InventoryItem;

/// Colours assigned by rank, cycling when there are more items than colours.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#64ffda", "#3b82f6", "#1d4ed8", "#818cf8", "#c084fc", "#94a3b8",
];

/// Ordered, non-empty colour list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> DomainResult<Self> {
        if colors.is_empty() {
            return Err(DomainError::validation("palette needs at least one colour"));
        }
        Ok(Self { colors })
    }

    /// Colour for the item at `rank` (0 = largest).
    pub fn color_for(&self, rank: usize) -> &str {
        &self.colors[rank % self.colors.len()]
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Palette> for Vec<String> {
    fn from(value: Palette) -> Self {
        value.colors
    }
}

/// One arc of the ring: `[start, end)` in percent of the whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSegment {
    pub item_id: InventoryItemId,
    pub name: String,
    pub quantity: f64,
    pub percent: f64,
    pub start: f64,
    pub end: f64,
    pub color: String,
}

impl ValueObject for ShareSegment {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareBreakdown {
    pub total: f64,
    /// Largest quantity first.
    pub segments: Vec<ShareSegment>,
}

impl ShareBreakdown {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// CSS `conic-gradient` stops, e.g. `#64ffda 0% 50%, #3b82f6 50% 100%`.
    pub fn conic_gradient(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("{} {}% {}%", s.color, s.start, s.end))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Cumulative percentage segments for a subset of inventory.
///
/// A zero total gives every segment 0% instead of dividing by zero.
pub fn share_breakdown<'a>(
    items: impl IntoIterator<Item = &'a InventoryItem>,
    palette: &Palette,
) -> ShareBreakdown {
    let mut sorted: Vec<&InventoryItem> = items.into_iter().collect();
    sorted.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));

    let total: f64 = sorted.iter().map(|i| i.quantity).sum();

    let mut cumulative = 0.0;
    let segments = sorted
        .iter()
        .enumerate()
        .map(|(rank, item)| {
            let percent = if total > 0.0 {
                item.quantity / total * 100.0
            } else {
                0.0
            };
            let start = cumulative;
            cumulative += percent;
            ShareSegment {
                item_id: item.id,
                name: item.name.clone(),
                quantity: item.quantity,
                percent,
                start,
                end: cumulative,
                color: palette.color_for(rank).to_string(),
            }
        })
        .collect();

    ShareBreakdown { total, segments }
}

/// Breakdown restricted to one inventory category.
pub fn category_breakdown(inventory: &[InventoryItem], category: &str, palette: &Palette) -> ShareBreakdown {
    share_breakdown(inventory.iter().filter(|i| i.category == category), palette)
}
