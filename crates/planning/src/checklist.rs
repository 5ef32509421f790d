use serde::{Deserialize, Serialize};

/// Closed set of checklist categories.
///
/// Stored records use the Portuguese labels; the English names are accepted on
/// input as aliases.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistCategory {
    #[serde(rename = "Bebida", alias = "Beverage")]
    Beverage,
    #[serde(rename = "Insumo", alias = "Supply")]
    Supply,
    #[serde(rename = "Xarope", alias = "Syrup")]
    Syrup,
    #[serde(rename = "Vidraria", alias = "Glassware")]
    Glassware,
    #[serde(rename = "Utensilio", alias = "Utensil")]
    Utensil,
    #[serde(rename = "Estrutura", alias = "Structure")]
    Structure,
    #[serde(rename = "Animacao", alias = "Entertainment")]
    Entertainment,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 7] = [
        ChecklistCategory::Beverage,
        ChecklistCategory::Supply,
        ChecklistCategory::Syrup,
        ChecklistCategory::Glassware,
        ChecklistCategory::Utensil,
        ChecklistCategory::Structure,
        ChecklistCategory::Entertainment,
    ];

    /// Stored label.
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistCategory::Beverage => "Bebida",
            ChecklistCategory::Supply => "Insumo",
            ChecklistCategory::Syrup => "Xarope",
            ChecklistCategory::Glassware => "Vidraria",
            ChecklistCategory::Utensil => "Utensilio",
            ChecklistCategory::Structure => "Estrutura",
            ChecklistCategory::Entertainment => "Animacao",
        }
    }
}

impl core::fmt::Display for ChecklistCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories shown in the per-category packing breakdown.
pub const PROGRESS_CATEGORIES: [ChecklistCategory; 4] = [
    ChecklistCategory::Beverage,
    ChecklistCategory::Glassware,
    ChecklistCategory::Supply,
    ChecklistCategory::Structure,
];

/// One logistics line of an event checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub name: String,
    pub category: ChecklistCategory,
    pub quantity_needed: f64,
    #[serde(default)]
    pub quantity_packed: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_packed: bool,
}

impl ChecklistItem {
    /// Empty line added from the checklist editor.
    pub fn blank(category: ChecklistCategory) -> Self {
        Self {
            name: String::new(),
            category,
            quantity_needed: 0.0,
            quantity_packed: 0.0,
            notes: String::new(),
            is_packed: false,
        }
    }
}

/// Checklist line proposed by the suggestion service.
///
/// Carries no packing state: any packed fields in the raw payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedItem {
    pub name: String,
    pub category: ChecklistCategory,
    pub quantity_needed: f64,
    #[serde(default)]
    pub notes: String,
}

/// Packed / total counts with a rounded percentage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct PackingProgress {
    pub packed: usize,
    pub total: usize,
    pub percent: u8,
}

impl PackingProgress {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a ChecklistItem>) -> Self {
        let (packed, total) = items
            .into_iter()
            .fold((0usize, 0usize), |(p, t), i| (p + usize::from(i.is_packed), t + 1));

        let percent = if total == 0 {
            0
        } else {
            ((packed as f64 / total as f64) * 100.0).round() as u8
        };

        Self {
            packed,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, packed: bool) -> ChecklistItem {
        ChecklistItem {
            is_packed: packed,
            name: name.to_string(),
            ..ChecklistItem::blank(ChecklistCategory::Beverage)
        }
    }

    #[test]
    fn category_accepts_stored_and_english_labels() {
        let stored: ChecklistCategory = serde_json::from_str("\"Vidraria\"").unwrap();
        let english: ChecklistCategory = serde_json::from_str("\"Glassware\"").unwrap();
        assert_eq!(stored, ChecklistCategory::Glassware);
        assert_eq!(english, ChecklistCategory::Glassware);
        assert_eq!(serde_json::to_string(&english).unwrap(), "\"Vidraria\"");
    }

    #[test]
    fn progress_rounds_and_handles_empty() {
        assert_eq!(PackingProgress::from_items(std::iter::empty()).percent, 0);

        let items = vec![line("Gin", true), line("Vodka", false), line("Rum", false)];
        let p = PackingProgress::from_items(&items);
        assert_eq!((p.packed, p.total, p.percent), (1, 3, 33));
        assert!(!p.is_complete());

        let done = vec![line("Gin", true)];
        assert!(PackingProgress::from_items(&done).is_complete());
    }

    #[test]
    fn suggestion_ignores_packed_fields_in_payload() {
        let s: SuggestedItem = serde_json::from_str(
            r#"{"name":"Gelo","category":"Insumo","quantityNeeded":40,"isPacked":true,"quantityPacked":40}"#,
        )
        .unwrap();
        assert_eq!(s.quantity_needed, 40.0);
        assert_eq!(s.notes, "");
    }
}
