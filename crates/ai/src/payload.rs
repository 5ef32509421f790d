//! Parsing of suggestion service answers.

use serde_json::Value as JsonValue;

use barmaster_inventory::RecipeDraft;
use barmaster_planning::SuggestedItem;

use crate::result::AiError;

/// Remove Markdown code-fence markup (```` ```json ```` and ```` ``` ````) and
/// surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a checklist answer into suggestions.
///
/// The answer must be a JSON array, otherwise [`AiError::MalformedPayload`].
/// Elements that do not fit the [`SuggestedItem`] shape (missing fields,
/// unknown category, negative quantity) are skipped with a warning. Packed
/// fields in the payload are ignored.
pub fn parse_checklist_suggestions(text: &str) -> Result<Vec<SuggestedItem>, AiError> {
    let cleaned = strip_code_fences(text);
    let values: Vec<JsonValue> =
        serde_json::from_str(&cleaned).map_err(|e| AiError::MalformedPayload(e.to_string()))?;

    let mut items = Vec::with_capacity(values.len());
    for (position, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<SuggestedItem>(value) {
            Ok(item) if item.quantity_needed >= 0.0 => items.push(item),
            Ok(item) => {
                tracing::warn!(position, name = %item.name, "skipping suggestion with negative quantity")
            }
            Err(e) => tracing::warn!(position, error = %e, "skipping malformed suggestion"),
        }
    }
    Ok(items)
}

/// Parse a recipe answer (`name`, `instructions`, `glassware`, `ingredients`).
pub fn parse_recipe_suggestion(text: &str) -> Result<RecipeDraft, AiError> {
    let cleaned = strip_code_fences(text);
    let draft: RecipeDraft =
        serde_json::from_str(&cleaned).map_err(|e| AiError::MalformedPayload(e.to_string()))?;
    if draft.name.trim().is_empty() {
        return Err(AiError::MalformedPayload("recipe has no name".to_string()));
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barmaster_inventory::Unit;
    use barmaster_planning::ChecklistCategory;

    #[test]
    fn strips_fenced_block() {
        let text = "```json\n[{\"a\":1}]\n```\n";
        assert_eq!(strip_code_fences(text), "[{\"a\":1}]");
        assert_eq!(strip_code_fences("  []  "), "[]");
    }

    #[test]
    fn parses_fenced_checklist() {
        let text = r#"```json
        [
          {"name": "Gelo", "category": "Insumo", "quantityNeeded": 60, "notes": "em cubos"},
          {"name": "Copo Long Drink", "category": "Vidraria", "quantityNeeded": 250}
        ]
        ```"#;
        let items = parse_checklist_suggestions(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, ChecklistCategory::Supply);
        assert_eq!(items[1].notes, "");
    }

    #[test]
    fn non_array_payload_is_malformed() {
        for text in ["not json", "{\"name\":\"Gelo\"}", "", "Erro ao gerar"] {
            assert!(matches!(
                parse_checklist_suggestions(text),
                Err(AiError::MalformedPayload(_))
            ));
        }
    }

    #[test]
    fn skips_elements_that_do_not_fit() {
        let text = r#"[
            {"name": "Gin", "category": "Bebida", "quantityNeeded": 6},
            {"name": "Palco", "category": "Palco", "quantityNeeded": 1},
            {"name": "Sem quantidade", "category": "Insumo"},
            {"name": "Limão", "category": "Insumo", "quantityNeeded": -4},
            42
        ]"#;
        let items = parse_checklist_suggestions(text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Gin");
    }

    #[test]
    fn empty_array_is_no_suggestions() {
        assert!(parse_checklist_suggestions("[]").unwrap().is_empty());
    }

    #[test]
    fn parses_recipe_answer() {
        let text = r#"```json
        {"name": "Moscow Mule", "instructions": "Gelo na caneca.", "glassware": "Caneca Cobre",
         "ingredients": [{"name": "Vodka", "amount": 50, "unit": "ml"}]}
        ```"#;
        let draft = parse_recipe_suggestion(text).unwrap();
        assert_eq!(draft.name, "Moscow Mule");
        assert_eq!(draft.ingredients[0].unit, Unit::Millilitre);
        assert!(draft.id.is_none());
    }

    #[test]
    fn recipe_without_name_is_malformed() {
        assert!(parse_recipe_suggestion(r#"{"name": " "}"#).is_err());
        assert!(parse_recipe_suggestion("Erro ao gerar receita.").is_err());
    }
}
