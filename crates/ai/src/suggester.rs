use core::num::NonZeroU32;

use barmaster_inventory::RecipeDraft;
use barmaster_planning::{EventType, SuggestedItem};

use crate::payload::{parse_checklist_suggestions, parse_recipe_suggestion};
use crate::prompt::{checklist_prompt, recipe_prompt};
use crate::result::AiError;

/// Validated input for a checklist suggestion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChecklistRequest {
    guest_count: NonZeroU32,
    event_type: EventType,
}

impl ChecklistRequest {
    pub fn new(guest_count: u32, event_type: EventType) -> Result<Self, AiError> {
        let guest_count = NonZeroU32::new(guest_count)
            .ok_or_else(|| AiError::InvalidInput("guest count must be positive".to_string()))?;
        Ok(Self {
            guest_count,
            event_type,
        })
    }

    pub fn guest_count(&self) -> u32 {
        self.guest_count.get()
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Instruction text sent to the service for this request.
    pub fn prompt(&self) -> String {
        checklist_prompt(self.guest_count(), self.event_type)
    }
}

/// Source of checklist suggestions.
///
/// Implementations receive the rendered prompt and return the service's raw
/// text; parsing and recovery happen in [`fetch_suggestions`].
pub trait ChecklistSuggester: Send + Sync {
    fn suggest_checklist(&self, prompt: &str) -> Result<String, AiError>;
}

/// Source of recipe suggestions; receives the rendered recipe prompt.
pub trait RecipeSuggester: Send + Sync {
    fn suggest_recipe(&self, prompt: &str) -> Result<String, AiError>;
}

/// Suggester answering every request with a fixed text (tests, demos).
#[derive(Debug, Clone, Default)]
pub struct StaticSuggester {
    payload: String,
}

impl StaticSuggester {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl ChecklistSuggester for StaticSuggester {
    fn suggest_checklist(&self, _prompt: &str) -> Result<String, AiError> {
        Ok(self.payload.clone())
    }
}

impl RecipeSuggester for StaticSuggester {
    fn suggest_recipe(&self, _prompt: &str) -> Result<String, AiError> {
        Ok(self.payload.clone())
    }
}

/// Suggester used when no service is configured.
#[derive(Debug, Copy, Clone, Default)]
pub struct OfflineSuggester;

impl ChecklistSuggester for OfflineSuggester {
    fn suggest_checklist(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::Unavailable("no suggestion service configured".to_string()))
    }
}

impl RecipeSuggester for OfflineSuggester {
    fn suggest_recipe(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::Unavailable("no suggestion service configured".to_string()))
    }
}

/// Suggestions ready to merge, or a notice for the user and nothing to merge.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Suggested(Vec<SuggestedItem>),
    Unavailable { notice: String },
}

impl SuggestionOutcome {
    /// Items to merge; empty when unavailable.
    pub fn items(&self) -> &[SuggestedItem] {
        match self {
            SuggestionOutcome::Suggested(items) => items,
            SuggestionOutcome::Unavailable { .. } => &[],
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            SuggestionOutcome::Suggested(_) => None,
            SuggestionOutcome::Unavailable { notice } => Some(notice),
        }
    }
}

/// Ask the service for checklist lines. Never fails: any error, an unparsable
/// answer, or an empty list becomes [`SuggestionOutcome::Unavailable`].
pub fn fetch_suggestions(
    suggester: &dyn ChecklistSuggester,
    guest_count: u32,
    event_type: EventType,
) -> SuggestionOutcome {
    let result = ChecklistRequest::new(guest_count, event_type)
        .and_then(|request| suggester.suggest_checklist(&request.prompt()))
        .and_then(non_blank_answer)
        .and_then(|text| parse_checklist_suggestions(&text));

    match result {
        Ok(items) if items.is_empty() => {
            tracing::warn!(guest_count, %event_type, "suggestion service returned no items");
            SuggestionOutcome::Unavailable {
                notice: "no checklist suggestions were returned".to_string(),
            }
        }
        Ok(items) => {
            tracing::debug!(guest_count, %event_type, items = items.len(), "received checklist suggestions");
            SuggestionOutcome::Suggested(items)
        }
        Err(e) => {
            tracing::warn!(guest_count, %event_type, error = %e, "checklist suggestion failed");
            SuggestionOutcome::Unavailable {
                notice: e.to_string(),
            }
        }
    }
}

/// Ask the service for a recipe draft.
pub fn suggest_recipe(suggester: &dyn RecipeSuggester, ingredients: &str) -> Result<RecipeDraft, AiError> {
    if ingredients.trim().is_empty() {
        return Err(AiError::InvalidInput("ingredient list is empty".to_string()));
    }
    let text = non_blank_answer(suggester.suggest_recipe(&recipe_prompt(ingredients.trim()))?)?;
    parse_recipe_suggestion(&text)
}

/// A reachable service that answers with nothing has failed the inference.
fn non_blank_answer(text: String) -> Result<String, AiError> {
    if text.trim().is_empty() {
        return Err(AiError::InferenceFailed("service returned an empty answer".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANSWER: &str = r#"```json
    [{"name": "Gelo", "category": "Insumo", "quantityNeeded": 60, "isPacked": true}]
    ```"#;

    /// Keeps the last prompt it was sent.
    struct Recording {
        answer: String,
        prompt: std::sync::Mutex<Option<String>>,
    }

    impl Recording {
        fn new(answer: &str) -> Self {
            Self {
                answer: answer.to_string(),
                prompt: std::sync::Mutex::new(None),
            }
        }

        fn last_prompt(&self) -> String {
            self.prompt.lock().unwrap().clone().unwrap_or_default()
        }

        fn record(&self, prompt: &str) -> Result<String, AiError> {
            *self.prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.answer.clone())
        }
    }

    impl ChecklistSuggester for Recording {
        fn suggest_checklist(&self, prompt: &str) -> Result<String, AiError> {
            self.record(prompt)
        }
    }

    impl RecipeSuggester for Recording {
        fn suggest_recipe(&self, prompt: &str) -> Result<String, AiError> {
            self.record(prompt)
        }
    }

    #[test]
    fn checklist_service_receives_rendered_prompt() {
        let service = Recording::new(ANSWER);
        fetch_suggestions(&service, 150, EventType::Birthday);

        let prompt = service.last_prompt();
        assert!(prompt.contains("150 guests"));
        assert!(prompt.contains("\"Aniversário\""));
    }

    #[test]
    fn recipe_service_receives_rendered_prompt() {
        let service = Recording::new(r#"{"name": "Caipiroska"}"#);
        suggest_recipe(&service, " vodka, limão ").unwrap();
        assert!(service.last_prompt().contains("ingredients (common additions are fine): vodka, limão."));
    }

    #[test]
    fn blank_answer_is_an_inference_failure() {
        let outcome = fetch_suggestions(&StaticSuggester::new("  \n "), 100, EventType::Wedding);
        assert!(outcome.notice().unwrap().contains("inference failed"));

        assert!(matches!(
            suggest_recipe(&StaticSuggester::new(""), "gin"),
            Err(AiError::InferenceFailed(_))
        ));
    }

    #[test]
    fn request_rejects_zero_guests() {
        assert!(matches!(
            ChecklistRequest::new(0, EventType::Wedding),
            Err(AiError::InvalidInput(_))
        ));
        assert_eq!(ChecklistRequest::new(80, EventType::Birthday).unwrap().guest_count(), 80);
    }

    #[test]
    fn fetch_returns_parsed_items() {
        let outcome = fetch_suggestions(&StaticSuggester::new(ANSWER), 100, EventType::Wedding);
        assert_eq!(outcome.items().len(), 1);
        assert!(outcome.notice().is_none());
    }

    #[test]
    fn fetch_turns_failures_into_notices() {
        let offline = fetch_suggestions(&OfflineSuggester, 100, EventType::Wedding);
        assert!(offline.items().is_empty());
        assert!(offline.notice().unwrap().contains("unavailable"));

        let garbage = fetch_suggestions(&StaticSuggester::new("Desculpe, não entendi."), 100, EventType::Other);
        assert!(garbage.items().is_empty());
        assert!(garbage.notice().is_some());

        let empty = fetch_suggestions(&StaticSuggester::new("[]"), 100, EventType::Other);
        assert!(empty.notice().is_some());

        let no_guests = fetch_suggestions(&StaticSuggester::new(ANSWER), 0, EventType::Other);
        assert!(no_guests.notice().unwrap().contains("guest count"));
    }

    #[test]
    fn suggest_recipe_validates_and_parses() {
        assert!(matches!(
            suggest_recipe(&OfflineSuggester, "  "),
            Err(AiError::InvalidInput(_))
        ));

        let answer = r#"{"name": "Gin Tônica", "glassware": "Taça", "ingredients": []}"#;
        let draft = suggest_recipe(&StaticSuggester::new(answer), "gin, tônica").unwrap();
        assert_eq!(draft.glassware, "Taça");
    }
}
