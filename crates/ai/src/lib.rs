//! `barmaster-ai`
//!
//! **Responsibility:** boundary to the external suggestion service.
//!
//! This crate is intentionally **not** part of the reconciliation engine:
//! - It never mutates event plans or inventory.
//! - It turns the service's free-text answers into typed suggestions, or into
//!   "no suggestions" plus a notice when the answer cannot be used.
//! - The concrete vendor client lives behind [`ChecklistSuggester`] /
//!   [`RecipeSuggester`].

pub mod payload;
pub mod prompt;
pub mod result;
pub mod suggester;

pub use payload::{parse_checklist_suggestions, parse_recipe_suggestion, strip_code_fences};
pub use prompt::{checklist_prompt, recipe_prompt};
pub use result::AiError;
pub use suggester::{
    ChecklistRequest, ChecklistSuggester, OfflineSuggester, RecipeSuggester, StaticSuggester,
    SuggestionOutcome, fetch_suggestions, suggest_recipe,
};
