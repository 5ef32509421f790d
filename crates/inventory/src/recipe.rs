use serde::{Deserialize, Serialize};

use barmaster_core::{DomainError, DomainResult, Entity, RecipeId};

use crate::unit::Unit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: Unit,
}

/// Recipe book entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub glassware: String,
    #[serde(default)]
    pub category: String,
}

impl Entity for Recipe {
    type Id = RecipeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Recipe without identity, as typed in a form or proposed by the AI service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    #[serde(default)]
    pub id: Option<RecipeId>,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub glassware: String,
    #[serde(default)]
    pub category: String,
}

impl RecipeDraft {
    pub fn into_recipe(self) -> DomainResult<Recipe> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("recipe name cannot be empty"));
        }
        Ok(Recipe {
            id: self.id.unwrap_or_default(),
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
            glassware: self.glassware,
            category: self.category,
        })
    }
}
