//! Starter records returned by collections that have never been written.

use chrono::{DateTime, Utc};

use barmaster_core::{InventoryItemId, RecipeId};
use barmaster_inventory::{Ingredient, InventoryItem, Recipe, Unit};

pub fn seed_inventory(now: DateTime<Utc>) -> Vec<InventoryItem> {
    [
        ("Vodka Premium", "Destilado", 12.0, 5.0, Unit::Unit),
        ("Gin London Dry", "Destilado", 8.0, 3.0, Unit::Unit),
        ("Xarope de Açúcar", "Xarope", 5.0, 2.0, Unit::Litre),
        ("Limão Taiti", "Insumo", 50.0, 20.0, Unit::Unit),
        ("Taça Gin", "Vidraria", 100.0, 100.0, Unit::Unit),
        ("Copo Long Drink", "Vidraria", 150.0, 50.0, Unit::Unit),
    ]
    .into_iter()
    .map(|(name, category, quantity, min_stock, unit)| InventoryItem {
        id: InventoryItemId::new(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        min_stock,
        unit,
        updated_at: now,
    })
    .collect()
}

pub fn seed_recipes() -> Vec<Recipe> {
    vec![Recipe {
        id: RecipeId::new(),
        name: "Moscow Mule".to_string(),
        ingredients: vec![
            ingredient("Vodka", 50.0),
            ingredient("Suco de Limão", 20.0),
            ingredient("Xarope de Gengibre", 30.0),
        ],
        instructions: "1. Gelo na caneca.\n2. Adicionar Vodka e Limão.\n3. Completar com Espuma de Gengibre."
            .to_string(),
        glassware: "Caneca Cobre".to_string(),
        category: "Classico".to_string(),
    }]
}

fn ingredient(name: &str, amount: f64) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        amount,
        unit: Unit::Millilitre,
    }
}
