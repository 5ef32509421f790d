use barmaster_planning::{ChecklistCategory, EventType};

/// Instruction text for a checklist suggestion.
///
/// Asks for a bare JSON array whose objects carry `name`, `category`,
/// `quantityNeeded` and `notes`; categories must be the stored labels.
pub fn checklist_prompt(guest_count: u32, event_type: EventType) -> String {
    let categories = ChecklistCategory::ALL
        .iter()
        .map(|c| format!("'{}'", c.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Act as an experienced bar manager. Build a detailed logistics checklist for a \
         \"{event_type}\" event with {guest_count} guests.\n\
         Return ONLY valid JSON: an array of objects shaped as\n\
         {{\"name\": \"item name\", \"category\": one of {categories}, \
         \"quantityNeeded\": number estimated for {guest_count} people, \
         \"notes\": \"short tip or specification\"}}.\n\
         Cover drinks (vodka, whisky, gin, water, beer), supplies (ice, fruit, sugar), \
         glassware (long drink glasses, bowls, shots), utensils (shakers, muddlers, napkins) \
         and structure (mobile bar, bins)."
    )
}

/// Instruction text for a cocktail recipe built around the given ingredients.
pub fn recipe_prompt(ingredients: &str) -> String {
    format!(
        "Create a detailed cocktail recipe using these ingredients (common additions are fine): \
         {ingredients}.\n\
         Return JSON with keys: name, instructions, glassware, ingredients \
         (array of objects with name, amount, unit; unit one of ml, l, oz, un, kg, g)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_prompt_names_event_and_stored_categories() {
        let prompt = checklist_prompt(120, EventType::Corporate);
        assert!(prompt.contains("\"Corporativo\""));
        assert!(prompt.contains("120 guests"));
        assert!(prompt.contains("'Vidraria'"));
        assert!(prompt.contains("quantityNeeded"));
    }
}
