use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{Ingredient, IngredientKind, Recipe};

/// Prompt for the amount of one ingredient, in grams.
pub fn prompt_amount(kind: IngredientKind) -> Result<String> {
    Ok(Input::new()
        .with_prompt(format!("How many grams of {}?", kind.name()))
        .default("100".to_string())
        .interact_text()?)
}

/// Prompt for the next ingredient kind. `None` means the user is done.
pub fn prompt_kind() -> Result<Option<IngredientKind>> {
    let mut options: Vec<String> = IngredientKind::ALL
        .iter()
        .map(|kind| format!("{} ({} kcal/100 g)", kind.name(), kind.calories_per_100g()))
        .collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Add an ingredient")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(IngredientKind::ALL.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Build a recipe one ingredient at a time.
///
/// Invalid amounts are reported and re-asked rather than aborting the build.
pub fn build_recipe() -> Result<Recipe> {
    let mut recipe = Recipe::new();

    while let Some(kind) = prompt_kind()? {
        let input = prompt_amount(kind)?;

        let amount = match input.trim().parse::<f64>() {
            Ok(amount) => amount,
            Err(_) => {
                println!("Not a number: '{}'", input.trim());
                continue;
            }
        };

        match Ingredient::new(kind, amount) {
            Ok(ingredient) => {
                recipe.add_ingredient(ingredient);
                println!("Added: {} ({} g)", kind.name(), amount);
            }
            Err(e) => println!("{}", e),
        }
    }

    if recipe.is_empty() && prompt_yes_no("Recipe is empty. Use the default salad instead?", true)? {
        return Recipe::demo();
    }

    Ok(recipe)
}
