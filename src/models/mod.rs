mod ingredient;
mod recipe;

pub use ingredient::{
    BEET_KCAL_PER_100G, FISH_KCAL_PER_100G, Ingredient, IngredientKind, MAYONNAISE_KCAL_PER_100G,
    ONION_KCAL_PER_100G, POTATO_KCAL_PER_100G,
};
pub use recipe::Recipe;
