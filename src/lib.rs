pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod operations;

pub use error::{RecipeError, Result};
pub use models::{Ingredient, IngredientKind, Recipe};
pub use operations::{CalorieOperation, IngredientVisitor, PrintOperation};
