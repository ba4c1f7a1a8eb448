pub mod breakdown;
pub mod calories;
pub mod printer;
pub mod visitor;

pub use breakdown::{BreakdownOperation, CalorieLine};
pub use calories::CalorieOperation;
pub use printer::{format_ingredient_line, PrintOperation};
pub use visitor::IngredientVisitor;
