use crate::models::Ingredient;
use crate::operations::IngredientVisitor;

/// Accumulates the calories of every visited ingredient.
///
/// There is no reset: one instance is meant for one traversal, and a second
/// traversal adds onto the first. Use `Recipe::total_calories` when a
/// reuse-safe total is needed.
#[derive(Debug, Clone, Default)]
pub struct CalorieOperation {
    total_calories: f64,
}

impl CalorieOperation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total accumulated so far.
    pub fn total(&self) -> f64 {
        self.total_calories
    }

    fn add(&mut self, ingredient: &Ingredient) {
        self.total_calories += (ingredient.calories_per_100g() / 100.0) * ingredient.amount();
    }
}

impl IngredientVisitor for CalorieOperation {
    fn visit_potato(&mut self, potato: &Ingredient) {
        self.add(potato);
    }

    fn visit_beet(&mut self, beet: &Ingredient) {
        self.add(beet);
    }

    fn visit_onion(&mut self, onion: &Ingredient) {
        self.add(onion);
    }

    fn visit_mayonnaise(&mut self, mayonnaise: &Ingredient) {
        self.add(mayonnaise);
    }

    fn visit_fish(&mut self, fish: &Ingredient) {
        self.add(fish);
    }
}
