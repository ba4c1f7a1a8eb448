use serde::Serialize;

use crate::models::Ingredient;
use crate::operations::IngredientVisitor;

/// Calorie contribution of one ingredient, as it appears in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieLine {
    pub name: &'static str,
    pub amount_grams: f64,
    pub calories_per_100g: f64,
    pub calories: f64,
}

impl CalorieLine {
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name(),
            amount_grams: ingredient.amount(),
            calories_per_100g: ingredient.calories_per_100g(),
            calories: ingredient.calories(),
        }
    }
}

/// Collects a [`CalorieLine`] per visited ingredient, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct BreakdownOperation {
    lines: Vec<CalorieLine>,
}

impl BreakdownOperation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CalorieLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CalorieLine> {
        self.lines
    }

    fn record(&mut self, ingredient: &Ingredient) {
        self.lines.push(CalorieLine::from_ingredient(ingredient));
    }
}

impl IngredientVisitor for BreakdownOperation {
    fn visit_potato(&mut self, potato: &Ingredient) {
        self.record(potato);
    }

    fn visit_beet(&mut self, beet: &Ingredient) {
        self.record(beet);
    }

    fn visit_onion(&mut self, onion: &Ingredient) {
        self.record(onion);
    }

    fn visit_mayonnaise(&mut self, mayonnaise: &Ingredient) {
        self.record(mayonnaise);
    }

    fn visit_fish(&mut self, fish: &Ingredient) {
        self.record(fish);
    }
}
