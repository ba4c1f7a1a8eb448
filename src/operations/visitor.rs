use crate::models::Ingredient;

/// An operation over ingredients, with one case per ingredient kind.
///
/// `Ingredient::accept` picks the method; `Recipe::apply` drives a whole
/// traversal. Adding a kind means adding a method here, and the compiler
/// then points at every operation that has to handle it.
pub trait IngredientVisitor {
    fn visit_potato(&mut self, potato: &Ingredient);
    fn visit_beet(&mut self, beet: &Ingredient);
    fn visit_onion(&mut self, onion: &Ingredient);
    fn visit_mayonnaise(&mut self, mayonnaise: &Ingredient);
    fn visit_fish(&mut self, fish: &Ingredient);
}
