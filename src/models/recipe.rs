use crate::error::Result;
use crate::models::Ingredient;
use crate::operations::IngredientVisitor;

/// An ordered list of ingredients. Insertion order is traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five-ingredient salad shipped as the default recipe.
    pub fn demo() -> Result<Self> {
        let mut recipe = Recipe::new();
        recipe.add_ingredient(Ingredient::potato(200.0)?);
        recipe.add_ingredient(Ingredient::beet(150.0)?);
        recipe.add_ingredient(Ingredient::onion(100.0)?);
        recipe.add_ingredient(Ingredient::mayonnaise(50.0)?);
        recipe.add_ingredient(Ingredient::fish(300.0)?);
        Ok(recipe)
    }

    /// Append an ingredient. Duplicates are allowed.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        tracing::trace!(ingredient = ingredient.name(), amount = ingredient.amount(), "add ingredient");
        self.ingredients.push(ingredient);
    }

    /// Visit every ingredient exactly once, in insertion order.
    pub fn apply<V: IngredientVisitor + ?Sized>(&self, visitor: &mut V) {
        tracing::debug!(count = self.ingredients.len(), "applying operation to recipe");
        for ingredient in &self.ingredients {
            ingredient.accept(visitor);
        }
    }

    /// Sum of calories over all ingredients.
    ///
    /// A fold with no hidden state, so calling it repeatedly always gives the
    /// same answer.
    pub fn total_calories(&self) -> f64 {
        self.ingredients
            .iter()
            .fold(0.0, |total, ingredient| total + ingredient.calories())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ingredient> {
        self.ingredients.iter()
    }
}

impl<'a> IntoIterator for &'a Recipe {
    type Item = &'a Ingredient;
    type IntoIter = std::slice::Iter<'a, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.ingredients.iter()
    }
}

impl FromIterator<Ingredient> for Recipe {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        Self {
            ingredients: iter.into_iter().collect(),
        }
    }
}

impl Extend<Ingredient> for Recipe {
    fn extend<I: IntoIterator<Item = Ingredient>>(&mut self, iter: I) {
        for ingredient in iter {
            self.add_ingredient(ingredient);
        }
    }
}
