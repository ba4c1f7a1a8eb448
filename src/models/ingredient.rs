use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{RecipeError, Result};
use crate::operations::IngredientVisitor;

/// Energy density of potato, kcal per 100 g.
pub const POTATO_KCAL_PER_100G: f64 = 77.0;
pub const BEET_KCAL_PER_100G: f64 = 43.0;
pub const ONION_KCAL_PER_100G: f64 = 40.0;
pub const MAYONNAISE_KCAL_PER_100G: f64 = 680.0;
pub const FISH_KCAL_PER_100G: f64 = 170.0;

/// The closed set of ingredients a recipe can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IngredientKind {
    Potato,
    Beet,
    Onion,
    Mayonnaise,
    Fish,
}

impl IngredientKind {
    /// Every kind, in declaration order.
    pub const ALL: [IngredientKind; 5] = [
        IngredientKind::Potato,
        IngredientKind::Beet,
        IngredientKind::Onion,
        IngredientKind::Mayonnaise,
        IngredientKind::Fish,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IngredientKind::Potato => "Potato",
            IngredientKind::Beet => "Beet",
            IngredientKind::Onion => "Onion",
            IngredientKind::Mayonnaise => "Mayonnaise",
            IngredientKind::Fish => "Fish",
        }
    }

    pub fn calories_per_100g(self) -> f64 {
        match self {
            IngredientKind::Potato => POTATO_KCAL_PER_100G,
            IngredientKind::Beet => BEET_KCAL_PER_100G,
            IngredientKind::Onion => ONION_KCAL_PER_100G,
            IngredientKind::Mayonnaise => MAYONNAISE_KCAL_PER_100G,
            IngredientKind::Fish => FISH_KCAL_PER_100G,
        }
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IngredientKind {
    type Err = RecipeError;

    /// Case-insensitive exact match on the kind name.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        IngredientKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == wanted)
            .ok_or_else(|| RecipeError::UnknownIngredient {
                input: s.trim().to_string(),
                suggestion: None,
            })
    }
}

/// One ingredient placed in a recipe.
///
/// Name and calorie density come from the kind; the amount is fixed at
/// construction. Fields are private so none of them can change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ingredient {
    kind: IngredientKind,
    amount_grams: f64,
}

impl Ingredient {
    /// Create an ingredient, rejecting negative, NaN and infinite amounts.
    pub fn new(kind: IngredientKind, amount_grams: f64) -> Result<Self> {
        if !amount_grams.is_finite() || amount_grams < 0.0 {
            return Err(RecipeError::InvalidAmount {
                name: kind.name(),
                amount: amount_grams,
            });
        }
        Ok(Self { kind, amount_grams })
    }

    pub fn potato(amount_grams: f64) -> Result<Self> {
        Self::new(IngredientKind::Potato, amount_grams)
    }

    pub fn beet(amount_grams: f64) -> Result<Self> {
        Self::new(IngredientKind::Beet, amount_grams)
    }

    pub fn onion(amount_grams: f64) -> Result<Self> {
        Self::new(IngredientKind::Onion, amount_grams)
    }

    pub fn mayonnaise(amount_grams: f64) -> Result<Self> {
        Self::new(IngredientKind::Mayonnaise, amount_grams)
    }

    pub fn fish(amount_grams: f64) -> Result<Self> {
        Self::new(IngredientKind::Fish, amount_grams)
    }

    #[inline]
    pub fn kind(&self) -> IngredientKind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[inline]
    pub fn calories_per_100g(&self) -> f64 {
        self.kind.calories_per_100g()
    }

    /// Amount in grams.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount_grams
    }

    /// Calories contributed by this ingredient: kcal/100g scaled by grams.
    #[inline]
    pub fn calories(&self) -> f64 {
        (self.calories_per_100g() / 100.0) * self.amount_grams
    }

    /// Hand this ingredient to the visitor method matching its kind.
    pub fn accept<V: IngredientVisitor + ?Sized>(&self, visitor: &mut V) {
        match self.kind {
            IngredientKind::Potato => visitor.visit_potato(self),
            IngredientKind::Beet => visitor.visit_beet(self),
            IngredientKind::Onion => visitor.visit_onion(self),
            IngredientKind::Mayonnaise => visitor.visit_mayonnaise(self),
            IngredientKind::Fish => visitor.visit_fish(self),
        }
    }
}
