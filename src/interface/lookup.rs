use strsim::jaro_winkler;

use crate::error::{RecipeError, Result};
use crate::models::{Ingredient, IngredientKind};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest ingredient kind to a misspelled name, if any is close enough.
pub fn suggest_kind(input: &str) -> Option<IngredientKind> {
    let input = input.trim().to_lowercase();
    let mut candidates: Vec<(IngredientKind, f64)> = IngredientKind::ALL
        .into_iter()
        .map(|kind| (kind, jaro_winkler(&kind.name().to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.first().map(|(kind, _)| *kind)
}

/// Resolve a kind name, attaching a suggestion when it is unknown.
pub fn resolve_kind(input: &str) -> Result<IngredientKind> {
    input.parse::<IngredientKind>().map_err(|_| RecipeError::UnknownIngredient {
        input: input.trim().to_string(),
        suggestion: suggest_kind(input).map(IngredientKind::name),
    })
}

/// Parse a `KIND=GRAMS` command-line spec, e.g. `potato=200`.
pub fn parse_ingredient_spec(spec: &str) -> Result<Ingredient> {
    let (kind, grams) = spec
        .split_once('=')
        .ok_or_else(|| RecipeError::InvalidSpec(spec.to_string()))?;

    let kind = resolve_kind(kind)?;
    let grams: f64 = grams
        .trim()
        .parse()
        .map_err(|_| RecipeError::InvalidSpec(spec.to_string()))?;

    Ingredient::new(kind, grams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec() {
        let ingredient = parse_ingredient_spec("Potato=200").unwrap();
        assert_eq!(ingredient.kind(), IngredientKind::Potato);
        assert_eq!(ingredient.amount(), 200.0);

        let ingredient = parse_ingredient_spec(" fish = 12.5 ").unwrap();
        assert_eq!(ingredient.kind(), IngredientKind::Fish);
        assert_eq!(ingredient.amount(), 12.5);
    }

    #[test]
    fn test_parse_spec_malformed() {
        assert!(matches!(
            parse_ingredient_spec("potato"),
            Err(RecipeError::InvalidSpec(_))
        ));
        assert!(matches!(
            parse_ingredient_spec("potato=lots"),
            Err(RecipeError::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_parse_spec_negative_amount() {
        assert!(matches!(
            parse_ingredient_spec("beet=-5"),
            Err(RecipeError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_unknown_kind_suggests() {
        match parse_ingredient_spec("potatoe=100") {
            Err(RecipeError::UnknownIngredient { input, suggestion }) => {
                assert_eq!(input, "potatoe");
                assert_eq!(suggestion, Some("Potato"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_suggestion_in_message() {
        let err = resolve_kind("mayo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown ingredient: mayo (did you mean 'Mayonnaise'?)"
        );
    }

    #[test]
    fn test_no_suggestion_for_unrelated() {
        assert_eq!(suggest_kind("xylophone"), None);
        let err = resolve_kind("xylophone").unwrap_err();
        assert_eq!(err.to_string(), "Unknown ingredient: xylophone");
    }
}
