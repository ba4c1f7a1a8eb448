use assert_float_eq::*;

use recipe_calc_rs::cli::OutputFormat;
use recipe_calc_rs::interface::{parse_ingredient_spec, write_recipe};
use recipe_calc_rs::models::{Ingredient, Recipe};
use recipe_calc_rs::operations::{CalorieOperation, PrintOperation};

fn salad() -> Recipe {
    ["potato=200", "beet=150", "onion=100", "mayonnaise=50", "fish=300"]
        .into_iter()
        .map(|spec| parse_ingredient_spec(spec).unwrap())
        .collect()
}

fn printed(recipe: &Recipe) -> Vec<String> {
    let mut op = PrintOperation::new(Vec::new());
    recipe.apply(&mut op);
    String::from_utf8(op.finish().unwrap())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_salad_matches_demo() {
    assert_eq!(salad(), Recipe::demo().unwrap());
}

#[test]
fn test_salad_report() {
    let mut buf = Vec::new();
    write_recipe(&salad(), OutputFormat::Text, &mut buf).unwrap();

    let expected = "\
Potato: 200 g
Beet: 150 g
Onion: 100 g
Mayonnaise: 50 g
Fish: 300 g
Total calories: 1108.5
";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn test_salad_calories() {
    let recipe = salad();
    let mut op = CalorieOperation::new();
    recipe.apply(&mut op);

    // 154 + 64.5 + 40 + 340 + 510
    assert_float_absolute_eq!(op.total(), 1108.5, 1e-9);
}

#[test]
fn test_print_is_idempotent() {
    let recipe = salad();
    let first = printed(&recipe);
    let second = printed(&recipe);
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn test_calorie_operation_reuse_doubles_total() {
    // One instance per traversal: a reused accumulator keeps counting.
    let recipe = salad();
    let mut op = CalorieOperation::new();
    recipe.apply(&mut op);
    recipe.apply(&mut op);
    assert_float_absolute_eq!(op.total(), 2.0 * recipe.total_calories(), 1e-9);
}

#[test]
fn test_empty_recipe() {
    let recipe = Recipe::new();
    let mut op = CalorieOperation::new();
    recipe.apply(&mut op);
    assert_eq!(op.total(), 0.0);
    assert!(printed(&recipe).is_empty());
}

#[test]
fn test_invalid_amounts_rejected_at_construction() {
    assert!(Ingredient::potato(-200.0).is_err());
    assert!(Ingredient::fish(f64::NAN).is_err());
    assert!(parse_ingredient_spec("onion=inf").is_err());
}
