use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{IngredientKind, Recipe};
use crate::operations::{BreakdownOperation, CalorieLine, CalorieOperation, PrintOperation};

/// Format the summary line printed after the ingredient lines.
pub fn format_total_line(total_calories: f64) -> String {
    format!("Total calories: {}", total_calories)
}

#[derive(Debug, Serialize)]
struct RecipeReport {
    ingredients: Vec<CalorieLine>,
    total_calories: f64,
}

#[derive(Debug, Serialize)]
struct TotalReport {
    total_calories: f64,
}

#[derive(Debug, Serialize)]
struct KindRow {
    name: &'static str,
    calories_per_100g: f64,
}

/// Render the full recipe: one entry per ingredient plus the total.
pub fn write_recipe<W: Write>(recipe: &Recipe, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let mut printer = PrintOperation::new(&mut out);
            recipe.apply(&mut printer);
            printer.finish()?;

            let mut calories = CalorieOperation::new();
            recipe.apply(&mut calories);
            writeln!(out, "{}", format_total_line(calories.total()))?;
        }
        OutputFormat::Json => {
            let report = RecipeReport {
                ingredients: breakdown(recipe),
                total_calories: recipe.total_calories(),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for line in breakdown(recipe) {
                wtr.serialize(line)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Render only the calorie total.
pub fn write_total<W: Write>(recipe: &Recipe, format: OutputFormat, mut out: W) -> Result<()> {
    let mut calories = CalorieOperation::new();
    recipe.apply(&mut calories);
    let report = TotalReport {
        total_calories: calories.total(),
    };

    match format {
        OutputFormat::Text => writeln!(out, "{}", format_total_line(report.total_calories))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.serialize(&report)?;
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Render the table of known ingredient kinds.
pub fn write_kinds<W: Write>(format: OutputFormat, mut out: W) -> Result<()> {
    let rows: Vec<KindRow> = IngredientKind::ALL
        .into_iter()
        .map(|kind| KindRow {
            name: kind.name(),
            calories_per_100g: kind.calories_per_100g(),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for row in &rows {
                writeln!(out, "{}: {} kcal/100 g", row.name, row.calories_per_100g)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

fn breakdown(recipe: &Recipe) -> Vec<CalorieLine> {
    let mut op = BreakdownOperation::new();
    recipe.apply(&mut op);
    op.into_lines()
}
