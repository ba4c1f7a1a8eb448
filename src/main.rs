use std::io::{self, Write};

use clap::Parser;

use recipe_calc_rs::cli::{Cli, Command, OutputFormat};
use recipe_calc_rs::error::Result;
use recipe_calc_rs::interface::{
    build_recipe, parse_ingredient_spec, write_kinds, write_recipe, write_total,
};
use recipe_calc_rs::logging;
use recipe_calc_rs::models::Recipe;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or_default();
    tracing::debug!(?command, format = ?cli.format, "starting");

    match command {
        Command::Show => cmd_show(&cli.ingredients, cli.format),
        Command::Calories => cmd_calories(&cli.ingredients, cli.format),
        Command::Kinds => write_kinds(cli.format, io::stdout().lock()),
        Command::Build => cmd_build(cli.format),
    }
}

/// Use the ingredients given on the command line, or the default salad.
fn load_recipe(specs: &[String]) -> Result<Recipe> {
    if specs.is_empty() {
        return Recipe::demo();
    }

    specs.iter().map(|spec| parse_ingredient_spec(spec)).collect()
}

/// Print every ingredient, then the calorie total.
fn cmd_show(specs: &[String], format: OutputFormat) -> Result<()> {
    let recipe = load_recipe(specs)?;
    tracing::info!(ingredients = recipe.len(), "showing recipe");

    let mut out = io::stdout().lock();
    write_recipe(&recipe, format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Print only the calorie total.
fn cmd_calories(specs: &[String], format: OutputFormat) -> Result<()> {
    let recipe = load_recipe(specs)?;
    tracing::info!(ingredients = recipe.len(), "totaling calories");

    write_total(&recipe, format, io::stdout().lock())
}

/// Compose a recipe interactively and show it.
fn cmd_build(format: OutputFormat) -> Result<()> {
    let recipe = build_recipe()?;

    println!();
    write_recipe(&recipe, format, io::stdout().lock())
}
