use clap::{Parser, Subcommand, ValueEnum};

/// RecipeCalc — print a recipe's ingredients and total its calories.
#[derive(Parser, Debug)]
#[command(name = "recipe_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ingredient as KIND=GRAMS (repeatable). Replaces the default salad.
    #[arg(short, long = "ingredient", value_name = "KIND=GRAMS", global = true)]
    pub ingredients: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log operation details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// Print each ingredient followed by the calorie total.
    #[default]
    Show,

    /// Print only the calorie total.
    Calories,

    /// List the known ingredient kinds and their calories per 100 g.
    Kinds,

    /// Compose a recipe interactively, then show it.
    Build,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
