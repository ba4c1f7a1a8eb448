use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Invalid amount for {name}: {amount} g (must be a finite, non-negative number)")]
    InvalidAmount { name: &'static str, amount: f64 },

    #[error("Unknown ingredient: {input}{}", suggestion_hint(.suggestion))]
    UnknownIngredient {
        input: String,
        suggestion: Option<&'static str>,
    },

    #[error("Invalid ingredient spec '{0}' (expected KIND=GRAMS)")]
    InvalidSpec(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

fn suggestion_hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
