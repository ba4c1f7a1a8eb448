pub mod lookup;
pub mod prompts;
pub mod render;

pub use lookup::{parse_ingredient_spec, resolve_kind, suggest_kind};
pub use prompts::{build_recipe, prompt_amount, prompt_kind, prompt_yes_no};
pub use render::{format_total_line, write_kinds, write_recipe, write_total};
