use std::io::{self, Write};

use crate::models::Ingredient;
use crate::operations::IngredientVisitor;

/// Format a single ingredient line: `"<name>: <amount> g"`.
pub fn format_ingredient_line(ingredient: &Ingredient) -> String {
    format!("{}: {} g", ingredient.name(), ingredient.amount())
}

/// Writes one line per visited ingredient to `out`.
///
/// Visitor methods cannot fail, so the first write error is kept and
/// returned by [`PrintOperation::finish`]; later writes are skipped.
pub struct PrintOperation<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> PrintOperation<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand back the sink, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn print(&mut self, ingredient: &Ingredient) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", format_ingredient_line(ingredient)) {
            tracing::warn!(error = %err, "failed to print ingredient");
            self.error = Some(err);
        }
    }
}

impl<W: Write> IngredientVisitor for PrintOperation<W> {
    fn visit_potato(&mut self, potato: &Ingredient) {
        self.print(potato);
    }

    fn visit_beet(&mut self, beet: &Ingredient) {
        self.print(beet);
    }

    fn visit_onion(&mut self, onion: &Ingredient) {
        self.print(onion);
    }

    fn visit_mayonnaise(&mut self, mayonnaise: &Ingredient) {
        self.print(mayonnaise);
    }

    fn visit_fish(&mut self, fish: &Ingredient) {
        self.print(fish);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn print_to_string(recipe: &Recipe) -> String {
        let mut op = PrintOperation::new(Vec::new());
        recipe.apply(&mut op);
        String::from_utf8(op.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_demo_lines() {
        let out = print_to_string(&Recipe::demo().unwrap());
        assert_eq!(
            out,
            "Potato: 200 g\nBeet: 150 g\nOnion: 100 g\nMayonnaise: 50 g\nFish: 300 g\n"
        );
    }

    #[test]
    fn test_fractional_amount() {
        let line = format_ingredient_line(&Ingredient::onion(12.5).unwrap());
        assert_eq!(line, "Onion: 12.5 g");
    }

    #[test]
    fn test_empty_recipe_prints_nothing() {
        assert_eq!(print_to_string(&Recipe::new()), "");
    }

    #[test]
    fn test_printing_twice_is_identical() {
        let recipe = Recipe::demo().unwrap();
        assert_eq!(print_to_string(&recipe), print_to_string(&recipe));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_reported() {
        let mut op = PrintOperation::new(FailingWriter);
        Recipe::demo().unwrap().apply(&mut op);
        let err = op.finish().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
