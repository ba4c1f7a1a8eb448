//! Diagnostic logging to stderr.
//!
//! Quiet (`warn`) by default so stdout carries only the report. `--verbose`
//! lowers the level to `debug`; `RUST_LOG` overrides both:
//! ```bash
//! RUST_LOG=recipe_calc_rs=trace recipe_calc show
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    });
}
