//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so they never mix with menu or command output.
//! The filter comes from `RECIPES_LOG` when set, otherwise from `--verbose`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "RECIPES_LOG";

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "recipe_core=debug,recipes=debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("recipe_core=debug"));
    }
}
