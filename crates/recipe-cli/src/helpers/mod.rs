//! Helper functions for the CLI.

mod input;

pub use input::{parse_ingredients, validate_new_recipe};
