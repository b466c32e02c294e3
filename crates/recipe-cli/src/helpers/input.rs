//! Validation of recipe input entered at the prompt or on the command line.

use crate::errors::CliError;

/// Split a comma separated ingredient list, trimming each item and dropping
/// empty ones.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Reject recipes the store would accept but the book should not contain.
pub fn validate_new_recipe(name: &str, ingredients: &[String]) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::invalid_input("Recipe name cannot be empty"));
    }
    if name.contains(',') {
        return Err(CliError::invalid_input("Recipe name cannot contain ','"));
    }
    if ingredients.is_empty() {
        return Err(CliError::invalid_input(
            "At least one ingredient is required",
        ));
    }
    Ok(())
}
