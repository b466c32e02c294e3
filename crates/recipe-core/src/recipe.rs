//! The recipe record and its line format.
//!
//! A recipe is stored as a single comma-separated line: the first field is
//! the name and every following field is one ingredient.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};

/// Field separator within a stored line.
pub const FIELD_DELIMITER: char = ',';

/// A single recipe entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name (not required to be unique)
    pub name: String,

    /// Ingredients, in the order they were entered
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }

    /// Decode a stored line.
    ///
    /// Returns `None` for blank lines. A trailing `\r` is ignored so files
    /// edited on Windows still read cleanly.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return None;
        }

        let mut fields = line.split(FIELD_DELIMITER);
        let name = fields.next().unwrap_or_default().to_string();
        let ingredients = fields.map(String::from).collect();
        Some(Self { name, ingredients })
    }

    /// Encode as a stored line (without the trailing newline).
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` if any field contains the field
    /// delimiter or a line break, or if the line would be blank. Either
    /// would not read back as written.
    pub fn to_line(&self) -> Result<String> {
        check_field("name", &self.name)?;
        for ingredient in &self.ingredients {
            check_field("ingredient", ingredient)?;
        }
        let line = self.to_string();
        if line.trim().is_empty() {
            return Err(RecipeError::InvalidInput(
                "recipe has neither a name nor ingredients".to_string(),
            ));
        }
        Ok(line)
    }

    /// Whether `needle` occurs in the recipe name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }

    /// Whether `needle` occurs in any ingredient.
    pub fn any_ingredient_contains(&self, needle: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.contains(needle))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for ingredient in &self.ingredients {
            write!(f, "{}{}", FIELD_DELIMITER, ingredient)?;
        }
        Ok(())
    }
}

fn check_field(label: &str, value: &str) -> Result<()> {
    if value.contains(FIELD_DELIMITER) {
        return Err(RecipeError::InvalidInput(format!(
            "{} \"{}\" contains '{}'",
            label, value, FIELD_DELIMITER
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(RecipeError::InvalidInput(format!(
            "{} contains a line break",
            label
        )));
    }
    Ok(())
}
