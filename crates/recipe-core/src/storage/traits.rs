//! Recipe store trait definition.

use crate::error::Result;
use crate::recipe::Recipe;

/// Storage interface for the recipe book.
///
/// Implementations must ensure:
/// - `read_all` returns records in the order they were appended
/// - An empty or missing store reads as no records, never as an error
/// - Read and write failures are returned, never swallowed
pub trait RecipeStore {
    /// Read every stored recipe.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Storage` if the backing store exists but cannot
    /// be read.
    fn read_all(&self) -> Result<Vec<Recipe>>;

    /// Append a new recipe.
    ///
    /// An empty name or an empty ingredient list is accepted here, and
    /// rejecting those is left to the caller. A record with neither would
    /// store as a blank line and is refused.
    ///
    /// # Returns
    ///
    /// Returns the recipe as it was stored.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` if the record cannot be represented
    /// in the store's format, or `RecipeError::Storage` if the write fails.
    fn append(&mut self, name: &str, ingredients: &[String]) -> Result<Recipe>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &mut dyn RecipeStore) {}
    }
}
