//! In-memory recipe store.

use super::traits::RecipeStore;
use crate::error::Result;
use crate::recipe::Recipe;

/// A `RecipeStore` backed by a vector.
///
/// Applies the same field checks as the file store so behavior matches
/// when swapped in for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    recipes: Vec<Recipe>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn append(&mut self, name: &str, ingredients: &[String]) -> Result<Recipe> {
        let recipe = Recipe::new(name, ingredients.to_vec());
        recipe.to_line()?;
        self.recipes.push(recipe.clone());
        Ok(recipe)
    }
}
