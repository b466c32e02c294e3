//! Flat-file recipe store.
//!
//! Recipes live in a UTF-8 text file, one per line, fields separated by
//! commas. The first field is the name; the rest are ingredients.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::traits::RecipeStore;
use crate::error::{RecipeError, Result};
use crate::recipe::Recipe;

/// A `RecipeStore` backed by a delimited text file.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    /// Create a store for `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_append(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    RecipeError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                RecipeError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })
    }
}

impl RecipeStore for TextFileStore {
    fn read_all(&self) -> Result<Vec<Recipe>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "recipe file absent");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RecipeError::Storage(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let mut recipes = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                RecipeError::Storage(format!(
                    "Failed to read {} at line {}: {}",
                    self.path.display(),
                    index + 1,
                    e
                ))
            })?;
            if let Some(recipe) = Recipe::from_line(&line) {
                recipes.push(recipe);
            }
        }

        tracing::debug!(path = %self.path.display(), count = recipes.len(), "read recipes");
        Ok(recipes)
    }

    fn append(&mut self, name: &str, ingredients: &[String]) -> Result<Recipe> {
        let recipe = Recipe::new(name, ingredients.to_vec());
        let line = recipe.to_line()?;

        let mut file = self.open_for_append()?;
        let mut record = String::with_capacity(line.len() + 2);
        if !ends_with_newline(&mut file)? {
            record.push('\n');
        }
        record.push_str(&line);
        record.push('\n');

        file.write_all(record.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| {
                RecipeError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;

        tracing::debug!(path = %self.path.display(), name = %recipe.name, "appended recipe");
        Ok(recipe)
    }
}

/// Whether the file is empty or its last byte is a newline.
fn ends_with_newline(file: &mut File) -> Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
