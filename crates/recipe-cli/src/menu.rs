//! Interactive menu loop.
//!
//! The menu reads choices and answers from any `BufRead`, writes to any
//! `Write`, and talks to any `RecipeStore`, so the whole loop can be driven
//! from tests with in-memory buffers.

use std::io::{self, BufRead, Write};

use recipe_core::{Query, Recipe, RecipeStore};

use crate::constants::{menu, LIST_DIVIDER_WIDTH, NO_RESULTS_MESSAGE, QUERY_EXAMPLE};
use crate::helpers::{parse_ingredients, validate_new_recipe};

/// Consecutive console read failures tolerated before the loop gives up.
const MAX_CONSECUTIVE_INPUT_ERRORS: usize = 5;

#[derive(Debug)]
enum MenuError {
    /// Reading a line from the console failed
    Input(io::Error),
    /// The console was closed
    EndOfInput,
    /// Writing to the console failed
    Output(io::Error),
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        MenuError::Output(err)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive recipe book.
pub struct RecipeUi<R, W, S> {
    reader: R,
    writer: W,
    store: S,
}

impl<R: BufRead, W: Write, S: RecipeStore> RecipeUi<R, W, S> {
    pub fn new(reader: R, writer: W, store: S) -> Self {
        Self {
            reader,
            writer,
            store,
        }
    }

    /// Consume the UI, returning the output sink and store.
    pub fn into_parts(self) -> (W, S) {
        (self.writer, self.store)
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// Console read failures are reported and the menu is shown again.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails, or if reading keeps
    /// failing.
    pub fn run(&mut self) -> io::Result<()> {
        let mut input_errors = 0;
        loop {
            match self.step() {
                Ok(Flow::Continue) => input_errors = 0,
                Ok(Flow::Exit) => return Ok(()),
                Err(MenuError::EndOfInput) => {
                    writeln!(self.writer)?;
                    writeln!(self.writer, "Exit the application.")?;
                    return Ok(());
                }
                Err(MenuError::Input(err)) => {
                    tracing::warn!(error = %err, "console read failed");
                    writeln!(self.writer, "Error reading input from user: {}", err)?;
                    input_errors += 1;
                    if input_errors >= MAX_CONSECUTIVE_INPUT_ERRORS {
                        return Err(err);
                    }
                }
                Err(MenuError::Output(err)) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> Result<Flow, MenuError> {
        self.print_menu()?;
        let choice = self.read_line()?;

        match choice.trim() {
            menu::LIST => self.display_recipes()?,
            menu::ADD => self.add_new_recipe()?,
            menu::SEARCH => self.search_recipe()?,
            menu::EXIT => {
                writeln!(self.writer, "Exit the application.")?;
                return Ok(Flow::Exit);
            }
            other => {
                tracing::debug!(choice = other, "invalid menu choice");
                writeln!(self.writer, "Invalid choice. Please select again.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Main Menu:")?;
        writeln!(self.writer, "1: Display Recipes")?;
        writeln!(self.writer, "2: Add New Recipe")?;
        writeln!(self.writer, "3: Search Recipe")?;
        writeln!(self.writer, "4: Exit Application")?;
        self.prompt("Please choose an option: ")
    }

    fn prompt(&mut self, text: &str) -> Result<(), MenuError> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line without its terminator.
    fn read_line(&mut self) -> Result<String, MenuError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(MenuError::Input)?;
        if read == 0 {
            return Err(MenuError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn read_recipes(&mut self) -> Result<Option<Vec<Recipe>>, MenuError> {
        match self.store.read_all() {
            Ok(recipes) => Ok(Some(recipes)),
            Err(err) => {
                tracing::error!(error = %err, "failed to read recipes");
                writeln!(self.writer, "Error: {}", err)?;
                Ok(None)
            }
        }
    }

    fn display_recipes(&mut self) -> Result<(), MenuError> {
        let Some(recipes) = self.read_recipes()? else {
            return Ok(());
        };
        if recipes.is_empty() {
            writeln!(self.writer, "No recipes available.")?;
            return Ok(());
        }

        let divider = "-".repeat(LIST_DIVIDER_WIDTH);
        writeln!(self.writer, "Recipes: ")?;
        writeln!(self.writer, "{}", divider)?;
        for recipe in &recipes {
            writeln!(self.writer, "Recipe Name: {}", recipe.name)?;
            writeln!(
                self.writer,
                "Main Ingredients: {}",
                recipe.ingredients.join(", ")
            )?;
        }
        writeln!(self.writer, "{}", divider)?;
        Ok(())
    }

    fn add_new_recipe(&mut self) -> Result<(), MenuError> {
        self.prompt("Enter recipe name: ")?;
        let line = self.read_line()?;
        let name = line.trim();
        self.prompt("Enter main ingredients (comma separated): ")?;
        let ingredients = parse_ingredients(&self.read_line()?);

        if let Err(err) = validate_new_recipe(name, &ingredients) {
            writeln!(self.writer, "{}", err)?;
            return Ok(());
        }

        match self.store.append(name, &ingredients) {
            Ok(_) => writeln!(self.writer, "Recipe added successfully.")?,
            Err(err) => {
                tracing::error!(error = %err, "failed to add recipe");
                writeln!(self.writer, "Error: {}", err)?;
            }
        }
        Ok(())
    }

    fn search_recipe(&mut self) -> Result<(), MenuError> {
        self.prompt(&format!("Enter search query (e.g., '{}'):", QUERY_EXAMPLE))?;
        let raw = self.read_line()?;

        let query = match Query::parse(&raw) {
            Ok(query) => query,
            Err(err) => {
                writeln!(self.writer, "{}", err)?;
                return Ok(());
            }
        };
        let Some(recipes) = self.read_recipes()? else {
            return Ok(());
        };

        let results = query.search(&recipes);
        writeln!(self.writer, "Search Results:")?;
        if results.is_empty() {
            writeln!(self.writer, "{}", NO_RESULTS_MESSAGE)?;
        } else {
            for recipe in results {
                writeln!(self.writer, "{}", recipe)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::{MemoryStore, RecipeError, Result as CoreResult};
    use std::io::Cursor;

    fn sample_store() -> MemoryStore {
        MemoryStore::with_recipes(vec![
            Recipe::from_line("Tomato Soup,Tomato,Onion").unwrap(),
            Recipe::from_line("Garlic Bread,Garlic,Butter").unwrap(),
        ])
    }

    fn run_with<S: RecipeStore>(input: &str, store: S) -> (String, S) {
        let mut ui = RecipeUi::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), store);
        ui.run().expect("menu should finish");
        let (out, store) = ui.into_parts();
        (String::from_utf8(out).expect("utf8 output"), store)
    }

    struct FailingStore;

    impl RecipeStore for FailingStore {
        fn read_all(&self) -> CoreResult<Vec<Recipe>> {
            Err(RecipeError::Storage("disk unavailable".into()))
        }

        fn append(&mut self, _name: &str, _ingredients: &[String]) -> CoreResult<Recipe> {
            Err(RecipeError::Storage("read-only".into()))
        }
    }

    struct BrokenReader;

    impl io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "console gone"))
        }
    }

    #[test]
    fn test_exit_choice() {
        let (out, _) = run_with("4\n", MemoryStore::new());
        assert!(out.contains("Main Menu:"));
        assert!(out.contains("Please choose an option: "));
        assert!(out.ends_with("Exit the application.\n"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (out, _) = run_with("9\nabc\n4\n", MemoryStore::new());
        assert_eq!(out.matches("Invalid choice. Please select again.").count(), 2);
        assert_eq!(out.matches("Main Menu:").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (out, _) = run_with("", MemoryStore::new());
        assert!(out.ends_with("Exit the application.\n"));
    }

    #[test]
    fn test_display_recipes() {
        let (out, _) = run_with("1\n4\n", sample_store());
        let expected = format!(
            "Recipes: \n{d}\nRecipe Name: Tomato Soup\nMain Ingredients: Tomato, Onion\n\
             Recipe Name: Garlic Bread\nMain Ingredients: Garlic, Butter\n{d}\n",
            d = "-".repeat(LIST_DIVIDER_WIDTH)
        );
        assert!(out.contains(&expected), "output was:\n{out}");
    }

    #[test]
    fn test_display_empty_store() {
        let (out, _) = run_with("1\n4\n", MemoryStore::new());
        assert!(out.contains("No recipes available."));
    }

    #[test]
    fn test_add_recipe() {
        let (out, store) = run_with("2\nPancakes\nFlour, Egg ,Milk\n4\n", MemoryStore::new());
        assert!(out.contains("Enter recipe name: "));
        assert!(out.contains("Enter main ingredients (comma separated): "));
        assert!(out.contains("Recipe added successfully."));

        let recipes = store.read_all().unwrap();
        assert_eq!(
            recipes,
            vec![Recipe::new(
                "Pancakes",
                vec!["Flour".into(), "Egg".into(), "Milk".into()]
            )]
        );
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let (out, store) = run_with("2\n\nFlour\n4\n", MemoryStore::new());
        assert!(out.contains("Recipe name cannot be empty"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_trims_recipe_name() {
        let (_, store) = run_with("2\n  Pancakes \nFlour\n4\n", MemoryStore::new());
        let recipes = store.read_all().unwrap();
        assert_eq!(recipes[0].name, "Pancakes");
    }

    #[test]
    fn test_add_rejects_missing_ingredients() {
        let (out, store) = run_with("2\nToast\n , \n4\n", MemoryStore::new());
        assert!(out.contains("At least one ingredient is required"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_search_returns_union() {
        let (out, _) = run_with("3\nname=Tomato&ingredient=Garlic\n4\n", sample_store());
        assert!(out.contains("Enter search query (e.g., 'name=Tomato&ingredient=Garlic'):"));
        assert!(out.contains(
            "Search Results:\nTomato Soup,Tomato,Onion\nGarlic Bread,Garlic,Butter\n"
        ));
    }

    #[test]
    fn test_search_empty_store() {
        let (out, _) = run_with("3\nname=Tomato\n4\n", MemoryStore::new());
        assert!(out.contains("Search Results:\nNo recipes found matching the criteria.\n"));
    }

    #[test]
    fn test_search_empty_query_has_no_results() {
        let (out, _) = run_with("3\n\n4\n", sample_store());
        assert!(out.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_search_malformed_query() {
        let (out, _) = run_with("3\nname\n4\n", sample_store());
        assert!(out.contains("Malformed query: missing '=' in \"name\""));
        assert!(!out.contains("Search Results:"));
        assert!(out.ends_with("Exit the application.\n"));
    }

    #[test]
    fn test_store_failures_are_reported() {
        let (out, _) = run_with("1\n3\nname=Soup\n2\nToast\nBread\n4\n", FailingStore);
        assert!(out.contains("Error: Storage error: disk unavailable"));
        assert!(out.contains("Error: Storage error: read-only"));
        assert!(out.ends_with("Exit the application.\n"));
    }

    #[test]
    fn test_input_failures_are_reported_then_give_up() {
        let reader = io::BufReader::new(BrokenReader);
        let mut ui = RecipeUi::new(reader, Vec::new(), MemoryStore::new());
        let err = ui.run().unwrap_err();
        assert_eq!(err.to_string(), "console gone");

        let (out, _) = ui.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out.matches("Error reading input from user: console gone")
                .count(),
            MAX_CONSECUTIVE_INPUT_ERRORS
        );
    }

    #[test]
    fn test_invalid_utf8_is_reported_and_loop_continues() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"4\n");
        let mut ui = RecipeUi::new(Cursor::new(input), Vec::new(), MemoryStore::new());
        ui.run().unwrap();
        let (out, _) = ui.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Error reading input from user:"));
        assert!(out.ends_with("Exit the application.\n"));
    }
}
