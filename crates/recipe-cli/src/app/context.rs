//! Application context for the recipes CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use recipe_core::TextFileStore;

use crate::cli::{Cli, OutputArgs};
use crate::config::RecipesConfig;
use crate::ui::{Terminal, UiContext};

use super::resolver::{load_config, resolve_recipe_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<RecipesConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&RecipesConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Resolve the recipe file path.
    pub fn recipe_path(&self) -> anyhow::Result<PathBuf> {
        resolve_recipe_path(self.cli, self.config()?)
    }

    /// Open the flat-file store at the resolved path.
    pub fn open_store(&self) -> anyhow::Result<TextFileStore> {
        let path = self.recipe_path()?;
        tracing::debug!(path = %path.display(), "using recipe file");
        Ok(TextFileStore::new(path))
    }

    /// Resolve output settings for a command.
    ///
    /// Config errors count as "color allowed" here so error reporting itself
    /// cannot fail.
    pub fn ui_context(&self, output: Option<&OutputArgs>) -> UiContext {
        let config_allows_color = self
            .config()
            .map(|config| config.ui.color)
            .unwrap_or(true);
        UiContext::resolve(
            output,
            !self.cli.no_color && config_allows_color,
            self.cli.ascii,
            Terminal::detect(),
        )
    }
}
