//! Path resolution for config and recipe files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_recipe_path, read_config, RecipesConfig};
use crate::errors::CliError;

/// Resolve the config file path from `--config` / `RECIPES_CONFIG` or the
/// XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file.
///
/// A missing default config is not an error; a missing config that was
/// named explicitly is.
pub fn load_config(cli: &Cli) -> anyhow::Result<RecipesConfig> {
    let config_path = resolve_config_path(cli)?;
    if config_path.exists() {
        return read_config(&config_path);
    }
    if cli.config.is_some() {
        return Err(CliError::not_found(
            format!("Config not found at {}", config_path.display()),
            "Hint: Check --config or RECIPES_CONFIG, or remove it to use defaults.",
        )
        .into());
    }
    Ok(RecipesConfig::default())
}

/// Resolve the recipe file path.
///
/// Order: `--file` / `RECIPES_FILE`, then `storage.path` from config, then
/// the XDG data directory.
pub fn resolve_recipe_path(cli: &Cli, config: &RecipesConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    if let Some(path) = config.storage.path.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_recipe_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageSection;
    use clap::Parser;

    #[test]
    fn test_file_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["recipes", "--file", "/tmp/flag.txt"]).unwrap();
        let config = RecipesConfig {
            storage: StorageSection {
                path: Some("/tmp/config.txt".into()),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_recipe_path(&cli, &config).unwrap(),
            PathBuf::from("/tmp/flag.txt")
        );
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let cli = Cli::try_parse_from(["recipes", "--file", ""]).unwrap();
        let config = RecipesConfig {
            storage: StorageSection {
                path: Some("/tmp/config.txt".into()),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_recipe_path(&cli, &config).unwrap(),
            PathBuf::from("/tmp/config.txt")
        );
    }

    #[test]
    fn test_explicit_missing_config_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let cli = Cli::try_parse_from(["recipes", "--config", missing.to_str().unwrap()]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
