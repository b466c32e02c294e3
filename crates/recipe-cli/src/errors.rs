//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use recipe_core::RecipeError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file)
    NotFound { message: String, hint: String },

    /// Invalid user input, including malformed search queries
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

impl From<RecipeError> for CliError {
    fn from(err: RecipeError) -> Self {
        let message = err.to_string();
        match err {
            RecipeError::MalformedQuery(_) => CliError::invalid_input_with_hint(
                message,
                format!(
                    "Hint: Queries look like {}",
                    crate::constants::QUERY_EXAMPLE
                ),
            ),
            _ => CliError::invalid_input(message),
        }
    }
}

/// Resolve the process exit code for an error returned by a command.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<RecipeError>() {
        return match core_err {
            RecipeError::MalformedQuery(_) | RecipeError::InvalidInput(_) => {
                super::constants::exit_codes::INVALID_INPUT
            }
            RecipeError::Storage(_) => super::constants::exit_codes::FAILURE,
        };
    }
    super::constants::exit_codes::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_malformed_query_maps_to_invalid_input() {
        let err: CliError = RecipeError::MalformedQuery("missing '='".into()).into();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(err.to_string().contains("Hint:"));
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Config not found", "Hint: check --config");
        assert_eq!(err.to_string(), "Config not found\nHint: check --config");
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_exit_code_for_storage_error() {
        let err = anyhow::Error::new(RecipeError::Storage("disk full".into()));
        assert_eq!(exit_code_for(&err), exit_codes::FAILURE);
    }

    #[test]
    fn test_exit_code_for_cli_error() {
        let err = anyhow::Error::new(CliError::invalid_input("Recipe name cannot be empty"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }
}
