//! Error types for recipe core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for recipe operations.
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Core error type for recipe operations.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// Reading or writing the backing store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A search query could not be parsed
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for RecipeError {
    fn from(err: std::io::Error) -> Self {
        RecipeError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RecipeError = io.into();
        assert!(matches!(err, RecipeError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: denied");
    }

    #[test]
    fn test_malformed_query_message() {
        let err = RecipeError::MalformedQuery("missing '=' in \"name\"".to_string());
        assert_eq!(err.to_string(), "Malformed query: missing '=' in \"name\"");
    }
}
