//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (storage, config).
    pub const FAILURE: i32 = 1;

    /// Config file not found where one was explicitly requested.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments, including malformed queries.
    pub const INVALID_INPUT: i32 = 4;
}

/// Menu choices for the interactive loop.
pub mod menu {
    pub const LIST: &str = "1";
    pub const ADD: &str = "2";
    pub const SEARCH: &str = "3";
    pub const EXIT: &str = "4";
}

/// Width of the divider printed around the recipe list.
pub const LIST_DIVIDER_WIDTH: usize = 35;

/// Message printed when a search selects nothing.
pub const NO_RESULTS_MESSAGE: &str = "No recipes found matching the criteria.";

/// Example shown in the search prompt and hints.
pub const QUERY_EXAMPLE: &str = "name=Tomato&ingredient=Garlic";

/// Default recipe file name inside the data directory.
pub const DEFAULT_RECIPE_FILE: &str = "recipes.txt";
