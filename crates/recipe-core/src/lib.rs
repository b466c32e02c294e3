//! # Recipe Core
//!
//! Core library for recipes - a flat-file recipe book for the terminal.
//!
//! This crate provides the domain model, the search query matcher and the
//! storage abstraction, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **recipe**: The `Recipe` record and its comma-separated line format
//! - **query**: `key=value&key=value` query parsing and record matching
//! - **storage**: The `RecipeStore` trait with flat-file and in-memory backends

pub mod error;
pub mod query;
pub mod recipe;
pub mod storage;

pub use error::{RecipeError, Result};
pub use query::{search, Query, QueryKey, QueryPair};
pub use recipe::Recipe;
pub use storage::{MemoryStore, RecipeStore, TextFileStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
