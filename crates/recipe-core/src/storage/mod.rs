//! Storage abstraction for recipes.
//!
//! This module defines the `RecipeStore` trait and its implementations.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic:
//! - `TextFileStore`: one comma-separated recipe per line in a UTF-8 file
//! - `MemoryStore`: in-process vector, for tests and embedding
//!
//! Stores only read everything and append; records are never edited in place.

pub mod memory;
pub mod text_file;
pub mod traits;

// Re-export public types
pub use memory::MemoryStore;
pub use text_file::TextFileStore;
pub use traits::RecipeStore;
