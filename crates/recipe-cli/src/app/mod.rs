//! Application-level utilities for the recipes CLI.
//!
//! This module provides:
//! - Path resolution for config and recipe files
//! - Lazy config loading behind a shared context

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
