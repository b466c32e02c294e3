//! UI primitives for the recipes CLI.
//!
//! - **Context**: output mode, color and symbol choice for one invocation
//! - **Theme**: Badges and color styles
//! - **Render**: Tables, headers, receipts, hints, error lines
//!
//! The interactive menu writes its own fixed text and does not use these.

mod context;
pub mod render;
pub mod theme;

pub use context::{Terminal, UiContext};

// Re-export commonly used render functions
pub use render::{header, hint, print, print_error, receipt, table, Column};
