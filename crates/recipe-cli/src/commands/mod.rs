//! Command handlers for the recipes CLI.

pub mod add;
pub mod list;
pub mod menu;
pub mod misc;
pub mod search;
