//! How recipe listings and receipts are rendered for one invocation.

use std::io::IsTerminal;

use crate::cli::{Layout, OutputArgs};

/// Rendering of a recipe listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON array of `{name, ingredients}` objects
    Json,
    /// One `name: a, b` line per recipe
    Plain,
    /// Header line plus a comfy-table
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// What the process is attached to.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub dumb: bool,
    pub no_color_env: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Resolved output settings.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub mode: OutputMode,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// Resolve settings for a command.
    ///
    /// `--json` wins, then an explicit `--format`. Without either, recipes
    /// are drawn as a table only on a capable terminal. Commands that take
    /// no output flags pass `None`.
    pub fn resolve(
        output: Option<&OutputArgs>,
        color_wanted: bool,
        ascii: bool,
        terminal: Terminal,
    ) -> Self {
        let mode = match output {
            Some(args) if args.json => OutputMode::Json,
            Some(OutputArgs {
                format: Some(Layout::Plain),
                ..
            }) => OutputMode::Plain,
            Some(OutputArgs {
                format: Some(Layout::Table),
                ..
            }) => OutputMode::Pretty,
            _ if terminal.stdout_tty && !terminal.dumb => OutputMode::Pretty,
            _ => OutputMode::Plain,
        };
        let color = color_wanted && terminal.stdout_tty && !terminal.dumb && !terminal.no_color_env;

        Self {
            mode,
            color,
            unicode: !ascii,
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            mode: OutputMode::Plain,
            color: false,
            unicode: false,
        }
    }
}
