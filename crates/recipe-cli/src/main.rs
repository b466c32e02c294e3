//! Recipes CLI - a flat-file recipe book for the terminal
//!
//! Without a subcommand this starts the interactive menu. The `list`, `add`
//! and `search` subcommands expose the same operations for scripting.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod menu;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, list, menu as menu_cmd, misc, search};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(None);

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_error_hint(error: &str) -> (&str, Option<&str>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            let hint = error[idx + marker.len()..].trim();
            return (&error[..idx], Some(hint));
        }
    }
    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => {
            menu_cmd::handle_menu(ctx)?;
        }
        Some(Commands::List(args)) => {
            list::handle_list(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            add::handle_add(ctx, args)?;
        }
        Some(Commands::Search(args)) => {
            search::handle_search(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_error_hint() {
        let (message, hint) = split_error_hint("Malformed query: x\nHint: Queries look like a=b");
        assert_eq!(message, "Malformed query: x");
        assert_eq!(hint, Some("Queries look like a=b"));
    }

    #[test]
    fn test_split_error_without_hint() {
        assert_eq!(split_error_hint("Storage error"), ("Storage error", None));
    }
}
