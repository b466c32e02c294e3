use recipe_core::{Query, RecipeStore};

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::constants::NO_RESULTS_MESSAGE;
use crate::errors::CliError;
use crate::output::print_recipe_list;
use crate::ui::print;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let query = Query::parse(&args.query).map_err(CliError::from)?;
    let store = ctx.open_store()?;
    let recipes = store.read_all()?;
    let results: Vec<_> = query.search(&recipes).into_iter().cloned().collect();

    let ui_ctx = ctx.ui_context(Some(&args.output));
    if results.is_empty() && !ui_ctx.mode.is_json() {
        if !ctx.quiet() {
            print(&ui_ctx, NO_RESULTS_MESSAGE);
        }
        return Ok(());
    }

    let context = query.to_string();
    print_recipe_list(&ui_ctx, "search", Some(&context), &results, ctx.quiet())
}
