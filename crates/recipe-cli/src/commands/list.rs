use recipe_core::RecipeStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::print_recipe_list;
use crate::ui::{hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let recipes = store.read_all()?;
    let ui_ctx = ctx.ui_context(Some(&args.output));

    if recipes.is_empty() && !ui_ctx.mode.is_json() {
        if !ctx.quiet() {
            print(&ui_ctx, "No recipes available.");
            if ui_ctx.mode.is_pretty() {
                print(&ui_ctx, &hint(&ui_ctx, "recipes add <NAME> -i <INGREDIENT>"));
            }
        }
        return Ok(());
    }

    print_recipe_list(&ui_ctx, "list", None, &recipes, ctx.quiet())
}
