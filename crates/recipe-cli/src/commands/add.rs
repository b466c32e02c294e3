use recipe_core::RecipeStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_ingredients, validate_new_recipe};
use crate::output::ingredient_summary;
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let name = args.name.trim();
    let ingredients = match args.ingredients.as_deref() {
        Some(list) => parse_ingredients(list),
        None => args
            .ingredient
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
    };
    validate_new_recipe(name, &ingredients)?;

    let mut store = ctx.open_store()?;
    let recipe = store.append(name, &ingredients)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(None);
        let path = store.path().display().to_string();
        let summary = ingredient_summary(&recipe);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Recipe added successfully.",
                &[
                    ("Name", recipe.name.as_str()),
                    ("Ingredients", summary.as_str()),
                    ("File", path.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
