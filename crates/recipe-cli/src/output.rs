//! Output formatting helpers for the CLI.

use recipe_core::Recipe;

use crate::ui::{header, print, table, Column, UiContext};

/// Ingredients joined for display.
pub fn ingredient_summary(recipe: &Recipe) -> String {
    recipe.ingredients.join(", ")
}

/// Convert recipes to a JSON array for output.
pub fn recipes_json(recipes: &[Recipe]) -> anyhow::Result<String> {
    let values: Vec<serde_json::Value> = recipes
        .iter()
        .map(|recipe| {
            serde_json::json!({
                "name": recipe.name,
                "ingredients": recipe.ingredients,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&values)?)
}

/// Print recipes in the resolved output mode.
///
/// The caller handles the empty case so each command can word it.
pub fn print_recipe_list(
    ctx: &UiContext,
    command: &str,
    context: Option<&str>,
    recipes: &[Recipe],
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", recipes_json(recipes)?);
        return Ok(());
    }

    if !quiet && ctx.mode.is_pretty() {
        print(ctx, &header(ctx, command, context));
    }

    let rows: Vec<Vec<String>> = recipes
        .iter()
        .map(|recipe| vec![recipe.name.clone(), ingredient_summary(recipe)])
        .collect();
    print(
        ctx,
        &table(
            ctx,
            &[Column::new("Name"), Column::new("Ingredients")],
            &rows,
            ": ",
        ),
    );
    Ok(())
}
