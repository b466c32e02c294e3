use std::io;

use crate::app::AppContext;
use crate::menu::RecipeUi;

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut ui = RecipeUi::new(stdin.lock(), stdout.lock(), store);
    ui.run()
        .map_err(|e| anyhow::anyhow!("Console I/O failed: {}", e))
}
