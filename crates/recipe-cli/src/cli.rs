use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use recipe_core::VERSION;

/// Recipes - a flat-file recipe book for the terminal
#[derive(Parser)]
#[command(name = "recipes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the recipe file
    #[arg(short, long, global = true, env = "RECIPES_FILE")]
    pub file: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "RECIPES_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Layout for recipe listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Bordered table with a header
    Table,
    /// One `name: ingredients` line per recipe
    Plain,
}

/// Output flags shared by `list` and `search`
#[derive(Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Output layout
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<Layout>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Recipe name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Add one ingredient (repeatable)
    #[arg(short, long, value_name = "INGREDIENT")]
    pub ingredient: Vec<String>,

    /// Comma separated ingredients
    #[arg(long, value_name = "LIST", conflicts_with = "ingredient")]
    pub ingredients: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search query (e.g., "name=Tomato&ingredient=Garlic")
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// List all recipes
    List(ListArgs),

    /// Add a new recipe
    Add(AddArgs),

    /// Search recipes by name or ingredient
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
