//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stash CLI - compile and run item searches
#[derive(Parser, Debug)]
#[command(name = "stash")]
#[command(version)]
#[command(about = "Stash CLI - compile item-search filters into MongoDB queries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./stash.toml when present)
    #[arg(short, long, global = true, env = "STASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a filter and print the predicates or the MongoDB query
    Compile(CompileArgs),

    /// List the currency names the compiler accepts
    Currencies(CurrenciesArgs),

    /// Run a filter against the item collection
    Search(SearchArgs),

    /// Display version information
    Version,
}

/// Where a filter payload comes from and how it is shaped.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON filter file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Treat the payload as a flat web-form submission
    #[arg(long)]
    pub form: bool,
}

// =============================================================================
// Compile Command
// =============================================================================

/// Arguments for the `compile` command
#[derive(Args, Debug)]
pub struct CompileArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,
}

/// Output formats for `compile`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Predicate list as JSON
    #[default]
    Json,
    /// MongoDB filter document as extended JSON
    Mongo,
    /// One human-readable predicate per line
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Mongo => write!(f, "mongo"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

// =============================================================================
// Currencies Command
// =============================================================================

/// Arguments for the `currencies` command
#[derive(Args, Debug)]
pub struct CurrenciesArgs {
    /// Print the table as a JSON object
    #[arg(long)]
    pub json: bool,
}

// =============================================================================
// Search Command
// =============================================================================

/// Arguments for the `search` command
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Maximum number of items to return
    #[arg(short, long)]
    pub limit: Option<i64>,

    /// Ignore any filter and return the most recent items
    #[arg(long, conflicts_with_all = ["input", "form"])]
    pub latest: bool,

    /// MongoDB connection URI (overrides the configuration file)
    #[arg(long, env = "STASH_MONGODB_URI")]
    pub uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compile() {
        let cli = Cli::parse_from(["stash", "compile", "--input", "f.json", "--format", "mongo"]);
        match cli.command {
            Command::Compile(args) => {
                assert_eq!(args.source.input, Some(PathBuf::from("f.json")));
                assert_eq!(args.format, OutputFormat::Mongo);
                assert!(!args.source.form);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::parse_from(["stash", "currencies", "--config", "alt.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_latest_conflicts_with_input() {
        let result = Cli::try_parse_from(["stash", "search", "--latest", "--input", "f.json"]);
        assert!(result.is_err());
    }
}
