use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use techhub_catalog::CategoryFilter;
use techhub_core::PRICE_CEILING;
use techhub_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "techhub")]
#[command(about = "Browse the TechHub sample catalog and run shopping sessions")]
pub struct Cli {
    /// Catalog seed; a random one is drawn (and logged) when unset
    #[arg(long, env = "TECHHUB_SEED", global = true)]
    pub seed: Option<u64>,

    /// Log output format: json or pretty
    #[arg(long, env = "TECHHUB_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog products matching a category and price range
    List(ListArgs),
    /// Show the selectable category filters
    Categories,
    /// Run a scripted shopping session (`-` reads the script from stdin)
    Session {
        script: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// `all` or one of laptops, phones, audio, accessories, gaming
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    #[arg(long, default_value_t = 0)]
    pub min: u64,

    #[arg(long, default_value_t = PRICE_CEILING)]
    pub max: u64,

    /// Print products as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use techhub_catalog::Category;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_parses_category_and_bounds() {
        let cli = Cli::try_parse_from([
            "techhub", "--seed", "9", "list", "--category", "phones", "--max", "50000",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.category, CategoryFilter::Only(Category::Phones));
                assert_eq!((args.min, args.max), (0, 50_000));
                assert!(!args.json);
            }
            other => panic!("Expected list command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["techhub", "list", "--category", "toasters"]).is_err());
    }
}
