//! CLI command definitions.

pub mod items;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the itemstore API.
#[derive(Debug, Parser)]
#[command(name = "itemstore-client")]
#[command(about = "CLI client for the itemstore API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ITEMSTORE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Item management.
    Items(items::ItemsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::ItemsAction;

    #[test]
    fn test_parse_list_with_cursor() {
        let cli = Cli::try_parse_from([
            "itemstore-client",
            "--format",
            "json",
            "items",
            "list",
            "--limit",
            "2",
            "--cursor",
            r#"{"id":"ACT-1-ABCDEF"}"#,
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Items(cmd) = cli.command;
        match cmd.action {
            ItemsAction::List { limit, cursor } => {
                assert_eq!(limit, Some(2));
                assert_eq!(cursor.as_deref(), Some(r#"{"id":"ACT-1-ABCDEF"}"#));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_create_requires_email() {
        let result = Cli::try_parse_from(["itemstore-client", "items", "create", "--name", "Ana"]);

        assert!(result.is_err());
    }
}
