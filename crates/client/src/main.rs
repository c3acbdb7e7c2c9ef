//! itemstore-client CLI entry point.

use clap::Parser;
use itemstore_client::cli::items::{fields, ItemsAction};
use itemstore_client::cli::{Cli, Commands, OutputFormat};
use itemstore_client::client::ItemstoreClient;
use itemstore_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ItemstoreClient::new(&cli.base_url);

    let Commands::Items(items_cmd) = cli.command;
    match items_cmd.action {
        ItemsAction::List { limit, cursor } => {
            let page = client.list_items(limit, cursor.as_deref()).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&page, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_page(&page)),
            }
        }
        ItemsAction::Create { name, email } => {
            let body = fields([("name", Some(name)), ("email", Some(email))]);
            let item = client.create_item(&body).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                OutputFormat::Pretty => println!("Created:\n{}", pretty::format_item(&item)),
            }
        }
        ItemsAction::Get { id } => {
            let item = client.get_item(&id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_item(&item)),
            }
        }
        ItemsAction::Update { id, name, email } => {
            let body = fields([("name", name), ("email", email)]);
            let item = client.update_item(&id, &body).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                OutputFormat::Pretty => println!("Updated:\n{}", pretty::format_item(&item)),
            }
        }
        ItemsAction::Delete { id } => {
            let message = client.delete_item(&id).await?;
            if !cli.quiet {
                println!("{} ({})", message, id);
            }
        }
    }

    Ok(())
}
