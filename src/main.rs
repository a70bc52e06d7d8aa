mod cache;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod responses;
mod tui;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use cli::{BrowseArgs, CacheCommands, Cli, Commands};
use client::RandomUserClient;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {e}", "Error:".red().bold());

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global output format
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't touch config or the network
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdeck", &mut io::stdout());
        }
        Some(Commands::Cache { action }) => match action {
            CacheCommands::Show => commands::cache::show()?,
            CacheCommands::Clear => commands::cache::clear()?,
            CacheCommands::Path => commands::cache::path()?,
        },
        command => {
            let config = Config::load()?;
            let client = RandomUserClient::new(&config.api_url())?;

            match command {
                Some(Commands::List(args)) => {
                    commands::users::list(&client, &config, args).await?;
                }
                // No subcommand opens the browser
                browse => {
                    let args = match browse {
                        Some(Commands::Browse(args)) => args,
                        _ => BrowseArgs::default(),
                    };
                    let page_size = config.page_size(args.page_size);
                    let seed = config.seed(args.seed);
                    tui::run(client, page_size, seed, args.fresh).await?;
                }
            }
        }
    }

    Ok(())
}
