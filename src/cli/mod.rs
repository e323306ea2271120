pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "movie")]
#[command(about = "Movie CLI - Direct access to the movie store")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Insert the demo movies")]
    Seed,

    #[command(about = "List all movies")]
    List,

    #[command(about = "Show one movie by id")]
    Show {
        #[arg(help = "Movie ID (24 hex characters)")]
        id: String,
    },

    #[command(about = "Check connectivity to the movie store")]
    Ping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();
    let store = crate::database::DatabaseManager::open(&config.database)?;

    let result = match cli.command {
        Commands::Seed => commands::movies::seed(store.as_ref(), &output_format).await,
        Commands::List => commands::movies::list(store.as_ref(), &output_format).await,
        Commands::Show { id } => commands::movies::show(store.as_ref(), &id, &output_format).await,
        Commands::Ping => commands::movies::ping(store.as_ref(), &output_format).await,
    };

    store.close().await;
    result
}
