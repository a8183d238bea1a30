//! lightbnb CLI - query the LightBnB listings database
//!
//! Thin consumer of `lightbnb-db`:
//! - User lookup and creation (`user`, `add-user`)
//! - Guest reservation listing (`reservations`)
//! - Filtered property search (`search`, with `--dry-run` to print the query)
//! - Property creation from a JSON document (`add-property`)
//!
//! Results are printed to stdout as pretty JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::config::{load_dotenv, LightbnbConfig};
use tracing::debug;

mod commands;
mod tracing_setup;

use commands::CommandContext;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and update the LightBnB listings database"
)]
struct Cli {
    /// Enable debug logging (prints executed SQL and parameters)
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection string (overrides DATABASE_URL and config files)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a user by email or id
    User(commands::user::UserArgs),
    /// Create a user
    AddUser(commands::user::AddUserArgs),
    /// List a guest's reservations
    Reservations(commands::reservations::ReservationsArgs),
    /// Search properties with optional filters
    Search(commands::search::SearchArgs),
    /// Create a property from a JSON document
    AddProperty(commands::property::AddPropertyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env may set RUST_LOG, so it has to be loaded before the filter is built
    let env_files = load_dotenv();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;
    for path in &env_files {
        debug!("Loaded .env from {}", path.display());
    }

    let config = LightbnbConfig::load().context("Failed to load configuration")?;
    let database_url = cli
        .database_url
        .clone()
        .unwrap_or_else(|| config.database_url());
    let ctx = CommandContext::new(config, database_url);

    match cli.command {
        Commands::User(args) => commands::user::run(&ctx, args).await,
        Commands::AddUser(args) => commands::user::run_add(&ctx, args).await,
        Commands::Reservations(args) => commands::reservations::run(&ctx, args).await,
        Commands::Search(args) => commands::search::run(&ctx, args).await,
        Commands::AddProperty(args) => commands::property::run(&ctx, args).await,
    }
}
