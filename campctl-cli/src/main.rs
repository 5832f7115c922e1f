//! campctl CLI - camp signup service
//!
//! Entry point for the camp HTTP API and its database chores:
//! - `serve`: run the HTTP API
//! - `init-db`: create the schema
//! - `add-activity`: insert an activity campers can sign up for

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "campctl",
    author,
    version,
    about = "Camp signup service: campers, activities and their signups"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema
    InitDb(commands::db::InitDbArgs),
    /// Add an activity
    AddActivity(commands::db::AddActivityArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::InitDb(args) => commands::run_init_db(args).await,
        Commands::AddActivity(args) => commands::run_add_activity(args).await,
    }
}
