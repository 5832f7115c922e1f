//! Command implementations for campctl CLI

use anyhow::{Context, Result};
use clap::Args;
use campctl_server::db::SqlitePool;

pub mod db;
pub mod serve;

pub use db::{run_add_activity, run_init_db};
pub use serve::run_serve;

/// Database location shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (SQLite)
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://app.db")]
    pub database_url: String,
}

impl DatabaseArgs {
    /// Open a connection pool for the configured database
    pub async fn connect(&self) -> Result<SqlitePool> {
        campctl_server::db::create_pool(&self.database_url)
            .await
            .with_context(|| format!("Failed to open database {}", self.database_url))
    }
}
