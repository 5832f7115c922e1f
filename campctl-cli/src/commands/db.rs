//! Database maintenance commands

use anyhow::{Context, Result};
use clap::Parser;

use campctl_server::db::{migrations, ActivityRepo};
use campctl_server::models::NewActivity;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the camp tables if they do not exist yet
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to apply database schema")?;

    println!("Schema ready at {}", args.database.database_url);
    Ok(())
}

/// Arguments for the add-activity command
#[derive(Parser, Debug)]
pub struct AddActivityArgs {
    /// Activity name
    #[arg(long)]
    pub name: Option<String>,

    /// Difficulty rating
    #[arg(long)]
    pub difficulty: Option<i64>,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Insert an activity and print it as JSON
pub async fn run_add_activity(args: AddActivityArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to apply database schema")?;

    let mut conn = pool
        .acquire()
        .await
        .context("Failed to acquire database connection")?;
    let activity = ActivityRepo::new(&mut conn)
        .create(NewActivity::new(args.name, args.difficulty))
        .await
        .context("Failed to insert activity")?;

    println!(
        "{}",
        serde_json::json!({
            "id": activity.id,
            "name": activity.name,
            "difficulty": activity.difficulty,
        })
    );
    Ok(())
}
