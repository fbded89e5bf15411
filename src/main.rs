use anyhow::Context;
use clap::{Parser, Subcommand};

mod config;
mod db;
mod password;
mod seeder;
mod user;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(
    name = "admin-seed",
    about = "Seed or remove the administrative user during a deploy step",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Create the admin user from ADMIN_EMAIL / ADMIN_PASSWORD (the default).
    Apply,
    /// Remove the seeded admin user matching ADMIN_EMAIL.
    Revert,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "admin_seed=debug,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let db = db::connect(&config.database_url).await?;

    match cli.command.unwrap_or(Command::Apply) {
        Command::Apply => {
            sqlx::migrate!("./migrations")
                .run(&db)
                .await
                .context("run database migrations")?;
            seeder::apply(&db, &config.seed).await?;
        }
        Command::Revert => {
            seeder::revert(&db, &config.seed).await?;
        }
    }

    Ok(())
}
