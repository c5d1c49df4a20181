//! Eblen Sushi CLI - database migrations and catalog management.
//!
//! # Usage
//!
//! ```bash
//! # Apply storefront database migrations
//! eblen migrate
//!
//! # Load products from a YAML file
//! eblen seed --file crates/cli/seed/products.yaml
//!
//! # Replace the whole catalog with the file's products
//! eblen seed --file crates/cli/seed/products.yaml --replace
//! ```
//!
//! Both commands read `EBLEN_DATABASE_URL` (falling back to `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "eblen")]
#[command(author, version, about = "Eblen Sushi CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run storefront database migrations
    Migrate,
    /// Insert catalog products from a YAML file
    Seed {
        /// Path to the products YAML file
        #[arg(short, long)]
        file: PathBuf,

        /// Delete existing products before inserting
        #[arg(long)]
        replace: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { file, replace } => commands::seed::products(&file, replace).await,
    }
}
