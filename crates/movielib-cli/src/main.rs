//! Entry point for the `movielib` binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use movielib_axum::{CorsConfig, ServerConfig};
use movielib_cli::parser::{Cli, Commands};
use movielib_cli::{bootstrap, commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading env-backed arguments
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Cli {
        store,
        data_file,
        omdb_api_key,
        command,
    } = Cli::parse();

    match command {
        Commands::Serve { port } => {
            let config = ServerConfig {
                port,
                store_kind: store,
                data_file,
                omdb_api_key,
                cors: CorsConfig::AllowAll,
            };
            movielib_axum::serve(config).await
        }
        Commands::Users => commands::list_users(&bootstrap(store, &data_file, omdb_api_key)).await,
        Commands::AddUser { name } => {
            commands::add_user(&bootstrap(store, &data_file, omdb_api_key), &name).await
        }
        Commands::Movies { user_id } => {
            commands::list_movies(&bootstrap(store, &data_file, omdb_api_key), user_id).await
        }
        Commands::TopRated { limit } => {
            commands::top_rated(&bootstrap(store, &data_file, omdb_api_key), limit).await
        }
    }
}
