//! CLI argument parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use movielib_store::StoreKind;

/// Catalog of users and their favorite movies over a flat-file store.
#[derive(Debug, Parser)]
#[command(name = "movielib", version, about)]
pub struct Cli {
    /// Storage backend (csv or json)
    #[arg(long, env = "MOVIELIB_STORE", default_value = "json", global = true)]
    pub store: StoreKind,

    /// Path of the dataset file
    #[arg(
        long,
        env = "MOVIELIB_DATA_FILE",
        default_value = "movielib.json",
        global = true
    )]
    pub data_file: PathBuf,

    /// OMDb API key for poster enrichment
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true, global = true)]
    pub omdb_api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 9878)]
        port: u16,
    },
    /// List all users
    Users,
    /// Add a user
    AddUser {
        /// Display name of the new user
        name: String,
    },
    /// List a user's movies
    Movies {
        /// Id of the user
        user_id: u32,
    },
    /// Show the highest-rated movies across all users
    TopRated {
        /// How many movies to show
        #[arg(default_value_t = 10)]
        limit: usize,
    },
}
