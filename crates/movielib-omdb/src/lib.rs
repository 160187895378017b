#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
// Allow private types in public type alias - DefaultOmdbClient is meant to be
// used through the MetadataLookup trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultOmdbClient;

// Configuration
pub use config::OmdbClientConfig;
