#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use parser::{Cli, Commands};
