//! HTTP handlers, grouped by resource.

pub mod movies;
pub mod stats;
pub mod users;
