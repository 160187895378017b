//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use std::sync::Arc;

use crate::bootstrap::AxumContext;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AxumContext` holding the composed library
/// service.
pub type AppState = Arc<AxumContext>;
