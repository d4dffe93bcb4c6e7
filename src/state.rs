//! Application state management
//!
//! The connection pool is the only state shared between requests.

use crate::db::Database;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
