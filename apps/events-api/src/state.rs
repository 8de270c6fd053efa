//! Application state management.
//!
//! The shared state holds configuration and the MongoDB handles created in
//! `main`; handlers receive it by cheap clone (the client shares its
//! connection pool).

use mongodb::{Client, Database};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
