//! Application state shared across axum route handlers.

use sea_orm::DatabaseConnection;

/// Holds the pooled SeaORM connection; cloned cheaply into each handler
/// via axum's `State<T>` extractor.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Shared reference to the database connection.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
