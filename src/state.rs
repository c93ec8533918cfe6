//! Shared application state for all routes.

use crate::registry::ResourceRegistry;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Built once at startup; resources are never resolved per request.
    pub registry: Arc<ResourceRegistry>,
}
