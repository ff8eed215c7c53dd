use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Read-only for the lifetime of the process.
    pub catalog: Arc<Catalog>,
}
