//! Shared application state.

/// Cloned into the readiness handler; domain routers take what they need
/// at construction time.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
