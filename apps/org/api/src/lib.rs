//! Organization API bootstrap.
//!
//! One library, three binaries:
//!
//! | Binary               | Mounts                                  |
//! |----------------------|-----------------------------------------|
//! | `department-service` | `/api/departments`                      |
//! | `employee-service`   | `/api/employees`                        |
//! | `org-api`            | `/api/departments` and `/api/employees` |
//!
//! All three share the same configuration, database pool setup, health
//! endpoints and shutdown handling.

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::AppInfo;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::io;
use std::time::Duration;
use tracing::info;

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use config::Config;
use state::AppState;

/// How long cleanup may take after the shutdown signal
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Which resources a process serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deployment {
    Departments,
    Employees,
    Assembled,
}

/// Build the complete application: documented API routes under `/api`,
/// plus `/health` and `/ready`.
pub fn build_app(deployment: Deployment, state: &AppState) -> io::Result<Router> {
    let server = &state.config.server;
    let environment = &state.config.environment;

    // create_router adds docs/middleware to the composed routes
    let router = match deployment {
        Deployment::Departments => create_router::<openapi::DepartmentServiceDoc>(
            api::department_routes(state),
            server,
            environment,
        )?,
        Deployment::Employees => create_router::<openapi::EmployeeServiceDoc>(
            api::employee_routes(state),
            server,
            environment,
        )?,
        Deployment::Assembled => {
            create_router::<openapi::OrgApiDoc>(api::routes(state), server, environment)?
        }
    };

    // - /health: liveness check with app name/version
    // - /ready: readiness check against PostgreSQL
    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone())))
}

/// Process entry point shared by every binary.
pub async fn run(deployment: Deployment, app: AppInfo) -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env(app)?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!(?deployment, "Starting {} v{}", app.name, app.version);

    // Start-up only: request-time store failures are never retried
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let state = AppState { config, db };
    let router = build_app(deployment, &state)?;

    create_production_app(router, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("{} shutdown complete", app.name);
    Ok(())
}
