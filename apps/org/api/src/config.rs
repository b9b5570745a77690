use core_config::{AppInfo, FromEnv, server::ServerConfig};

use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Service configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// `app` is passed in so each binary reports its own name.
    pub fn from_env(app: AppInfo) -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 by default

        Ok(Self {
            app,
            database,
            server,
            environment,
        })
    }
}
