//! Environment configuration for the events API.

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Everything the events API needs at startup: the binary's identity for
/// `/health`, the MongoDB connection settings (`MONGODB_URL`, database
/// defaulting to `dtApiCreation`), the listen address (`HOST`/`PORT`),
/// and the dev/prod switch that picks the log format.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?.with_app_name(env!("CARGO_PKG_NAME"));
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}
