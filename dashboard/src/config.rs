//! Configuration for the inventory dashboard
//!
//! The two connection parameters for the hosted backend are required and
//! read from the environment at startup (`INVDASH_BACKEND__URL` and
//! `INVDASH_BACKEND__ANON_KEY`); startup fails if either is absent.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Hosted backend connection
    pub backend: BackendConfig,
}

/// Connection parameters for the hosted data/auth service
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the hosted backend
    pub url: String,

    /// Public (anonymous) API key
    pub anon_key: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("INVDASH_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            // backend.url and backend.anon_key have no defaults: missing
            // values fail the build and abort startup
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("INVDASH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
