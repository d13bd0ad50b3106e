//! Storage and connection pool configuration.
//!
//! Values are layered with `figment`: built-in defaults first, then
//! `KANBAN_DB_*` environment variables. Nested pool settings use a double
//! underscore, e.g. `KANBAN_DB_POOL__MAX_CONNECTIONS=4`.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "KANBAN_DB_";

/// Hard upper bound on pooled connections.
pub const MAX_POOL_CONNECTIONS: u32 = 10;

/// Errors raised while loading or checking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read or a value had the wrong shape.
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    /// Pool bounds are inconsistent.
    #[error("invalid pool configuration: {0}")]
    InvalidPool(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// Connection pool bounds and acquisition policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// How long `acquire` waits for a free connection before failing.
    pub acquire_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: MAX_POOL_CONNECTIONS,
            acquire_timeout_secs: 30,
        }
    }
}

impl PoolConfig {
    /// Checks `1 <= min <= max <= 10` and a non-zero timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPool`] describing the violated bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_connections == 0 {
            return Err(ConfigError::InvalidPool(
                "min_connections must be at least 1".to_owned(),
            ));
        }
        if self.max_connections > MAX_POOL_CONNECTIONS {
            return Err(ConfigError::InvalidPool(format!(
                "max_connections must be at most {MAX_POOL_CONNECTIONS}, got {}",
                self.max_connections
            )));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::InvalidPool(format!(
                "min_connections ({}) exceeds max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        if self.acquire_timeout_secs == 0 {
            return Err(ConfigError::InvalidPool(
                "acquire_timeout_secs must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns the acquisition timeout.
    #[must_use]
    pub const fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// Location and credentials of the task database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Login role; the server default applies when unset.
    pub user: Option<String>,
    /// Password for `user`.
    pub password: Option<String>,
    /// Pool settings.
    pub pool: PoolConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 5432,
            database: "kanban".to_owned(),
            user: None,
            password: None,
            pool: PoolConfig::default(),
        }
    }
}

impl StorageConfig {
    /// Loads defaults overridden by `KANBAN_DB_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable cannot be parsed or the pool
    /// bounds are invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(Figment::new().merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extracts configuration from `overrides` layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or the pool bounds are
    /// invalid.
    pub fn from_figment(overrides: Figment) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(overrides)
            .extract()?;
        config.pool.validate()?;
        tracing::debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "loaded storage configuration"
        );
        Ok(config)
    }

    /// Renders a `postgres://` connection URL.
    #[must_use]
    pub fn database_url(&self) -> String {
        let credentials = match (&self.user, &self.password) {
            (Some(user), Some(password)) => format!("{user}:{password}@"),
            (Some(user), None) => format!("{user}@"),
            (None, _) => String::new(),
        };
        format!(
            "postgres://{credentials}{}:{}/{}",
            self.host, self.port, self.database
        )
    }
}
