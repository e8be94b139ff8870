use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_BUSY_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_BUSY_TIMEOUT_SECS, MAX_DATABASE_MAX_CONNECTIONS,
    MIN_DATABASE_BUSY_TIMEOUT_SECS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
    pub max_connections: u32,
    /// How long a writer waits for SQLite's write lock before failing
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_DATABASE_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Database path must not escape the config dir
        let db_path = Path::new(&self.path);
        if self.path.is_empty() || db_path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if !(MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS)
            .contains(&self.max_connections)
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if !(MIN_DATABASE_BUSY_TIMEOUT_SECS..=MAX_DATABASE_BUSY_TIMEOUT_SECS)
            .contains(&self.busy_timeout_secs)
        {
            return Err(ConfigError::database(format!(
                "database.busy_timeout_secs must be {}-{}, got {}",
                MIN_DATABASE_BUSY_TIMEOUT_SECS,
                MAX_DATABASE_BUSY_TIMEOUT_SECS,
                self.busy_timeout_secs
            )));
        }

        Ok(())
    }
}
