//! Database (SQLite) configuration.

use serde::{Deserialize, Serialize};

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum number of concurrent database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Whether to run pending migrations on startup (default: true)
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_db_path() -> String {
    "ayamfresh.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_run_migrations() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            run_migrations: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "ayamfresh.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
    }
}
