//! Database connection pool management.
//!
//! The pool settings live here, next to the code that uses them; the API
//! crate deserializes its `[database]` config section directly into
//! [`DatabaseConfig`] and hands it over.

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Connection pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
}

fn default_max_connections() -> u32 {
    20
}
fn default_min_connections() -> u32 {
    5
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_idle_timeout() -> u64 {
    600
}
fn default_max_lifetime() -> u64 {
    1800
}

/// Creates a PostgreSQL connection pool with the given configuration.
///
/// Connections are recycled after `max_lifetime_secs` so a long-lived pool
/// eventually picks up server-side changes (failover, parameter reload).
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: DatabaseConfig = serde_json::from_value(serde_json::json!({
            "url": "postgres://localhost/app"
        }))
        .unwrap();
        assert_eq!(config.url, "postgres://localhost/app");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 5);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.idle_timeout_secs, 600);
        assert_eq!(config.max_lifetime_secs, 1800);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config: DatabaseConfig = serde_json::from_value(serde_json::json!({
            "url": "postgres://localhost/app",
            "max_connections": 3,
            "min_connections": 1
        }))
        .unwrap();
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_url_is_required() {
        let result: Result<DatabaseConfig, _> =
            serde_json::from_value(serde_json::json!({ "max_connections": 3 }));
        assert!(result.is_err());
    }
}
