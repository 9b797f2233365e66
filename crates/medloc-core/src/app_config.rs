use std::net::SocketAddr;

use crate::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings, built once at startup and passed by reference.
#[derive(Clone)]
pub struct AppConfig {
    /// When `None`, the built-in sample catalog is used instead of Postgres.
    pub database_url: Option<String>,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub osrm_base_url: String,
    pub route_timeout_secs: u64,
    /// How many of the nearest stores get a route lookup per query.
    pub route_enrich_limit: usize,
    pub user_agent: String,
    pub default_limit: i64,
    pub max_limit: i64,
    /// Used when the caller does not supply a location.
    pub default_location: Coordinate,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Resolve a caller-supplied nearest-store count: `default_limit` when
    /// absent, then capped at `max_limit`. Non-positive values pass through so
    /// the ranker can reject them.
    #[must_use]
    pub fn effective_limit(&self, limit: Option<i64>) -> i64 {
        limit.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[redacted]"),
            )
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("osrm_base_url", &self.osrm_base_url)
            .field("route_timeout_secs", &self.route_timeout_secs)
            .field("route_enrich_limit", &self.route_enrich_limit)
            .field("user_agent", &self.user_agent)
            .field("default_limit", &self.default_limit)
            .field("max_limit", &self.max_limit)
            .field("default_location", &self.default_location)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
