use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, Coordinate};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::str::FromStr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let value = or_default(var, default)
            .parse::<i64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value <= 0 {
            return Err(invalid(var, format!("must be positive, got {value}")));
        }
        Ok(value)
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        f64::from_str(&or_default(var, default)).map_err(|e| invalid(var, e.to_string()))
    };

    let database_url = lookup("DATABASE_URL").ok().filter(|url| !url.is_empty());
    let env = parse_environment(&or_default("MEDLOC_ENV", "development"));

    let bind_addr = parse("MEDLOC_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MEDLOC_LOG_LEVEL", "info");

    let osrm_base_url = or_default("MEDLOC_OSRM_BASE_URL", "http://router.project-osrm.org");
    let route_timeout_secs = parse_u64("MEDLOC_ROUTE_TIMEOUT_SECS", "10")?;
    if route_timeout_secs == 0 {
        return Err(invalid(
            "MEDLOC_ROUTE_TIMEOUT_SECS",
            "must be at least 1 second".to_string(),
        ));
    }
    let route_enrich_limit = parse_usize("MEDLOC_ROUTE_ENRICH_LIMIT", "3")?;
    let user_agent = or_default("MEDLOC_USER_AGENT", "medloc/0.1 (store-locator)");

    let default_limit = parse_positive_i64("MEDLOC_DEFAULT_LIMIT", "5")?;
    let max_limit = parse_positive_i64("MEDLOC_MAX_LIMIT", "10")?;
    if default_limit > max_limit {
        return Err(invalid(
            "MEDLOC_DEFAULT_LIMIT",
            format!("{default_limit} exceeds MEDLOC_MAX_LIMIT ({max_limit})"),
        ));
    }

    let default_latitude = parse_f64("MEDLOC_DEFAULT_LATITUDE", "18.5581")?;
    if !(-90.0..=90.0).contains(&default_latitude) {
        return Err(invalid(
            "MEDLOC_DEFAULT_LATITUDE",
            format!("{default_latitude} is outside [-90, 90]"),
        ));
    }
    let default_longitude = parse_f64("MEDLOC_DEFAULT_LONGITUDE", "73.7934")?;
    if !(-180.0..=180.0).contains(&default_longitude) {
        return Err(invalid(
            "MEDLOC_DEFAULT_LONGITUDE",
            format!("{default_longitude} is outside [-180, 180]"),
        ));
    }
    let default_location = Coordinate::new(default_latitude, default_longitude)
        .map_err(|e| invalid("MEDLOC_DEFAULT_LATITUDE", e.to_string()))?;

    let db_max_connections = parse_u32("MEDLOC_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("MEDLOC_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("MEDLOC_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        osrm_base_url,
        route_timeout_secs,
        route_enrich_limit,
        user_agent,
        default_limit,
        max_limit,
        default_location,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
