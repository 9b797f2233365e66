pub mod app_config;
pub mod catalog;
pub mod config;
pub mod location;
pub mod ranking;
pub mod stores;

pub use app_config::{AppConfig, Environment};
pub use catalog::{sample_stores, CatalogError, StaticCatalog, StoreCatalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use location::{distance_between, distance_km, Coordinate};
pub use ranking::{rank, rank_all};
pub use stores::{RankedStore, StoreRecord};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate ({latitude}, {longitude}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
