//! Offline unit tests for medloc-db pool configuration and row conversion.
//! These tests do not require a live database connection.

use chrono::Utc;
use medloc_core::{AppConfig, Coordinate, CoreError, Environment, StoreCatalog};
use medloc_db::{row_to_store_record, CatalogSource, MedicalStoreRow, PoolConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

fn app_config() -> AppConfig {
    AppConfig {
        database_url: Some("postgres://example".to_string()),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        osrm_base_url: "http://localhost:5000".to_string(),
        route_timeout_secs: 10,
        route_enrich_limit: 3,
        user_agent: "ua".to_string(),
        default_limit: 5,
        max_limit: 10,
        default_location: Coordinate::new(18.5581, 73.7934).expect("valid"),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    }
}

fn row(latitude: f64, longitude: f64) -> MedicalStoreRow {
    MedicalStoreRow {
        store_id: 2,
        store_name: "MedPlus Baner Rd Baner".to_string(),
        address: "Baner Rd, Pune".to_string(),
        latitude,
        longitude,
        phone_number: "4067006700".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let pool_config = PoolConfig::from_app_config(&app_config());
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn row_converts_to_store_record() {
    let store = row_to_store_record(row(18.558_091, 73.793_439)).expect("valid row");
    assert_eq!(store.store_id, 2);
    assert_eq!(store.store_name, "MedPlus Baner Rd Baner");
    assert!((store.location.latitude() - 18.558_091).abs() < 1e-12);
    assert!((store.location.longitude() - 73.793_439).abs() < 1e-12);
    assert_eq!(store.phone_number, "4067006700");
}

#[test]
fn row_with_out_of_range_coordinates_is_rejected() {
    let err = row_to_store_record(row(118.5, 73.79)).expect_err("invalid latitude");
    assert!(matches!(err, CoreError::InvalidCoordinate { .. }));
}

#[tokio::test]
async fn catalog_source_without_database_url_uses_sample() {
    let mut config = app_config();
    config.database_url = None;

    let catalog = CatalogSource::from_app_config(&config)
        .await
        .expect("sample catalog");
    assert_eq!(catalog.kind(), "sample");
    catalog.readiness().await.expect("sample is always ready");
    assert_eq!(catalog.list_stores().await.expect("list").len(), 2);
}
