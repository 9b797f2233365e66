//! Database operations for the `medical_stores` table.

use chrono::{DateTime, Utc};
use medloc_core::{CatalogError, Coordinate, CoreError, StoreCatalog, StoreRecord};
use sqlx::PgPool;

use crate::DbError;

/// A row from the `medical_stores` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MedicalStoreRow {
    pub store_id: i64,
    pub store_name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Return every row in `medical_stores`, ordered by `store_id`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_medical_stores(pool: &PgPool) -> Result<Vec<MedicalStoreRow>, sqlx::Error> {
    sqlx::query_as::<_, MedicalStoreRow>(
        "SELECT store_id, store_name, address, latitude, longitude, \
                phone_number, created_at, updated_at \
         FROM medical_stores \
         ORDER BY store_id",
    )
    .fetch_all(pool)
    .await
}

/// Convert a row into a [`StoreRecord`], validating its coordinates.
///
/// # Errors
///
/// Returns [`CoreError::InvalidCoordinate`] if the stored latitude/longitude
/// are out of range.
pub fn row_to_store_record(row: MedicalStoreRow) -> Result<StoreRecord, CoreError> {
    let location = Coordinate::new(row.latitude, row.longitude)?;
    Ok(StoreRecord {
        store_id: row.store_id,
        store_name: row.store_name,
        address: row.address,
        location,
        phone_number: row.phone_number,
    })
}

/// Upsert stores into `medical_stores` keyed by `store_id`.
///
/// Returns the number of stores processed. All upserts run inside a single
/// transaction; if any fails the batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_medical_stores(pool: &PgPool, stores: &[StoreRecord]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;

    for store in stores {
        sqlx::query(
            "INSERT INTO medical_stores \
                 (store_id, store_name, address, latitude, longitude, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (store_id) DO UPDATE SET \
                 store_name = EXCLUDED.store_name, \
                 address = EXCLUDED.address, \
                 latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, \
                 phone_number = EXCLUDED.phone_number, \
                 updated_at = NOW()",
        )
        .bind(store.store_id)
        .bind(&store.store_name)
        .bind(&store.address)
        .bind(store.location.latitude())
        .bind(store.location.longitude())
        .bind(&store.phone_number)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(stores.len())
}

/// [`StoreCatalog`] backed by the `medical_stores` table.
#[derive(Debug, Clone)]
pub struct PgStoreCatalog {
    pool: PgPool,
}

impl PgStoreCatalog {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl StoreCatalog for PgStoreCatalog {
    async fn list_stores(&self) -> Result<Vec<StoreRecord>, CatalogError> {
        let rows = list_medical_stores(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "failed to read medical_stores");
            CatalogError::Unavailable(e.to_string())
        })?;

        let stores = rows
            .into_iter()
            .filter_map(|row| {
                let store_id = row.store_id;
                match row_to_store_record(row) {
                    Ok(store) => Some(store),
                    Err(e) => {
                        tracing::warn!(store_id, error = %e, "skipping store with invalid coordinates");
                        None
                    }
                }
            })
            .collect();
        Ok(stores)
    }
}
