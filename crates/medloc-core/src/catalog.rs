//! Store catalog abstraction.
//!
//! Ranking only needs a list of candidate stores; where that list comes from
//! (an in-memory sample, a Postgres table) is behind [`StoreCatalog`].

use std::future::Future;

use thiserror::Error;

use crate::{Coordinate, StoreRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be read. Ranking cannot proceed without
    /// candidates, so callers treat this as a hard failure.
    #[error("store catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of candidate stores for ranking.
///
/// No ordering guarantee is made on the returned list.
pub trait StoreCatalog: Send + Sync {
    /// Load every store currently in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the backing store cannot be read.
    fn list_stores(&self) -> impl Future<Output = Result<Vec<StoreRecord>, CatalogError>> + Send;
}

/// In-memory catalog over a fixed list of stores.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    stores: Vec<StoreRecord>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(stores: Vec<StoreRecord>) -> Self {
        Self { stores }
    }

    /// The two Pune `MedPlus` branches used as the demo dataset when no
    /// database is configured.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_stores())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl StoreCatalog for StaticCatalog {
    async fn list_stores(&self) -> Result<Vec<StoreRecord>, CatalogError> {
        Ok(self.stores.clone())
    }
}

/// Demo dataset. Coordinates are literal and in range, so construction
/// failures are skipped rather than surfaced.
#[must_use]
pub fn sample_stores() -> Vec<StoreRecord> {
    [
        (
            1,
            "MedPlus Regency Orion Baner Street",
            "Shop No.15 Ground, Regency Orion, Soc, Mohan Nagar Co-Op Society, Baner, Pune",
            18.551_666_0,
            73.768_846_0,
            "9226011653",
        ),
        (
            2,
            "MedPlus Baner Rd Baner",
            "Milkat No.O/A/01, Green Hills Apartment, Shop No.2, Baner Rd, opp. Pantaloons",
            18.558_091_0,
            73.793_439_0,
            "4067006700",
        ),
    ]
    .into_iter()
    .filter_map(|(store_id, name, address, lat, lon, phone)| {
        let location = Coordinate::new(lat, lon).ok()?;
        Some(StoreRecord {
            store_id,
            store_name: name.to_string(),
            address: address.to_string(),
            location,
            phone_number: phone.to_string(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_catalog_lists_both_demo_stores() {
        let catalog = StaticCatalog::sample();
        let stores = catalog.list_stores().await.expect("static catalog never fails");

        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].store_id, 1);
        assert_eq!(stores[1].store_name, "MedPlus Baner Rd Baner");
        assert_eq!(stores[1].phone_number, "4067006700");
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let catalog = StaticCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.list_stores().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn sample_catalog_ranks_baner_rd_first_from_default_location() {
        let catalog = StaticCatalog::sample();
        let origin = Coordinate::new(18.5581, 73.7934).expect("valid");
        let stores = catalog.list_stores().await.expect("list");

        let ranked = crate::rank(origin, stores, 5).expect("rank");

        assert_eq!(ranked[0].store.store_id, 2);
        assert!(ranked[0].distance_km < 0.1);
        assert_eq!(ranked[1].store.store_id, 1);
        assert!((ranked[1].distance_km - 2.7).abs() < 0.2, "{}", ranked[1].distance_km);
    }
}
