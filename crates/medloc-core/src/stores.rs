use serde::Serialize;

use crate::Coordinate;

/// A medical store as supplied by a [`crate::StoreCatalog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreRecord {
    pub store_id: i64,
    pub store_name: String,
    pub address: String,
    #[serde(flatten)]
    pub location: Coordinate,
    pub phone_number: String,
}

/// A store paired with its great-circle distance from the query origin.
///
/// `distance_km` is kept at full precision so ordering is exact; rounding for
/// display happens in [`RankedStore::rounded_distance_km`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStore {
    #[serde(flatten)]
    pub store: StoreRecord,
    pub distance_km: f64,
}

impl RankedStore {
    /// Distance rounded to two decimal places.
    #[must_use]
    pub fn rounded_distance_km(&self) -> f64 {
        (self.distance_km * 100.0).round() / 100.0
    }
}
