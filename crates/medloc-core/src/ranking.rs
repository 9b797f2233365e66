//! Nearest-store ranking.

use std::collections::HashSet;

use crate::{distance_km, Coordinate, CoreError, RankedStore, StoreRecord};

/// Rank `stores` by distance from `origin` and keep the nearest `limit`.
///
/// Ordering is ascending by `distance_km`, ties broken by `store_id`. The
/// result has `min(limit, stores.len())` entries; an empty catalog yields an
/// empty result. If the same `store_id` appears more than once only its
/// nearest occurrence is kept.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `limit` is zero or negative.
pub fn rank(
    origin: Coordinate,
    stores: Vec<StoreRecord>,
    limit: i64,
) -> Result<Vec<RankedStore>, CoreError> {
    if limit <= 0 {
        return Err(CoreError::InvalidArgument(format!(
            "limit must be a positive integer, got {limit}"
        )));
    }
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    let mut ranked = rank_all(origin, stores);
    ranked.truncate(limit);
    Ok(ranked)
}

/// Rank every store by distance from `origin` without truncating.
#[must_use]
pub fn rank_all(origin: Coordinate, stores: Vec<StoreRecord>) -> Vec<RankedStore> {
    let mut ranked: Vec<RankedStore> = stores
        .into_iter()
        .map(|store| RankedStore {
            distance_km: distance_km(origin, store.location),
            store,
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.store.store_id.cmp(&b.store.store_id))
    });

    let mut seen = HashSet::with_capacity(ranked.len());
    ranked.retain(|r| seen.insert(r.store.store_id));

    tracing::debug!(origin = %origin, candidates = ranked.len(), "ranked stores by distance");
    ranked
}
