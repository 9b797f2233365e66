//! Route annotation for a ranked store list.

use futures::future::join_all;
use medloc_core::{Coordinate, RankedStore};
use serde::Serialize;

use crate::client::RouteClient;
use crate::types::{RouteInfo, TravelMode};

/// A ranked store with its route lookup, if one was made.
///
/// `route` is `None` for stores past the enrichment bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnnotatedStore {
    #[serde(flatten)]
    pub ranked: RankedStore,
    pub route: Option<RouteInfo>,
}

/// Look up routes for the first `bound` entries of `ranked`.
///
/// Lookups inside the bound run concurrently, each under the client timeout.
/// Output order matches `ranked`. A failed lookup becomes
/// `Some(RouteInfo::Unavailable)`; it never drops the store.
pub async fn enrich_routes(
    client: &RouteClient,
    origin: Coordinate,
    ranked: Vec<RankedStore>,
    bound: usize,
    mode: TravelMode,
) -> Vec<RouteAnnotatedStore> {
    let bound = bound.min(ranked.len());
    let lookups = ranked[..bound]
        .iter()
        .map(|r| client.get_route(origin, r.store.location, mode));
    let routes = join_all(lookups).await;

    let found = routes.iter().filter(|r| r.is_success()).count();
    tracing::debug!(
        requested = bound,
        found,
        skipped = ranked.len() - bound,
        "route enrichment complete"
    );

    let mut routes = routes.into_iter();
    ranked
        .into_iter()
        .map(|ranked| RouteAnnotatedStore {
            route: routes.next(),
            ranked,
        })
        .collect()
}
