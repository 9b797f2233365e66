use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use medloc_core::{Coordinate, RankedStore, StoreCatalog};
use medloc_routing::{enrich_routes, RouteAnnotatedStore, TravelMode};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{
    map_catalog_error, map_core_error, map_query_rejection, resolve_origin, ApiError,
    ApiResponse, AppState, ResponseMeta,
};

#[derive(Debug, Deserialize)]
pub(super) struct StoresQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub limit: Option<i64>,
    /// Route annotations are on unless explicitly disabled.
    pub routes: Option<bool>,
    pub mode: Option<TravelMode>,
}

#[derive(Debug, Serialize)]
pub(super) struct StoresData {
    pub origin: Coordinate,
    pub mode: TravelMode,
    pub count: usize,
    pub stores: Vec<RouteAnnotatedStore>,
}

/// `GET /api/v1/stores/nearest`: the `limit` closest stores.
pub(super) async fn list_nearest_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<StoresQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<StoresData>>, ApiError> {
    let Query(query) = query.map_err(|e| map_query_rejection(req_id.0.clone(), &e))?;
    let origin = resolve_origin(
        &req_id.0,
        query.lat,
        query.lon,
        state.config.default_location,
    )?;
    let limit = state.config.effective_limit(query.limit);

    let stores = state
        .catalog
        .list_stores()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;
    let ranked = medloc_core::rank(origin, stores, limit)
        .map_err(|e| map_core_error(req_id.0.clone(), &e))?;

    Ok(Json(annotate(&state, req_id, origin, ranked, &query).await))
}

/// `GET /api/v1/stores`: every store, nearest first.
pub(super) async fn list_all_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<StoresQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<StoresData>>, ApiError> {
    let Query(query) = query.map_err(|e| map_query_rejection(req_id.0.clone(), &e))?;
    let origin = resolve_origin(
        &req_id.0,
        query.lat,
        query.lon,
        state.config.default_location,
    )?;

    let stores = state
        .catalog
        .list_stores()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;
    let ranked = medloc_core::rank_all(origin, stores);

    Ok(Json(annotate(&state, req_id, origin, ranked, &query).await))
}

async fn annotate(
    state: &AppState,
    req_id: RequestId,
    origin: Coordinate,
    ranked: Vec<RankedStore>,
    query: &StoresQuery,
) -> ApiResponse<StoresData> {
    let mode = query.mode.unwrap_or_default();
    let bound = if query.routes.unwrap_or(true) {
        state.config.route_enrich_limit
    } else {
        0
    };
    let stores = enrich_routes(&state.routes, origin, ranked, bound, mode).await;

    ApiResponse {
        data: StoresData {
            origin,
            mode,
            count: stores.len(),
            stores,
        },
        meta: ResponseMeta::new(req_id.0),
    }
}
