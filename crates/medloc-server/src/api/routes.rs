use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use medloc_core::Coordinate;
use medloc_routing::{RouteInfo, TravelMode};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_core_error, map_query_rejection, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct RouteQuery {
    pub from_lat: f64,
    pub from_lon: f64,
    pub to_lat: f64,
    pub to_lon: f64,
    pub mode: Option<TravelMode>,
}

#[derive(Debug, Serialize)]
pub(super) struct RouteData {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TravelMode,
    pub route: RouteInfo,
}

/// `GET /api/v1/route`: a single point-to-point lookup. An unavailable route
/// is still a 200 with `route.success == false`.
pub(super) async fn get_route(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<RouteData>>, ApiError> {
    let Query(query) = query.map_err(|e| map_query_rejection(req_id.0.clone(), &e))?;
    let origin = Coordinate::new(query.from_lat, query.from_lon)
        .map_err(|e| map_core_error(req_id.0.clone(), &e))?;
    let destination = Coordinate::new(query.to_lat, query.to_lon)
        .map_err(|e| map_core_error(req_id.0.clone(), &e))?;
    let mode = query.mode.unwrap_or_default();

    let route = state.routes.get_route(origin, destination, mode).await;

    Ok(Json(ApiResponse {
        data: RouteData {
            origin,
            destination,
            mode,
            route,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
