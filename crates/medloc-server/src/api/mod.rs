mod routes;
mod stores;

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, State},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use medloc_core::{AppConfig, CatalogError, Coordinate, CoreError};
use medloc_db::CatalogSource;
use medloc_routing::RouteClient;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<CatalogSource>,
    pub routes: RouteClient,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    catalog: &'static str,
    catalog_status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "catalog_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_core_error(request_id: String, error: &CoreError) -> ApiError {
    tracing::debug!(error = %error, "rejected request");
    ApiError::new(request_id, "validation_error", error.to_string())
}

pub(super) fn map_query_rejection(request_id: String, rejection: &QueryRejection) -> ApiError {
    ApiError::new(request_id, "validation_error", rejection.body_text())
}

pub(super) fn map_catalog_error(request_id: String, error: &CatalogError) -> ApiError {
    tracing::error!(error = %error, "store catalog read failed");
    ApiError::new(request_id, "catalog_unavailable", "store catalog unavailable")
}

/// Build a coordinate from optional query parameters.
///
/// Both absent means "use the configured fallback location"; supplying only
/// one of the pair is rejected.
pub(super) fn resolve_origin(
    request_id: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
    fallback: Coordinate,
) -> Result<Coordinate, ApiError> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => {
            Coordinate::new(lat, lon).map_err(|e| map_core_error(request_id.to_owned(), &e))
        }
        (None, None) => Ok(fallback),
        _ => Err(ApiError::new(
            request_id,
            "validation_error",
            "lat and lon must be supplied together",
        )),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/stores", get(stores::list_all_stores))
        .route("/api/v1/stores/nearest", get(stores::list_nearest_stores))
        .route("/api/v1/route", get(routes::get_route))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);
    let catalog = state.catalog.kind();

    match state.catalog.readiness().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    catalog,
                    catalog_status: "ok",
                },
                meta,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: catalog unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        catalog,
                        catalog_status: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}
