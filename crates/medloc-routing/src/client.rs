//! HTTP client for the OSRM `route` service.
//!
//! One GET per lookup, bounded by the client timeout. No retries and no
//! caching; a failed lookup is reported as [`RouteInfo::Unavailable`] and the
//! cause is logged with a level that separates "no route exists" from
//! "service unreachable" and "request or response malformed".

use std::time::Duration;

use medloc_core::{AppConfig, Coordinate};
use reqwest::{Client, Url};

use crate::error::{FailureKind, RouteError};
use crate::geometry::decode_geometry;
use crate::types::{OsrmRoute, OsrmRouteResponse, RouteInfo, RouteSummary, TravelMode};

const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "medloc/0.1 (store-locator)";

/// Client for an OSRM-compatible routing service.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RouteClient {
    client: Client,
    base_url: Url,
}

impl RouteClient {
    /// Creates a client for the public OSRM demo server with a 10 second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new() -> Result<Self, RouteError> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }

    /// Creates a client from the routing settings in [`AppConfig`].
    ///
    /// # Errors
    ///
    /// See [`RouteClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, RouteError> {
        Self::with_base_url(
            &config.osrm_base_url,
            config.route_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL (also used to point tests at
    /// a mock server).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`RouteError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, RouteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends below any path prefix.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RouteError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up a route from `origin` to `destination`.
    ///
    /// Never fails: every error is logged and mapped to
    /// [`RouteInfo::Unavailable`].
    pub async fn get_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> RouteInfo {
        match self.fetch_route(origin, destination, mode).await {
            Ok(summary) => RouteInfo::Found(summary),
            Err(err) => {
                match err.kind() {
                    FailureKind::NoRoute => tracing::info!(
                        origin = %origin,
                        destination = %destination,
                        mode = %mode,
                        error = %err,
                        "routing service found no route"
                    ),
                    FailureKind::Unreachable => tracing::warn!(
                        origin = %origin,
                        destination = %destination,
                        mode = %mode,
                        error = %err,
                        "routing service unreachable"
                    ),
                    FailureKind::Malformed => tracing::error!(
                        origin = %origin,
                        destination = %destination,
                        mode = %mode,
                        error = %err,
                        "malformed routing request or response"
                    ),
                }
                RouteInfo::Unavailable
            }
        }
    }

    /// Strict variant of [`RouteClient::get_route`] that reports why a lookup failed.
    ///
    /// # Errors
    ///
    /// - [`RouteError::Http`] / [`RouteError::Timeout`] on network failure.
    /// - [`RouteError::Status`] on a non-2xx response.
    /// - [`RouteError::Decode`] if the body is not the expected JSON.
    /// - [`RouteError::NoRoute`] if `routes` is missing or empty.
    /// - [`RouteError::InvalidRoute`] if the first route has unusable values.
    pub async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<RouteSummary, RouteError> {
        let url = self.route_url(origin, destination, mode)?;
        tracing::debug!(url = %url, "requesting route");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let code = serde_json::from_str::<OsrmRouteResponse>(&body)
                .ok()
                .and_then(|r| r.code);
            return Err(RouteError::Status {
                status: status.as_u16(),
                code,
            });
        }

        let parsed: OsrmRouteResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::Decode {
                context: url.to_string(),
                source: e,
            })?;

        let route = parsed
            .routes
            .and_then(|routes| routes.into_iter().next())
            .ok_or_else(|| RouteError::NoRoute {
                code: parsed.code.unwrap_or_else(|| "missing routes".to_string()),
            })?;

        summarize(route)
    }

    /// Builds `{base}/route/v1/{mode}/{lon},{lat};{lon},{lat}?overview=full`.
    ///
    /// OSRM expects longitude first.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidBaseUrl`] if the joined path does not parse.
    pub fn route_url(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<Url, RouteError> {
        let path = format!(
            "route/v1/{mode}/{},{};{},{}",
            origin.longitude(),
            origin.latitude(),
            destination.longitude(),
            destination.latitude(),
        );
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| RouteError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("overview", "full");
        Ok(url)
    }
}

/// Converts an OSRM route into whole minutes, kilometers to two decimals, and
/// a decoded path.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn summarize(route: OsrmRoute) -> Result<RouteSummary, RouteError> {
    if !route.duration.is_finite() || route.duration < 0.0 {
        return Err(RouteError::InvalidRoute(format!(
            "duration {} is not a non-negative number of seconds",
            route.duration
        )));
    }
    if !route.distance.is_finite() || route.distance < 0.0 {
        return Err(RouteError::InvalidRoute(format!(
            "distance {} is not a non-negative number of meters",
            route.distance
        )));
    }

    let duration_minutes = (route.duration / 60.0).floor() as u64;
    let distance_km = (route.distance / 1000.0 * 100.0).round() / 100.0;
    let path = decode_geometry(&route.geometry)?;

    Ok(RouteSummary {
        duration_minutes,
        distance_km,
        path,
    })
}
