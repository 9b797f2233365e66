use thiserror::Error;

/// Why a route lookup produced no route.
///
/// Callers of [`crate::RouteClient::get_route`] only ever see
/// [`crate::RouteInfo::Unavailable`]; this type exists so the cause can be
/// logged and so [`crate::RouteClient::fetch_route`] can report it.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("routing request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Non-2xx response. `code` is the OSRM `code` field when the body had one.
    #[error("routing service returned HTTP {status} (code: {})", .code.as_deref().unwrap_or("none"))]
    Status { status: u16, code: Option<String> },

    #[error("could not decode routing response from {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered but had no route between the two points.
    #[error("no route found (code: {code})")]
    NoRoute { code: String },

    /// The route carried values that cannot be represented (negative duration,
    /// undecodable geometry, out-of-range points).
    #[error("invalid route data: {0}")]
    InvalidRoute(String),

    #[error("invalid routing base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Coarse grouping of [`RouteError`] used for log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Service unreachable, timed out, or failing server-side.
    Unreachable,
    /// Service reachable but no route exists between the points.
    NoRoute,
    /// The request or the response was malformed.
    Malformed,
}

/// OSRM codes meaning "valid request, nothing to route".
const NO_ROUTE_CODES: [&str; 2] = ["NoRoute", "NoSegment"];

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Http(err)
        }
    }
}

impl RouteError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http(_) | Self::Timeout(_) => FailureKind::Unreachable,
            Self::NoRoute { .. } => FailureKind::NoRoute,
            Self::Status { code, .. }
                if code
                    .as_deref()
                    .is_some_and(|c| NO_ROUTE_CODES.contains(&c)) =>
            {
                FailureKind::NoRoute
            }
            Self::Status { status, .. } if *status >= 500 || *status == 429 => {
                FailureKind::Unreachable
            }
            Self::Status { .. }
            | Self::Decode { .. }
            | Self::InvalidRoute(_)
            | Self::InvalidBaseUrl { .. } => FailureKind::Malformed,
        }
    }
}
