use std::str::FromStr;

use medloc_core::Coordinate;
use serde::{Deserialize, Serialize};

/// OSRM routing profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl TravelMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "cycling" => Ok(TravelMode::Cycling),
            other => Err(format!(
                "unknown travel mode '{other}' (expected driving, walking, or cycling)"
            )),
        }
    }
}

/// A successfully resolved route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Travel time, floored to whole minutes.
    pub duration_minutes: u64,
    /// Travel distance in kilometers, rounded to two decimals.
    pub distance_km: f64,
    /// Route geometry from origin to destination.
    pub path: Vec<Coordinate>,
}

/// Outcome of a route lookup.
///
/// Serializes as `{"success": true, "duration_minutes": .., "distance_km": ..,
/// "path": [..]}` or `{"success": false}`.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteInfo {
    Found(RouteSummary),
    Unavailable,
}

impl RouteInfo {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, RouteInfo::Found(_))
    }

    #[must_use]
    pub fn summary(&self) -> Option<&RouteSummary> {
        match self {
            RouteInfo::Found(summary) => Some(summary),
            RouteInfo::Unavailable => None,
        }
    }
}

#[derive(Serialize)]
struct RouteInfoRepr<'a> {
    success: bool,
    #[serde(flatten)]
    summary: Option<&'a RouteSummary>,
}

impl Serialize for RouteInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RouteInfoRepr {
            success: self.is_success(),
            summary: self.summary(),
        }
        .serialize(serializer)
    }
}

/// Top-level OSRM `route` service response.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRouteResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub routes: Option<Vec<OsrmRoute>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    /// Seconds.
    pub duration: f64,
    /// Meters.
    pub distance: f64,
    /// Polyline-encoded path (precision 5) when requested with the default
    /// `geometries=polyline`.
    pub geometry: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_mode_parses_case_insensitively() {
        assert_eq!("Walking".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert_eq!(" cycling ".parse::<TravelMode>(), Ok(TravelMode::Cycling));
        assert!("flying".parse::<TravelMode>().is_err());
    }

    #[test]
    fn travel_mode_defaults_to_driving() {
        assert_eq!(TravelMode::default(), TravelMode::Driving);
        assert_eq!(TravelMode::default().to_string(), "driving");
    }

    #[test]
    fn unavailable_route_serializes_as_success_false_only() {
        let json = serde_json::to_value(RouteInfo::Unavailable).expect("serialize");
        assert_eq!(json, serde_json::json!({"success": false}));
    }

    #[test]
    fn found_route_serializes_flat() {
        let info = RouteInfo::Found(RouteSummary {
            duration_minutes: 12,
            distance_km: 4.56,
            path: vec![Coordinate::new(18.5, 73.8).expect("valid")],
        });
        let json = serde_json::to_value(&info).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "duration_minutes": 12,
                "distance_km": 4.56,
                "path": [{"latitude": 18.5, "longitude": 73.8}]
            })
        );
    }

    #[test]
    fn osrm_response_tolerates_missing_routes() {
        let parsed: OsrmRouteResponse =
            serde_json::from_str(r#"{"code":"NoRoute"}"#).expect("deserialize");
        assert_eq!(parsed.code.as_deref(), Some("NoRoute"));
        assert!(parsed.routes.is_none());
    }
}
