//! Decoding of polyline-encoded route geometry.

use medloc_core::Coordinate;

use crate::error::RouteError;

/// OSRM encodes `geometries=polyline` with five decimal places.
const POLYLINE_PRECISION: u32 = 5;

/// Decode an encoded polyline into an ordered list of coordinates.
///
/// # Errors
///
/// Returns [`RouteError::InvalidRoute`] if the string is not a valid polyline
/// or decodes to a point outside the valid degree range.
pub fn decode_geometry(encoded: &str) -> Result<Vec<Coordinate>, RouteError> {
    let line = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| RouteError::InvalidRoute(format!("undecodable geometry: {e}")))?;

    // geo coordinates are (x, y) = (longitude, latitude).
    line.coords()
        .map(|c| {
            Coordinate::new(c.y, c.x)
                .map_err(|e| RouteError::InvalidRoute(format!("geometry point rejected: {e}")))
        })
        .collect()
}
