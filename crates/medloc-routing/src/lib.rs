//! Route lookups against an OSRM-compatible routing service.
//!
//! [`RouteClient::get_route`] never fails: any problem reaching the service or
//! understanding its answer yields [`RouteInfo::Unavailable`], because travel
//! time and path geometry only enrich a ranking that is already complete.

pub mod client;
pub mod enrich;
pub mod error;
pub mod geometry;
pub mod types;

pub use client::RouteClient;
pub use enrich::{enrich_routes, RouteAnnotatedStore};
pub use error::{FailureKind, RouteError};
pub use geometry::decode_geometry;
pub use types::{RouteInfo, RouteSummary, TravelMode};
