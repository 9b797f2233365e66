//! Store listing and route lookup handlers.

use medloc_core::{AppConfig, Coordinate, StoreCatalog};
use medloc_db::CatalogSource;
use medloc_routing::{enrich_routes, RouteAnnotatedStore, RouteClient, RouteInfo, TravelMode};
use serde::Serialize;

use crate::{ListingArgs, OriginArgs};

/// Which slice of the ranking to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Nearest { limit: Option<i64> },
    All,
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    origin: Coordinate,
    mode: TravelMode,
    stores: &'a [RouteAnnotatedStore],
}

/// Use the supplied coordinate pair, or `fallback` when none was given.
///
/// # Errors
///
/// Returns an error if the pair is out of range.
pub(crate) fn resolve_origin(origin: OriginArgs, fallback: Coordinate) -> anyhow::Result<Coordinate> {
    match (origin.lat, origin.lon) {
        (Some(lat), Some(lon)) => Ok(Coordinate::new(lat, lon)?),
        (None, None) => Ok(fallback),
        _ => anyhow::bail!("--lat and --lon must be supplied together"),
    }
}

/// Rank the catalog from the origin and print the result.
///
/// # Errors
///
/// Returns an error on an invalid origin or limit, or if the catalog cannot
/// be read. Route lookup failures are shown per store, not returned.
pub(crate) async fn run_listing(
    config: &AppConfig,
    origin: OriginArgs,
    scope: Scope,
    listing: ListingArgs,
) -> anyhow::Result<()> {
    let origin = resolve_origin(origin, config.default_location)?;
    let catalog = CatalogSource::from_app_config(config).await?;
    let stores = catalog.list_stores().await?;

    let ranked = match scope {
        Scope::Nearest { limit } => {
            medloc_core::rank(origin, stores, config.effective_limit(limit))?
        }
        Scope::All => medloc_core::rank_all(origin, stores),
    };

    let bound = if listing.no_routes {
        0
    } else {
        config.route_enrich_limit
    };
    let client = RouteClient::from_app_config(config)?;
    let stores = enrich_routes(&client, origin, ranked, bound, listing.mode).await;

    if listing.json {
        let out = Listing {
            origin,
            mode: listing.mode,
            stores: &stores,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_listing(origin, listing.mode, &stores));
    }
    Ok(())
}

/// Look up one route and print it.
///
/// # Errors
///
/// Returns an error if either endpoint is out of range or the route client
/// cannot be built. An unavailable route is printed, not returned.
pub(crate) async fn run_route(
    config: &AppConfig,
    from: (f64, f64),
    to: (f64, f64),
    mode: TravelMode,
    json: bool,
) -> anyhow::Result<()> {
    let origin = Coordinate::new(from.0, from.1)?;
    let destination = Coordinate::new(to.0, to.1)?;
    let client = RouteClient::from_app_config(config)?;
    let route = client.get_route(origin, destination, mode).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        println!("{}", format_route(&route, mode));
    }
    Ok(())
}

pub(crate) fn format_listing(
    origin: Coordinate,
    mode: TravelMode,
    stores: &[RouteAnnotatedStore],
) -> String {
    if stores.is_empty() {
        return "no medical stores found\n".to_string();
    }

    let mut lines = Vec::with_capacity(stores.len() + 2);
    lines.push(format!("{} store(s) from {origin} ({mode})", stores.len()));
    lines.push(format!(
        "{:<4}{:<36}{:<12}{:<20}{:<14}ADDRESS",
        "#", "STORE", "DISTANCE", "ROUTE", "PHONE"
    ));
    for (rank, entry) in stores.iter().enumerate() {
        let store = &entry.ranked.store;
        let distance = format!("{:.2} km", entry.ranked.rounded_distance_km());
        lines.push(format!(
            "{:<4}{:<36}{:<12}{:<20}{:<14}{}",
            rank + 1,
            store.store_name,
            distance,
            route_cell(entry.route.as_ref()),
            store.phone_number,
            store.address
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn route_cell(route: Option<&RouteInfo>) -> String {
    match route {
        None => "-".to_string(),
        Some(RouteInfo::Unavailable) => "unavailable".to_string(),
        Some(RouteInfo::Found(summary)) => {
            format!("{} min / {:.2} km", summary.duration_minutes, summary.distance_km)
        }
    }
}

pub(crate) fn format_route(route: &RouteInfo, mode: TravelMode) -> String {
    match route.summary() {
        Some(summary) => format!(
            "{mode}: {} min, {:.2} km, {} path points",
            summary.duration_minutes,
            summary.distance_km,
            summary.path.len()
        ),
        None => format!("{mode}: route unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use medloc_core::{rank_all, sample_stores};
    use medloc_routing::RouteSummary;

    use super::*;

    fn origin() -> Coordinate {
        Coordinate::new(18.5581, 73.7934).expect("valid")
    }

    fn annotated(routes: [Option<RouteInfo>; 2]) -> Vec<RouteAnnotatedStore> {
        rank_all(origin(), sample_stores())
            .into_iter()
            .zip(routes)
            .map(|(ranked, route)| RouteAnnotatedStore { ranked, route })
            .collect()
    }

    fn found(minutes: u64, km: f64) -> RouteInfo {
        RouteInfo::Found(RouteSummary {
            duration_minutes: minutes,
            distance_km: km,
            path: vec![origin()],
        })
    }

    #[test]
    fn resolve_origin_prefers_supplied_pair() {
        let args = OriginArgs {
            lat: Some(12.97),
            lon: Some(77.59),
        };
        let resolved = resolve_origin(args, origin()).expect("valid");
        assert!((resolved.latitude() - 12.97).abs() < 1e-12);
    }

    #[test]
    fn resolve_origin_falls_back_to_default() {
        let args = OriginArgs {
            lat: None,
            lon: None,
        };
        assert_eq!(resolve_origin(args, origin()).expect("fallback"), origin());
    }

    #[test]
    fn resolve_origin_rejects_out_of_range() {
        let args = OriginArgs {
            lat: Some(-95.0),
            lon: Some(0.0),
        };
        assert!(resolve_origin(args, origin()).is_err());
    }

    #[test]
    fn listing_table_shows_rank_distance_and_route() {
        let table = format_listing(
            origin(),
            TravelMode::Driving,
            &annotated([Some(found(3, 1.2)), Some(RouteInfo::Unavailable)]),
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("2 store(s) from"));
        assert!(lines[1].starts_with("#"));
        assert!(lines[2].starts_with("1   MedPlus Baner Rd Baner"));
        assert!(lines[2].contains("3 min / 1.20 km"));
        assert!(lines[3].starts_with("2   "));
        assert!(lines[3].contains("unavailable"));
    }

    #[test]
    fn listing_table_marks_unrouted_stores() {
        let table = format_listing(origin(), TravelMode::Walking, &annotated([None, None]));
        assert!(table.contains("(walking)"));
        assert!(table.lines().skip(2).all(|l| l.contains(" -  ")));
    }

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(
            format_listing(origin(), TravelMode::Driving, &[]),
            "no medical stores found\n"
        );
    }

    #[test]
    fn route_line_summarises_found_route() {
        assert_eq!(
            format_route(&found(10, 5.0), TravelMode::Cycling),
            "cycling: 10 min, 5.00 km, 1 path points"
        );
        assert_eq!(
            format_route(&RouteInfo::Unavailable, TravelMode::Driving),
            "driving: route unavailable"
        );
    }
}
