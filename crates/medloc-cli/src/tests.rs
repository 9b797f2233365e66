use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["medloc-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_nearest_with_defaults() {
    let cli = Cli::try_parse_from(["medloc-cli", "nearest"]).expect("expected valid cli args");

    let Some(Commands::Nearest {
        origin,
        limit,
        listing,
    }) = cli.command
    else {
        panic!("expected nearest command");
    };
    assert_eq!(origin, OriginArgs { lat: None, lon: None });
    assert_eq!(limit, None);
    assert!(!listing.no_routes);
    assert!(!listing.json);
    assert_eq!(listing.mode, TravelMode::Driving);
}

#[test]
fn parses_nearest_with_all_flags() {
    let cli = Cli::try_parse_from([
        "medloc-cli",
        "nearest",
        "--lat",
        "18.5516",
        "--lon",
        "73.7688",
        "--limit",
        "1",
        "--mode",
        "walking",
        "--no-routes",
        "--json",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Nearest {
        origin,
        limit,
        listing,
    }) = cli.command
    else {
        panic!("expected nearest command");
    };
    assert_eq!(origin.lat, Some(18.5516));
    assert_eq!(origin.lon, Some(73.7688));
    assert_eq!(limit, Some(1));
    assert_eq!(listing.mode, TravelMode::Walking);
    assert!(listing.no_routes);
    assert!(listing.json);
}

#[test]
fn nearest_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "medloc-cli",
        "nearest",
        "--lat",
        "-33.8688",
        "--lon",
        "-151.2093",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Nearest { origin: OriginArgs { lat: Some(lat), .. }, .. }) if lat < 0.0
    ));
}

#[test]
fn latitude_without_longitude_is_rejected() {
    let result = Cli::try_parse_from(["medloc-cli", "nearest", "--lat", "18.55"]);
    assert!(result.is_err());
}

#[test]
fn unknown_mode_is_rejected() {
    let result = Cli::try_parse_from(["medloc-cli", "stores", "--mode", "flying"]);
    assert!(result.is_err());
}

#[test]
fn parses_stores_command() {
    let cli = Cli::try_parse_from(["medloc-cli", "stores", "--mode", "cycling"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Stores {
            listing: ListingArgs {
                mode: TravelMode::Cycling,
                ..
            },
            ..
        })
    ));
}

#[test]
fn parses_route_command() {
    let cli = Cli::try_parse_from([
        "medloc-cli",
        "route",
        "--from-lat",
        "18.5581",
        "--from-lon",
        "73.7934",
        "--to-lat",
        "18.5516",
        "--to-lon",
        "73.7688",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Route {
            mode: TravelMode::Driving,
            json: false,
            ..
        })
    ));
}

#[test]
fn route_requires_destination() {
    let result = Cli::try_parse_from([
        "medloc-cli",
        "route",
        "--from-lat",
        "18.5581",
        "--from-lon",
        "73.7934",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["medloc-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn parses_db_seed_command() {
    let cli = Cli::try_parse_from(["medloc-cli", "db", "seed"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed
        })
    ));
}
