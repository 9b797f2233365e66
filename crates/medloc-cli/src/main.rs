mod db;
mod query;

use clap::{Args, Parser, Subcommand};
use medloc_routing::TravelMode;
use tracing_subscriber::EnvFilter;

use crate::query::Scope;

#[derive(Debug, Parser)]
#[command(name = "medloc-cli")]
#[command(about = "Find the nearest medical stores and the routes to them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Origin of a query. Both omitted means the configured default location.
#[derive(Debug, Clone, Copy, PartialEq, Args)]
struct OriginArgs {
    /// Origin latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Origin longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

/// Route annotation and output switches shared by the store listings.
#[derive(Debug, Clone, Copy, PartialEq, Args)]
struct ListingArgs {
    /// Skip route lookups and rank by straight-line distance only
    #[arg(long)]
    no_routes: bool,

    /// Routing profile: driving, walking, or cycling
    #[arg(long, default_value_t = TravelMode::Driving)]
    mode: TravelMode,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the nearest medical stores
    Nearest {
        #[command(flatten)]
        origin: OriginArgs,

        /// How many stores to list (defaults to MEDLOC_DEFAULT_LIMIT, capped at MEDLOC_MAX_LIMIT)
        #[arg(long)]
        limit: Option<i64>,

        #[command(flatten)]
        listing: ListingArgs,
    },
    /// List every store ordered by distance
    Stores {
        #[command(flatten)]
        origin: OriginArgs,

        #[command(flatten)]
        listing: ListingArgs,
    },
    /// Look up a single route between two points
    Route {
        #[arg(long, allow_negative_numbers = true)]
        from_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        from_lon: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_lon: f64,

        #[arg(long, default_value_t = TravelMode::Driving)]
        mode: TravelMode,

        /// Print JSON instead of a summary line
        #[arg(long)]
        json: bool,
    },
    /// Database management
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Apply pending migrations
    Migrate,
    /// Upsert the sample stores into `medical_stores`
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = medloc_core::load_app_config()?;

    // Logs go to stderr so `--json` output stays machine-readable.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Nearest {
            origin,
            limit,
            listing,
        }) => query::run_listing(&config, origin, Scope::Nearest { limit }, listing).await,
        Some(Commands::Stores { origin, listing }) => {
            query::run_listing(&config, origin, Scope::All, listing).await
        }
        Some(Commands::Route {
            from_lat,
            from_lon,
            to_lat,
            to_lon,
            mode,
            json,
        }) => query::run_route(&config, (from_lat, from_lon), (to_lat, to_lon), mode, json).await,
        Some(Commands::Db { command }) => match command {
            DbCommands::Migrate => db::run_migrate(&config).await,
            DbCommands::Seed => db::run_seed(&config).await,
        },
        None => {
            println!("medloc-cli: run with --help to list commands");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
