//! `db` subcommands.

use medloc_core::{sample_stores, AppConfig};

/// Apply pending migrations to the configured database.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is unset, the database is unreachable,
/// or a migration fails.
pub(crate) async fn run_migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = medloc_db::connect_from_app_config(config).await?;
    medloc_db::run_migrations(&pool).await?;
    println!("migrations up to date");
    Ok(())
}

/// Migrate, then upsert the sample stores.
///
/// # Errors
///
/// Same as [`run_migrate`], plus any failure writing the rows.
pub(crate) async fn run_seed(config: &AppConfig) -> anyhow::Result<()> {
    let pool = medloc_db::connect_from_app_config(config).await?;
    medloc_db::run_migrations(&pool).await?;
    let seeded = medloc_db::seed_medical_stores(&pool, &sample_stores()).await?;
    println!("seeded {seeded} store(s) into medical_stores");
    Ok(())
}
