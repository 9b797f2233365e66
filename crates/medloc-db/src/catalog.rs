//! Runtime choice between the built-in sample catalog and Postgres.

use medloc_core::{AppConfig, CatalogError, StaticCatalog, StoreCatalog, StoreRecord};

use crate::{connect_from_app_config, health_check, DbError, PgStoreCatalog};

#[derive(Debug, Clone)]
pub enum CatalogSource {
    Sample(StaticCatalog),
    Postgres(PgStoreCatalog),
}

impl CatalogSource {
    /// Connects to Postgres when `DATABASE_URL` is configured, otherwise
    /// falls back to [`StaticCatalog::sample`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if a database is configured but unreachable.
    pub async fn from_app_config(config: &AppConfig) -> Result<Self, DbError> {
        if config.database_url.is_none() {
            tracing::warn!("DATABASE_URL not set; using the built-in sample catalog");
            return Ok(Self::Sample(StaticCatalog::sample()));
        }
        let pool = connect_from_app_config(config).await?;
        Ok(Self::Postgres(PgStoreCatalog::new(pool)))
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sample(_) => "sample",
            Self::Postgres(_) => "postgres",
        }
    }

    /// `Ok(())` when the catalog can serve reads. The sample catalog is
    /// always ready.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the Postgres ping fails.
    pub async fn readiness(&self) -> Result<(), DbError> {
        match self {
            Self::Sample(_) => Ok(()),
            Self::Postgres(catalog) => health_check(catalog.pool()).await,
        }
    }
}

impl StoreCatalog for CatalogSource {
    async fn list_stores(&self) -> Result<Vec<StoreRecord>, CatalogError> {
        match self {
            Self::Sample(catalog) => catalog.list_stores().await,
            Self::Postgres(catalog) => catalog.list_stores().await,
        }
    }
}
