use sqlx::postgres::PgPool;

use crate::types::models::mod_entity::{Mod, NewMod};
use crate::types::models::platform::{Platform, PlatformParseError};

pub mod repository;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Mod {0} not found")]
    NotFound(i32),
    #[error("Query for a single mod matched more than one row")]
    Ambiguous,
    #[error("{0}")]
    Platform(#[from] PlatformParseError),
    #[error("Database error")]
    Sqlx(#[from] sqlx::Error),
}

/// The three operations the catalog performs against the store. Controllers
/// take an implementation by value so tests can substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait ModStore {
    /// Inserts one record and returns it with its assigned id and timestamp.
    async fn create(&self, mod_data: &NewMod) -> Result<Mod, StoreError>;

    /// Returns all records, newest first, optionally restricted to one
    /// platform.
    async fn list(&self, platform: Option<Platform>) -> Result<Vec<Mod>, StoreError>;

    /// Returns exactly one record. Zero matches is `NotFound`; more than one
    /// is `Ambiguous`.
    async fn get_by_id(&self, id: i32) -> Result<Mod, StoreError>;
}

/// Store client backed by a Postgres pool.
#[derive(Clone)]
pub struct PgModStore {
    pool: PgPool,
}

impl PgModStore {
    pub fn new(pool: PgPool) -> Self {
        PgModStore { pool }
    }
}

impl ModStore for PgModStore {
    async fn create(&self, mod_data: &NewMod) -> Result<Mod, StoreError> {
        let mut conn = self.pool.acquire().await?;
        repository::mods::create(mod_data, &mut conn).await
    }

    async fn list(&self, platform: Option<Platform>) -> Result<Vec<Mod>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        repository::mods::list(platform, &mut conn).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Mod, StoreError> {
        let mut conn = self.pool.acquire().await?;
        repository::mods::get_by_id(id, &mut conn).await
    }
}
