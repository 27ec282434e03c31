use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::database::StoreError;
use crate::types::models::mod_entity::{Mod, ModSummary, NewMod};
use crate::types::models::platform::Platform;

const MOD_COLUMNS: &str =
    "id, name, developer, version, platform, size, description, download_link, icon_url, created_at";

#[derive(sqlx::FromRow)]
struct ModRecord {
    id: i32,
    name: String,
    developer: String,
    version: String,
    platform: String,
    size: String,
    description: Option<String>,
    download_link: String,
    icon_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl ModRecord {
    fn into_mod(self) -> Result<Mod, StoreError> {
        Ok(Mod {
            id: self.id,
            name: self.name,
            developer: self.developer,
            version: self.version,
            platform: self.platform.parse::<Platform>()?,
            size: self.size,
            description: self.description,
            download_link: self.download_link,
            icon_url: self.icon_url,
            created_at: self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

pub async fn create(mod_data: &NewMod, conn: &mut PgConnection) -> Result<Mod, StoreError> {
    let sql = format!(
        "INSERT INTO mods (name, developer, version, platform, size, description, download_link, icon_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {MOD_COLUMNS}"
    );
    sqlx::query_as::<Postgres, ModRecord>(&sql)
        .bind(&mod_data.name)
        .bind(&mod_data.developer)
        .bind(&mod_data.version)
        .bind(mod_data.platform.label())
        .bind(&mod_data.size)
        .bind(&mod_data.description)
        .bind(&mod_data.download_link)
        .bind(&mod_data.icon_url)
        .fetch_one(conn)
        .await
        .inspect_err(|e| log::error!("Failed to create mod {}: {e}", mod_data.name))?
        .into_mod()
}

pub async fn list(
    platform: Option<Platform>,
    conn: &mut PgConnection,
) -> Result<Vec<Mod>, StoreError> {
    let records: Vec<ModRecord> = if let Some(platform) = platform {
        let sql = format!(
            "SELECT {MOD_COLUMNS} FROM mods WHERE platform = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<Postgres, ModRecord>(&sql)
            .bind(platform.label())
            .fetch_all(conn)
            .await
    } else {
        let sql = format!("SELECT {MOD_COLUMNS} FROM mods ORDER BY created_at DESC");
        sqlx::query_as::<Postgres, ModRecord>(&sql).fetch_all(conn).await
    }
    .inspect_err(|e| log::error!("Failed to list mods: {e}"))?;

    records.into_iter().map(ModRecord::into_mod).collect()
}

pub async fn get_by_id(id: i32, conn: &mut PgConnection) -> Result<Mod, StoreError> {
    let sql = format!("SELECT {MOD_COLUMNS} FROM mods WHERE id = $1 LIMIT 2");
    let mut records: Vec<ModRecord> = sqlx::query_as::<Postgres, ModRecord>(&sql)
        .bind(id)
        .fetch_all(conn)
        .await
        .inspect_err(|e| log::error!("Failed to fetch mod {id}: {e}"))?;

    match records.len() {
        0 => Err(StoreError::NotFound(id)),
        1 => records.remove(0).into_mod(),
        _ => Err(StoreError::Ambiguous),
    }
}

/// Filters for the query-proxy read path. All fields optional, AND-composed.
#[derive(Debug, Default, Clone)]
pub struct ModFilters {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub developer: Option<String>,
    pub download_link: Option<String>,
    pub search: Option<String>,
}

/// Builds the proxy query: exact match on id, `ILIKE %…%` on text fields,
/// full-text match on the search vector. Split out so the composed SQL can
/// be asserted without a live database.
fn build_search_query(filters: &ModFilters) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT id, name, description, version, developer, download_link FROM mods WHERE TRUE",
    );

    if let Some(id) = filters.id {
        builder.push(" AND id = ");
        builder.push_bind(id);
    }
    let text_fields = [
        ("name", &filters.name),
        ("description", &filters.description),
        ("version", &filters.version),
        ("developer", &filters.developer),
        ("download_link", &filters.download_link),
    ];
    for (column, value) in text_fields {
        if let Some(value) = value {
            builder.push(format!(" AND {column} ILIKE "));
            builder.push_bind(format!("%{value}%"));
        }
    }
    if let Some(search) = &filters.search {
        builder.push(" AND search_vector @@ websearch_to_tsquery('english', ");
        builder.push_bind(search.clone());
        builder.push(")");
    }

    builder
}

pub async fn search(
    filters: &ModFilters,
    conn: &mut PgConnection,
) -> Result<Vec<ModSummary>, StoreError> {
    let mut builder = build_search_query(filters);
    builder
        .build_query_as::<ModSummary>()
        .fetch_all(conn)
        .await
        .inspect_err(|e| log::error!("Proxy query failed: {e}"))
        .map_err(StoreError::from)
}
