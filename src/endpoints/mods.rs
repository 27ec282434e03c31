use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::database::repository::{self, mods::ModFilters};
use crate::types::api::ApiError;
use crate::AppData;

/// Query-string contract of the proxy read path. Every parameter is
/// optional; `id` matches exactly, `search` hits the full-text index, the
/// rest are case-insensitive substring matches.
#[derive(Deserialize, Debug, Default)]
pub struct ProxyQueryParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub developer: Option<String>,
    pub download_link: Option<String>,
    pub search: Option<String>,
}

impl ProxyQueryParams {
    pub fn into_filters(self) -> Result<ModFilters, ApiError> {
        let id = match self.id {
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| ApiError::BadRequest("id must be numeric".into()))?,
            ),
            None => None,
        };
        Ok(ModFilters {
            id,
            name: self.name,
            description: self.description,
            version: self.version,
            developer: self.developer,
            download_link: self.download_link,
            search: self.search,
        })
    }
}

#[get("/v1/mods")]
pub async fn index(
    data: web::Data<AppData>,
    query: web::Query<ProxyQueryParams>,
) -> Result<impl Responder, ApiError> {
    let filters = query.into_inner().into_filters()?;
    let mut conn = data.db().acquire().await.map_err(crate::database::StoreError::from)?;
    let result = repository::mods::search(&filters, &mut conn).await?;
    Ok(web::Json(result))
}

#[get("/v1/mods/{id}")]
pub async fn get(
    path: web::Path<i32>,
    data: web::Data<AppData>,
) -> Result<impl Responder, ApiError> {
    let mut conn = data.db().acquire().await.map_err(crate::database::StoreError::from)?;
    let found = repository::mods::get_by_id(path.into_inner(), &mut conn).await?;
    Ok(web::Json(found))
}
