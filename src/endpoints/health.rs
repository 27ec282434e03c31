use actix_web::{get, web, Responder};

use crate::types::api::ApiError;

#[get("/")]
pub async fn health() -> Result<impl Responder, ApiError> {
    Ok(web::Json("The ApkMods index is running"))
}
