use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::database::StoreError;

/// JSON body for every error response: `{"error": "..."}`.
#[derive(Serialize, Debug)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Database(#[from] StoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn as_body(&self) -> ApiErrorBody {
        ApiErrorBody {
            error: self.to_string(),
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Database(StoreError::NotFound(..)) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(self.as_body())
    }
}
