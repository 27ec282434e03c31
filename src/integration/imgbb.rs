use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::integration::{ImageHost, UploadError};
use crate::types::models::icon_file::IconFile;

pub const IMGBB_URL: &str = "https://api.imgbb.com";

/// Client for the ImgBB upload API. Success responses carry the hosted URL
/// under `data.url`; failures carry `error.message`.
pub struct ImgbbClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Deserialize)]
struct UploadResponse {
    data: UploadData,
}

#[derive(Deserialize)]
struct UploadData {
    url: String,
}

#[derive(Deserialize)]
struct UploadErrorResponse {
    error: UploadErrorDetail,
}

#[derive(Deserialize)]
struct UploadErrorDetail {
    message: String,
}

impl ImgbbClient {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        ImgbbClient {
            api_key: String::from(api_key),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl ImageHost for ImgbbClient {
    async fn upload(&self, file: &IconFile) -> Result<String, UploadError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}/1/upload", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let body: UploadErrorResponse = response.json().await?;
            log::error!("ImgBB upload failed: {}", body.error.message);
            return Err(UploadError::Rejected(body.error.message));
        }

        let body: UploadResponse = response.json().await?;
        Ok(body.data.url)
    }
}
