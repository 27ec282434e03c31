use crate::types::models::icon_file::IconFile;

pub mod imgbb;

#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    #[error("Image host rejected the upload: {0}")]
    Rejected(String),
    #[error("Failed to contact image host: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Seam for the external icon hosting service. Returns the public URL of the
/// hosted image.
#[allow(async_fn_in_trait)]
pub trait ImageHost {
    async fn upload(&self, file: &IconFile) -> Result<String, UploadError>;
}
