use std::time::Duration;

use url::Url;

use crate::catalog::SENTINEL_ID;
use crate::database::ModStore;
use crate::integration::ImageHost;
use crate::types::models::icon_file::IconFile;
use crate::types::models::mod_entity::NewMod;
use crate::types::models::platform::Platform;

pub const MAX_ICON_BYTES: usize = 5 * 1024 * 1024;
pub const VALID_ICON_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];
/// How long the success notification stays up before redirecting.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("The \"{0}\" field is required")]
    MissingField(&'static str),
    #[error("Please enter a valid download link")]
    InvalidDownloadLink,
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("Please select a valid image file (PNG, JPG, GIF, WebP)")]
    UnsupportedFileType,
    #[error("The file is too large. The maximum size is 5MB")]
    FileTooLarge,
    #[error("Please select an image for the icon")]
    NoIconSelected,
}

/// Raw form fields, as read from the inputs. Whitespace is trimmed during
/// validation; `description` may stay empty.
#[derive(Debug, Default, Clone)]
pub struct SubmissionFields {
    pub name: String,
    pub developer: String,
    pub download_link: String,
    pub version: String,
    pub platform: String,
    pub size: String,
    pub description: String,
}

/// Fields after validation, ready to pair with an uploaded icon URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub name: String,
    pub developer: String,
    pub download_link: String,
    pub version: String,
    pub platform: Platform,
    pub size: String,
    pub description: Option<String>,
}

impl ValidSubmission {
    pub fn into_new_mod(self, icon_url: String) -> NewMod {
        NewMod {
            name: self.name,
            developer: self.developer,
            version: self.version,
            platform: self.platform,
            size: self.size,
            description: self.description,
            download_link: self.download_link,
            icon_url: Some(icon_url),
        }
    }
}

/// Submission lifecycle. `submit` only starts from `Idle` or `Failed`; the
/// loading indicator keeps at most one submission in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Uploading,
    Creating,
    Succeeded {
        redirect: String,
    },
    Failed {
        message: String,
    },
}

/// Notification and loading surface of the form. Implementations decide how
/// messages are shown and how the redirect is actually performed.
pub trait Notifier {
    fn show_error(&mut self, message: &str);
    fn show_success(&mut self, message: &str);
    fn set_loading(&mut self, loading: bool);
    fn schedule_redirect(&mut self, url: &str, delay: Duration);
}

pub fn validate_icon(file: &IconFile) -> Result<(), ValidationError> {
    if !VALID_ICON_TYPES.contains(&file.content_type.as_str()) {
        return Err(ValidationError::UnsupportedFileType);
    }
    if file.bytes.len() > MAX_ICON_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

/// Checks required fields in form order and reports the first failure.
pub fn validate_fields(fields: &SubmissionFields) -> Result<ValidSubmission, ValidationError> {
    let required = [
        (fields.name.trim(), "name"),
        (fields.developer.trim(), "developer"),
        (fields.download_link.trim(), "download link"),
        (fields.version.trim(), "version"),
        (fields.platform.trim(), "platform"),
        (fields.size.trim(), "size"),
    ];
    for (value, label) in required {
        if value.is_empty() {
            return Err(ValidationError::MissingField(label));
        }
    }

    let download_link = fields.download_link.trim();
    if Url::parse(download_link).is_err() {
        return Err(ValidationError::InvalidDownloadLink);
    }

    let platform = fields
        .platform
        .trim()
        .parse::<Platform>()
        .map_err(|e| ValidationError::UnknownPlatform(e.0))?;

    let description = fields.description.trim();
    Ok(ValidSubmission {
        name: fields.name.trim().to_string(),
        developer: fields.developer.trim().to_string(),
        download_link: download_link.to_string(),
        version: fields.version.trim().to_string(),
        platform,
        size: fields.size.trim().to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}

pub struct SubmissionController<S, H, N> {
    store: S,
    host: H,
    notifier: N,
    selected_file: Option<IconFile>,
    state: SubmissionState,
}

impl<S: ModStore, H: ImageHost, N: Notifier> SubmissionController<S, H, N> {
    pub fn new(store: S, host: H, notifier: N) -> Self {
        SubmissionController {
            store,
            host,
            notifier,
            selected_file: None,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&IconFile> {
        self.selected_file.as_ref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Both the file picker and drag-and-drop funnel through here. A
    /// rejected file notifies and leaves the current selection untouched.
    pub fn select_file(&mut self, file: IconFile) {
        if let Err(e) = validate_icon(&file) {
            self.notifier.show_error(&e.to_string());
            return;
        }
        self.selected_file = Some(file);
    }

    pub fn remove_file(&mut self) {
        self.selected_file = None;
    }

    /// Runs the whole flow: validate, upload the icon, insert the record,
    /// then schedule the redirect to the catalog filtered by the submitted
    /// platform. Validation failures never engage the loading indicator.
    /// Upload and create failures are not retried; an icon uploaded before
    /// a failed insert stays on the host.
    pub async fn submit(&mut self, fields: SubmissionFields) {
        match self.state {
            SubmissionState::Idle | SubmissionState::Failed { .. } => {}
            _ => return,
        }

        let valid = match validate_fields(&fields) {
            Ok(v) => v,
            Err(e) => {
                self.notifier.show_error(&e.to_string());
                return;
            }
        };
        let icon = match self.selected_file.clone() {
            Some(f) => f,
            None => {
                self.notifier
                    .show_error(&ValidationError::NoIconSelected.to_string());
                return;
            }
        };

        self.notifier.set_loading(true);
        self.state = SubmissionState::Uploading;

        let icon_url = match self.host.upload(&icon).await {
            Ok(url) => url,
            Err(e) => {
                log::error!("Icon upload failed: {e}");
                self.fail(e.to_string());
                return;
            }
        };

        self.state = SubmissionState::Creating;
        let platform = valid.platform;
        let new_mod = valid.into_new_mod(icon_url);

        match self.store.create(&new_mod).await {
            Ok(_created) => {
                self.notifier.show_success("Mod published successfully!");
                let redirect =
                    format!("index.html?section={}&id={SENTINEL_ID}", platform.section());
                self.notifier.schedule_redirect(&redirect, REDIRECT_DELAY);
                self.state = SubmissionState::Succeeded { redirect };
            }
            Err(e) => {
                log::error!("Failed to create mod: {e}");
                self.fail(e.to_string());
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.notifier
            .show_error("Failed to publish the mod. Please try again.");
        self.notifier.set_loading(false);
        self.state = SubmissionState::Failed { message };
    }
}
