/// An icon image picked by the submitter, as handed to validation and the
/// image host. Carried in memory; icons are capped at 5 MiB before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFile {
    pub file_name: String,
    /// MIME type as reported by the picker, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}
