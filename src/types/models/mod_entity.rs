use serde::{Deserialize, Serialize};

use super::platform::Platform;

/// One catalog entry, as returned by the store. Records are immutable after
/// creation; there is no update or delete path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mod {
    pub id: i32,
    pub name: String,
    pub developer: String,
    pub version: String,
    pub platform: Platform,
    pub size: String,
    pub description: Option<String>,
    pub download_link: String,
    pub icon_url: Option<String>,
    /// RFC 3339, assigned by the store.
    pub created_at: String,
}

/// Column subset served by the query proxy. Icon, platform and size stay
/// internal to the catalog pages.
#[derive(Serialize, Debug, Clone, sqlx::FromRow)]
pub struct ModSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub developer: String,
    pub download_link: String,
}

/// Insert payload for a new mod. The store assigns `id` and `created_at`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewMod {
    pub name: String,
    pub developer: String,
    pub version: String,
    pub platform: Platform,
    pub size: String,
    pub description: Option<String>,
    pub download_link: String,
    pub icon_url: Option<String>,
}
