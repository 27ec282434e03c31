use serde::{Deserialize, Serialize};

use crate::database::{ModStore, StoreError};
use crate::types::models::mod_entity::Mod;
use crate::types::models::platform::Platform;

pub mod render;

/// URL `id` value meaning "no detail view open".
pub const SENTINEL_ID: &str = "apkmods";

/// The two URL parameters the catalog keeps in sync with its state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UrlParams {
    pub section: String,
    pub id: String,
}

#[derive(Deserialize, Debug, Default)]
struct RawUrlParams {
    section: Option<String>,
    id: Option<String>,
}

/// State the catalog boots from, derived from the page's query string.
#[derive(Debug, Clone, PartialEq)]
pub struct BootParams {
    pub platform: Option<Platform>,
    pub detail: Option<i32>,
}

/// Reads `section` and `id` out of a query string. Unknown sections and
/// non-numeric ids (including the sentinel) are ignored.
pub fn parse_boot_params(query: &str) -> BootParams {
    let raw: RawUrlParams = serde_urlencoded::from_str(query).unwrap_or_default();
    BootParams {
        platform: raw.section.as_deref().and_then(Platform::from_section),
        detail: raw
            .id
            .as_deref()
            .filter(|id| *id != SENTINEL_ID)
            .and_then(|id| id.parse().ok()),
    }
}

/// Pure catalog state: the loaded records plus the platform/search filter.
/// Rendering and URL updates happen through [`CatalogView`].
#[derive(Debug, Clone)]
pub struct CatalogState {
    current_platform: Platform,
    search_term: String,
    mods: Vec<Mod>,
    filtered: Vec<Mod>,
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState {
            current_platform: Platform::Android,
            search_term: String::new(),
            mods: Vec::new(),
            filtered: Vec::new(),
        }
    }
}

impl CatalogState {
    pub fn current_platform(&self) -> Platform {
        self.current_platform
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filtered(&self) -> &[Mod] {
        &self.filtered
    }

    pub fn count(&self) -> usize {
        self.filtered.len()
    }

    pub fn set_mods(&mut self, mods: Vec<Mod>) {
        self.mods = mods;
        self.apply_filter();
    }

    pub fn switch_platform(&mut self, platform: Platform) {
        self.current_platform = platform;
        self.search_term.clear();
        self.apply_filter();
    }

    /// An empty or whitespace-only term reverts to the platform-only filter.
    pub fn filter(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.apply_filter();
    }

    pub fn url_params(&self, detail: Option<i32>) -> UrlParams {
        UrlParams {
            section: self.current_platform.section().to_string(),
            id: detail
                .map(|id| id.to_string())
                .unwrap_or_else(|| SENTINEL_ID.to_string()),
        }
    }

    fn apply_filter(&mut self) {
        let platform = self.current_platform;
        let term = self.search_term.trim().to_lowercase();
        self.filtered = self
            .mods
            .iter()
            .filter(|m| m.platform == platform)
            .filter(|m| {
                term.is_empty()
                    || m.name.to_lowercase().contains(&term)
                    || m.developer.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
    }
}

/// Rendering adapter the controller drives. Implementations own the actual
/// presentation (DOM, terminal, test buffer); an empty `mods` slice means
/// the empty state.
pub trait CatalogView {
    fn render_mods(&mut self, mods: &[Mod]);
    fn render_detail(&mut self, mod_entry: &Mod);
    fn close_detail(&mut self);
    fn sync_url(&mut self, params: &UrlParams);
}

pub struct CatalogController<S, V> {
    store: S,
    view: V,
    state: CatalogState,
    open_detail_id: Option<i32>,
}

impl<S: ModStore, V: CatalogView> CatalogController<S, V> {
    pub fn new(store: S, view: V) -> Self {
        CatalogController {
            store,
            view,
            state: CatalogState::default(),
            open_detail_id: None,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Id of the currently open detail view, if any.
    pub fn open_detail_id(&self) -> Option<i32> {
        self.open_detail_id
    }

    /// Boots from the page's query string: seeds the platform, loads every
    /// record, renders, then opens the detail view if the URL asked for one.
    pub async fn init(&mut self, query: &str) -> Result<(), StoreError> {
        let boot = parse_boot_params(query);
        if let Some(platform) = boot.platform {
            self.state.switch_platform(platform);
        }
        let mods = self.store.list(None).await?;
        self.state.set_mods(mods);
        self.view.render_mods(self.state.filtered());
        if let Some(id) = boot.detail {
            self.open_detail(id).await;
        }
        Ok(())
    }

    pub fn switch_platform(&mut self, platform: Platform) {
        self.state.switch_platform(platform);
        self.view.render_mods(self.state.filtered());
        self.view.sync_url(&self.state.url_params(None));
    }

    pub fn filter(&mut self, term: &str) {
        self.state.filter(term);
        self.view.render_mods(self.state.filtered());
    }

    /// A missing record is a logged no-op: the list, filter and URL stay
    /// exactly as they were.
    pub async fn open_detail(&mut self, id: i32) {
        match self.store.get_by_id(id).await {
            Ok(found) => {
                self.open_detail_id = Some(id);
                self.view.render_detail(&found);
                self.view.sync_url(&self.state.url_params(Some(id)));
            }
            Err(StoreError::NotFound(id)) => {
                log::warn!("Mod {id} not found");
            }
            Err(e) => {
                log::error!("Failed to load mod {id}: {e}");
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.open_detail_id = None;
        self.view.close_detail();
        self.view.sync_url(&self.state.url_params(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i32, name: &str, developer: &str, platform: Platform) -> Mod {
        Mod {
            id,
            name: name.into(),
            developer: developer.into(),
            version: "1.0".into(),
            platform,
            size: "10MB".into(),
            description: None,
            download_link: "https://example.com/x.apk".into(),
            icon_url: None,
            created_at: "2026-08-29T00:00:00Z".into(),
        }
    }

    fn loaded() -> CatalogState {
        let mut state = CatalogState::default();
        state.set_mods(vec![
            sample(1, "Clash Mod", "Acme", Platform::Android),
            sample(2, "Photo Mod", "Acme", Platform::Iphone),
            sample(3, "Desktop Mod", "Initech", Platform::Windows),
            sample(4, "Racing Mod", "Initech", Platform::Android),
        ]);
        state
    }

    #[test]
    fn defaults_to_android() {
        let state = loaded();
        let ids: Vec<i32> = state.filtered().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn switch_platform_filters_by_mapped_label() {
        let mut state = loaded();
        for platform in Platform::ALL {
            state.switch_platform(platform);
            assert!(state.filtered().iter().all(|m| m.platform == platform));
            assert_eq!(state.url_params(None).section, platform.section());
        }
    }

    #[test]
    fn search_matches_name_or_developer_case_insensitively() {
        let mut state = loaded();
        state.filter("CLASH");
        assert_eq!(state.count(), 1);
        state.filter("initech");
        let ids: Vec<i32> = state.filtered().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn empty_search_resets_to_platform_filter() {
        let mut state = loaded();
        let baseline = state.filtered().to_vec();
        state.filter("clash");
        state.filter("");
        assert_eq!(state.filtered(), baseline.as_slice());
        state.filter("clash");
        state.filter("   ");
        assert_eq!(state.filtered(), baseline.as_slice());
    }

    #[test]
    fn url_params_use_sentinel_when_no_detail_open() {
        let state = loaded();
        assert_eq!(state.url_params(None).id, SENTINEL_ID);
        assert_eq!(state.url_params(Some(7)).id, "7");
    }

    #[test]
    fn boot_params_read_section_and_id() {
        let boot = parse_boot_params("section=iphone&id=12");
        assert_eq!(boot.platform, Some(Platform::Iphone));
        assert_eq!(boot.detail, Some(12));
    }

    #[test]
    fn boot_params_ignore_sentinel_and_junk() {
        let boot = parse_boot_params("section=amiga&id=apkmods");
        assert_eq!(boot.platform, None);
        assert_eq!(boot.detail, None);
        assert_eq!(parse_boot_params("").detail, None);
    }
}
