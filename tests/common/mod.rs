//! In-memory fakes for the store, image host, notifier and view seams.
#![allow(dead_code)] // not every test binary touches every fake

use std::sync::{Arc, Mutex};
use std::time::Duration;

use apkmods_index::catalog::{CatalogView, UrlParams};
use apkmods_index::database::{ModStore, StoreError};
use apkmods_index::integration::{ImageHost, UploadError};
use apkmods_index::submission::Notifier;
use apkmods_index::types::models::icon_file::IconFile;
use apkmods_index::types::models::mod_entity::{Mod, NewMod};
use apkmods_index::types::models::platform::Platform;

pub fn sample_mod(id: i32, name: &str, developer: &str, platform: Platform) -> Mod {
    Mod {
        id,
        name: name.into(),
        developer: developer.into(),
        version: "1.0".into(),
        platform,
        size: "10MB".into(),
        description: Some("demo".into()),
        download_link: "https://example.com/x.apk".into(),
        icon_url: None,
        created_at: "2026-08-29T00:00:00Z".into(),
    }
}

pub fn png_icon() -> IconFile {
    IconFile {
        file_name: "icon.png".into(),
        content_type: "image/png".into(),
        bytes: vec![0; 2 * 1024 * 1024],
    }
}

#[derive(Default)]
struct StoreInner {
    mods: Vec<Mod>,
    next_id: i32,
    inserts: usize,
    fail_create: bool,
}

#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl MemStore {
    pub fn seeded(mods: Vec<Mod>) -> Self {
        let next_id = mods.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        MemStore {
            inner: Arc::new(Mutex::new(StoreInner {
                mods,
                next_id,
                inserts: 0,
                fail_create: false,
            })),
        }
    }

    pub fn failing_create(self) -> Self {
        self.inner.lock().unwrap().fail_create = true;
        self
    }

    pub fn inserts(&self) -> usize {
        self.inner.lock().unwrap().inserts
    }

    pub fn all(&self) -> Vec<Mod> {
        self.inner.lock().unwrap().mods.clone()
    }
}

impl ModStore for MemStore {
    async fn create(&self, mod_data: &NewMod) -> Result<Mod, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_create {
            return Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.inserts += 1;
        let created = Mod {
            id,
            name: mod_data.name.clone(),
            developer: mod_data.developer.clone(),
            version: mod_data.version.clone(),
            platform: mod_data.platform,
            size: mod_data.size.clone(),
            description: mod_data.description.clone(),
            download_link: mod_data.download_link.clone(),
            icon_url: mod_data.icon_url.clone(),
            created_at: format!("2026-08-29T00:00:{:02}Z", id.min(59)),
        };
        inner.mods.push(created.clone());
        Ok(created)
    }

    async fn list(&self, platform: Option<Platform>) -> Result<Vec<Mod>, StoreError> {
        let inner = self.inner.lock().unwrap();
        // Insertion order stands in for created_at; newest first.
        Ok(inner
            .mods
            .iter()
            .rev()
            .filter(|m| platform.is_none_or(|p| m.platform == p))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Mod, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .mods
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}

#[derive(Default)]
struct HostInner {
    uploads: usize,
    fail: bool,
}

#[derive(Clone, Default)]
pub struct FakeHost {
    inner: Arc<Mutex<HostInner>>,
}

impl FakeHost {
    pub fn failing(self) -> Self {
        self.inner.lock().unwrap().fail = true;
        self
    }

    pub fn uploads(&self) -> usize {
        self.inner.lock().unwrap().uploads
    }
}

impl ImageHost for FakeHost {
    async fn upload(&self, file: &IconFile) -> Result<String, UploadError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(UploadError::Rejected("quota exceeded".into()));
        }
        inner.uploads += 1;
        Ok(format!("https://i.ibb.co/fake/{}", file.file_name))
    }
}

#[derive(Default)]
struct NotifierInner {
    errors: Vec<String>,
    successes: Vec<String>,
    loading: bool,
    loading_engaged: bool,
    redirects: Vec<(String, Duration)>,
}

#[derive(Clone, Default)]
pub struct FakeNotifier {
    inner: Arc<Mutex<NotifierInner>>,
}

impl FakeNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.inner.lock().unwrap().errors.clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.inner.lock().unwrap().successes.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.lock().unwrap().loading
    }

    pub fn loading_engaged(&self) -> bool {
        self.inner.lock().unwrap().loading_engaged
    }

    pub fn redirects(&self) -> Vec<(String, Duration)> {
        self.inner.lock().unwrap().redirects.clone()
    }
}

impl Notifier for FakeNotifier {
    fn show_error(&mut self, message: &str) {
        self.inner.lock().unwrap().errors.push(message.into());
    }

    fn show_success(&mut self, message: &str) {
        self.inner.lock().unwrap().successes.push(message.into());
    }

    fn set_loading(&mut self, loading: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.loading = loading;
        inner.loading_engaged |= loading;
    }

    fn schedule_redirect(&mut self, url: &str, delay: Duration) {
        self.inner.lock().unwrap().redirects.push((url.into(), delay));
    }
}

#[derive(Default)]
struct ViewInner {
    renders: Vec<Vec<i32>>,
    details: Vec<i32>,
    urls: Vec<UrlParams>,
    closes: usize,
}

#[derive(Clone, Default)]
pub struct RecordingView {
    inner: Arc<Mutex<ViewInner>>,
}

impl RecordingView {
    pub fn last_render(&self) -> Option<Vec<i32>> {
        self.inner.lock().unwrap().renders.last().cloned()
    }

    pub fn details(&self) -> Vec<i32> {
        self.inner.lock().unwrap().details.clone()
    }

    pub fn last_url(&self) -> Option<UrlParams> {
        self.inner.lock().unwrap().urls.last().cloned()
    }

    pub fn urls(&self) -> Vec<UrlParams> {
        self.inner.lock().unwrap().urls.clone()
    }

    pub fn closes(&self) -> usize {
        self.inner.lock().unwrap().closes
    }
}

impl CatalogView for RecordingView {
    fn render_mods(&mut self, mods: &[Mod]) {
        let ids = mods.iter().map(|m| m.id).collect();
        self.inner.lock().unwrap().renders.push(ids);
    }

    fn render_detail(&mut self, mod_entry: &Mod) {
        self.inner.lock().unwrap().details.push(mod_entry.id);
    }

    fn close_detail(&mut self) {
        self.inner.lock().unwrap().closes += 1;
    }

    fn sync_url(&mut self, params: &UrlParams) {
        self.inner.lock().unwrap().urls.push(params.clone());
    }
}
