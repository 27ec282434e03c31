//! Catalog browser, submission flow and query proxy for the ApkMods
//! listing. Persistence, filtering and full-text search are delegated to
//! Postgres; icon hosting to ImgBB. The catalog and submission controllers
//! are pure state machines over injected store/host/view seams.

pub mod catalog;
pub mod config;
pub mod database;
pub mod endpoints;
pub mod integration;
pub mod submission;
pub mod types;

pub use config::AppData;
