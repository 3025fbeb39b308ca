//! i18n-shell
//!
//! Host-side shell for a client-rendered UI runtime: boots the runtime
//! with a locally persisted translation table, persists the replacement
//! snapshots the runtime publishes, and (in development) serves a mock
//! i18n API so the UI needs no real backend.

pub mod bootstrap;
pub mod config;
pub mod locale;
pub mod service;
pub mod store;
pub mod types;

pub use bootstrap::{
    AppPorts,
    InitFlags,
};
pub use service::MockI18nService;
pub use store::TranslationStore;
pub use types::{
    LocaleResponse,
    TranslationTable,
};
