//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the preference store backing
//! persisted window geometry and for external URL opening used by dock links.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod external_url;
pub mod storage;

pub use adapters::{browser_host_services, external_url_service, prefs_store};
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
