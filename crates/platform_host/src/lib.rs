//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference store
//! used for persisted window geometry and the external URL service used by dock links, along with
//! in-memory and no-op adapters for tests and unsupported targets, and the [`HostServices`] bundle
//! that carries them into the runtime. Concrete browser adapters live
//! in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod storage;

pub use external_url::{ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
};
