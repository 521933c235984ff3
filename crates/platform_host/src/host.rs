//! Host service bundle injected into the desktop runtime by the entry layer.

use std::rc::Rc;

use crate::{
    ExternalUrlService, MemoryPrefsStore, NoopExternalUrlService, NoopPrefsStore, PrefsStore,
    RecordingExternalUrlService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory composition used by tests and non-browser targets.
    Memory,
    /// Composition with no-op adapters.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// Service selection happens before this bundle crosses into `desktop_runtime`, so the runtime
/// never depends on browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Preference store backing persisted window geometry.
    pub prefs: Rc<dyn PrefsStore>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles explicit adapters.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        external_urls: Rc<dyn ExternalUrlService>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            prefs,
            external_urls,
            host_strategy,
        }
    }

    /// In-memory bundle; returns the shared handles so callers can inspect side effects.
    pub fn memory() -> (Self, MemoryPrefsStore, RecordingExternalUrlService) {
        let prefs = MemoryPrefsStore::default();
        let urls = RecordingExternalUrlService::default();
        let services = Self::new(
            Rc::new(prefs.clone()),
            Rc::new(urls.clone()),
            HostStrategy::Memory,
        );
        (services, prefs, urls)
    }

    /// Bundle whose services accept every call and keep nothing.
    pub fn stub() -> Self {
        Self::new(
            Rc::new(NoopPrefsStore),
            Rc::new(NoopExternalUrlService),
            HostStrategy::Stub,
        )
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
