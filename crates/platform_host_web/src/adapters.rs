//! Concrete adapter factories used by the runtime entry layer.

use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{WebExternalUrlService, WebPrefsStore};

/// Returns the preference store for the active target.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Returns the external URL service for the active target.
pub fn external_url_service() -> WebExternalUrlService {
    WebExternalUrlService
}

/// Assembles the browser host bundle injected into the desktop runtime.
pub fn browser_host_services() -> HostServices {
    HostServices::new(
        Rc::new(prefs_store()),
        Rc::new(external_url_service()),
        HostStrategy::Browser,
    )
}
