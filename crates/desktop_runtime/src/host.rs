//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

use leptos::logging;
use platform_host::{HostServices, HostStrategy};

use crate::{
    model::DesktopViewport,
    persistence::GeometryStore,
    reducer::{DesktopAction, DesktopState, RuntimeEffect},
};

#[derive(Clone, Debug)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
    geometry: GeometryStore,
}

impl DesktopHostContext {
    /// Wraps an injected host bundle.
    pub fn new(services: HostServices) -> Self {
        let geometry = GeometryStore::new(services.prefs.clone());
        Self { services, geometry }
    }

    /// Returns the persisted window-geometry store.
    pub fn geometry_store(&self) -> &GeometryStore {
        &self.geometry
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy(&self) -> HostStrategy {
        self.services.host_strategy
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    ///
    /// Returns a follow-up action when the effect produced data the reducer needs.
    pub fn run_runtime_effect(
        &self,
        state: &DesktopState,
        effect: RuntimeEffect,
    ) -> Option<DesktopAction> {
        match effect {
            RuntimeEffect::HydrateGeometry(window_id) => {
                let geometry = self.geometry.load(&window_id);
                Some(DesktopAction::HydrateGeometry {
                    window_id,
                    geometry,
                })
            }
            RuntimeEffect::PersistGeometry(window_id) => {
                let frame = state.frame(&window_id)?;
                if let Err(err) = self.geometry.save(&window_id, &frame.geometry()) {
                    logging::warn!("persist geometry failed for `{window_id}`: {err}");
                }
                None
            }
            RuntimeEffect::ForgetGeometry(window_id) => {
                if let Err(err) = self.geometry.delete(&window_id) {
                    logging::warn!("forget geometry failed for `{window_id}`: {err}");
                }
                None
            }
            RuntimeEffect::OpenExternalUrl(url) => {
                if let Err(err) = self.services.external_urls.open_url(&url) {
                    logging::warn!("open external url failed for `{url}`: {err}");
                }
                None
            }
        }
    }

    /// Returns the current browser viewport, or the default desktop size off the browser.
    pub fn desktop_viewport(&self) -> DesktopViewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let fallback = DesktopViewport::default();
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map_or(fallback.width, |value| value as i32);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map_or(fallback.height, |value| value as i32);
                return DesktopViewport { width, height };
            }
        }

        DesktopViewport::default()
    }
}
