//! External URL host-service adapter for browser contexts.

use platform_host::ExternalUrlService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter that opens links in a new, opener-less tab.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
                .map(|_| ())
                .map_err(|e| format!("window.open failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err("external URLs are only supported in the browser".to_string())
        }
    }
}
