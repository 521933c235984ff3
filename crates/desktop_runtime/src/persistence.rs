//! Per-window geometry persistence on top of the host preference store.
//!
//! Entries live under `<namespace>.window.<identifier>`, next to (but never overlapping) the
//! other keys the shell persists under the same namespace, such as the dock order.

use std::rc::Rc;

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::model::{WindowGeometry, WindowId, STORAGE_NAMESPACE};

#[derive(Clone)]
pub struct GeometryStore {
    prefs: Rc<dyn PrefsStore>,
    namespace: String,
}

impl GeometryStore {
    /// Creates a store under the shell's default namespace.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self::with_namespace(prefs, STORAGE_NAMESPACE)
    }

    pub fn with_namespace(prefs: Rc<dyn PrefsStore>, namespace: impl Into<String>) -> Self {
        Self {
            prefs,
            namespace: namespace.into(),
        }
    }

    pub fn key_for(&self, window_id: &WindowId) -> String {
        format!("{}.window.{}", self.namespace, window_id)
    }

    /// Loads the persisted geometry for `window_id`.
    ///
    /// Missing, unreadable, and corrupt entries all come back as `None`.
    pub fn load(&self, window_id: &WindowId) -> Option<WindowGeometry> {
        let key = self.key_for(window_id);
        match load_pref_with::<_, WindowGeometry>(self.prefs.as_ref(), &key) {
            Ok(geometry) => geometry,
            Err(err) => {
                logging::warn!("window geometry load failed for `{key}`: {err}");
                None
            }
        }
    }

    /// Persists `geometry` for `window_id`, replacing any previous entry.
    pub fn save(&self, window_id: &WindowId, geometry: &WindowGeometry) -> Result<(), String> {
        save_pref_with(self.prefs.as_ref(), &self.key_for(window_id), geometry)
    }

    /// Removes the persisted geometry for `window_id`.
    pub fn delete(&self, window_id: &WindowId) -> Result<(), String> {
        self.prefs.delete_pref(&self.key_for(window_id))
    }
}

impl std::fmt::Debug for GeometryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
