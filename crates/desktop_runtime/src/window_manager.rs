//! Membership, focus, and stacking order for identifier-addressed windows.
//!
//! Intents for windows that are not open (stale dock or menu callbacks) are ignored rather than
//! reported.

use crate::model::{WindowId, Z_INDEX_BASE};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowManager {
    open_windows: Vec<WindowId>,
    minimized_windows: Vec<WindowId>,
    z_order: Vec<WindowId>,
    active_window: Option<WindowId>,
}

impl WindowManager {
    /// Opens `window_id`, restoring it if minimized, and brings it to the front.
    pub fn open(&mut self, window_id: &WindowId) {
        self.minimized_windows.retain(|id| id != window_id);
        if !self.is_open(window_id) {
            self.open_windows.push(window_id.clone());
        }
        self.focus(window_id);
    }

    /// Closes `window_id`. Returns whether it was open.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        if !self.is_open(window_id) {
            return false;
        }
        self.open_windows.retain(|id| id != window_id);
        self.minimized_windows.retain(|id| id != window_id);
        self.z_order.retain(|id| id != window_id);
        if self.active_window.as_ref() == Some(window_id) {
            self.active_window = None;
        }
        true
    }

    /// Minimizes `window_id`. Stacking order is left untouched.
    pub fn minimize(&mut self, window_id: &WindowId) -> bool {
        if !self.is_open(window_id) {
            return false;
        }
        if !self.is_minimized(window_id) {
            self.minimized_windows.push(window_id.clone());
        }
        if self.active_window.as_ref() == Some(window_id) {
            self.active_window = None;
        }
        true
    }

    /// Raises `window_id` to the top and makes it active.
    ///
    /// Only visible windows can take focus; anything else is a no-op returning `false`.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        if !self.is_open(window_id) || self.is_minimized(window_id) {
            return false;
        }
        self.z_order.retain(|id| id != window_id);
        self.z_order.push(window_id.clone());
        self.active_window = Some(window_id.clone());
        true
    }

    /// Stacking value for `window_id`; later in the z-order always means larger.
    pub fn z_index_of(&self, window_id: &WindowId) -> Option<u32> {
        self.z_order
            .iter()
            .position(|id| id == window_id)
            .map(|index| Z_INDEX_BASE + index as u32)
    }

    pub fn open_windows(&self) -> &[WindowId] {
        &self.open_windows
    }

    pub fn minimized_windows(&self) -> &[WindowId] {
        &self.minimized_windows
    }

    pub fn z_order(&self) -> &[WindowId] {
        &self.z_order
    }

    pub fn active_window(&self) -> Option<&WindowId> {
        self.active_window.as_ref()
    }

    pub fn is_open(&self, window_id: &WindowId) -> bool {
        self.open_windows.contains(window_id)
    }

    pub fn is_minimized(&self, window_id: &WindowId) -> bool {
        self.minimized_windows.contains(window_id)
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active_window.as_ref() == Some(window_id)
    }

    /// Verifies the membership, stacking, and focus invariants.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), String> {
        if let Some(id) = self
            .minimized_windows
            .iter()
            .find(|id| !self.open_windows.contains(id))
        {
            return Err(format!("minimized window `{id}` is not open"));
        }
        if let Some(active) = &self.active_window {
            if !self.is_open(active) || self.is_minimized(active) {
                return Err(format!("active window `{active}` is not visible"));
            }
        }
        if self.z_order.len() != self.open_windows.len() {
            return Err(format!(
                "z-order has {} entries for {} open windows",
                self.z_order.len(),
                self.open_windows.len()
            ));
        }
        if let Some(id) = self
            .open_windows
            .iter()
            .find(|id| self.z_order.iter().filter(|z| z == id).count() != 1)
        {
            return Err(format!("open window `{id}` is not stacked exactly once"));
        }
        Ok(())
    }
}
