//! Per-window hosted content, resolved by window id when a window body mounts.

use std::{collections::BTreeMap, fmt, rc::Rc};

use leptos::View;

use crate::model::WindowId;

/// Renders the body of one window. Called each time the window mounts.
pub type WindowContentRenderer = Rc<dyn Fn() -> View>;

/// Registry of hosted content keyed by window id.
///
/// Windows without a registered renderer fall back to a title placeholder.
#[derive(Clone, Default)]
pub struct WindowContentRegistry {
    renderers: BTreeMap<WindowId, WindowContentRenderer>,
}

impl WindowContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::register`].
    pub fn with(
        mut self,
        window_id: impl Into<WindowId>,
        render: impl Fn() -> View + 'static,
    ) -> Self {
        self.register(window_id, render);
        self
    }

    /// Registers `render` for `window_id`, replacing any earlier renderer.
    pub fn register(&mut self, window_id: impl Into<WindowId>, render: impl Fn() -> View + 'static) {
        self.renderers.insert(window_id.into(), Rc::new(render));
    }

    pub fn renderer(&self, window_id: &WindowId) -> Option<WindowContentRenderer> {
        self.renderers.get(window_id).cloned()
    }

    pub fn is_registered(&self, window_id: &WindowId) -> bool {
        self.renderers.contains_key(window_id)
    }
}

impl fmt::Debug for WindowContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.renderers.keys().map(WindowId::as_str))
            .finish()
    }
}
