//! Window and dock catalog compiled from `window_catalog.toml`.

use crate::model::{Point, Size, WindowId};

/// Static configuration for one logical window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub initial_position: Point,
    pub initial_size: Size,
    pub min_size: Size,
}

/// Dock entry; entries with an `href` open outside the desktop instead of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: Option<&'static str>,
}

impl DockItem {
    pub fn is_external(&self) -> bool {
        self.href.is_some()
    }

    pub fn window_id(&self) -> Option<WindowId> {
        (!self.is_external()).then(|| WindowId::new(self.id))
    }
}

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

/// Title shown in the menu bar when no window is active.
pub const DESKTOP_TITLE: &str = "Finder";

pub fn window_catalog() -> &'static [WindowConfig] {
    WINDOW_CATALOG
}

pub fn window_config(window_id: &WindowId) -> Option<&'static WindowConfig> {
    WINDOW_CATALOG
        .iter()
        .find(|config| config.id == window_id.as_str())
}

pub fn dock_items() -> &'static [DockItem] {
    DOCK_CATALOG
}

pub fn dock_item(item_id: &str) -> Option<&'static DockItem> {
    DOCK_CATALOG.iter().find(|item| item.id == item_id)
}
