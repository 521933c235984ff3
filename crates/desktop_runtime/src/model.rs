use std::fmt;

use serde::{Deserialize, Serialize};

/// Height of the fixed menu bar; windows never sit above this line.
pub const MENU_BAR_HEIGHT_PX: i32 = 28;
/// Space reserved for the dock below a maximized window.
pub const DOCK_INSET_PX: i32 = 80;
/// Stacking value assigned to the bottom-most managed window.
pub const Z_INDEX_BASE: u32 = 10;
/// Largest coordinate or dimension accepted from persisted geometry.
pub const MAX_GEOMETRY_PX: i32 = 1 << 20;
/// Prefix shared by every key the desktop shell persists.
pub const STORAGE_NAMESPACE: &str = "mac_portfolio";

/// Logical application window identifier (`"about"`, `"projects"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Placement of one window, persisted as `{x, y, width, height, isMaximized}`.
///
/// While `is_maximized` is set the rectangle is kept as the restore geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub is_maximized: bool,
}

impl WindowGeometry {
    pub fn from_defaults(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
            is_maximized: false,
        }
    }

    /// Floors the size at `min` and keeps the window below the menu bar.
    pub fn clamped(self, min: Size) -> Self {
        Self {
            y: self.y.max(MENU_BAR_HEIGHT_PX),
            width: self.width.max(min.width),
            height: self.height.max(min.height),
            ..self
        }
    }

    /// Whether every field lies within `±MAX_GEOMETRY_PX` (sizes in `0..=MAX_GEOMETRY_PX`).
    pub fn is_within_bounds(self) -> bool {
        let coordinate = -MAX_GEOMETRY_PX..=MAX_GEOMETRY_PX;
        let dimension = 0..=MAX_GEOMETRY_PX;
        coordinate.contains(&self.x)
            && coordinate.contains(&self.y)
            && dimension.contains(&self.width)
            && dimension.contains(&self.height)
    }

    pub fn rect(self) -> WindowRect {
        WindowRect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }
}

/// Rectangle a window occupies on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopViewport {
    pub width: i32,
    pub height: i32,
}

impl DesktopViewport {
    /// Area a maximized window fills: everything between the menu bar and the dock.
    pub fn maximized_rect(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: MENU_BAR_HEIGHT_PX,
            w: self.width.max(0),
            h: (self.height - MENU_BAR_HEIGHT_PX - DOCK_INSET_PX).max(0),
        }
    }
}

impl Default for DesktopViewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}
