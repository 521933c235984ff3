//! Per-window geometry and pointer-gesture state.
//!
//! A [`WindowFrame`] keeps two geometries: the settled one, which is what gets persisted, and an
//! in-flight preview owned by the active gesture. Pointer moves only touch the preview; the
//! preview becomes the settled geometry on pointer-up and is discarded if the gesture is
//! cancelled.

use crate::{
    catalog::WindowConfig,
    model::{DesktopViewport, PointerPosition, Size, WindowGeometry, WindowRect, MENU_BAR_HEIGHT_PX},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_start: PointerPosition,
    pub geometry_start: WindowGeometry,
    pub preview: WindowGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub pointer_start: PointerPosition,
    pub geometry_start: WindowGeometry,
    pub preview: WindowGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowGesture {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl WindowGesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrame {
    config: WindowConfig,
    geometry: WindowGeometry,
    gesture: WindowGesture,
}

impl WindowFrame {
    /// Creates a frame at the catalog's initial placement.
    pub fn new(config: WindowConfig) -> Self {
        Self::restore(config, None)
    }

    /// Creates a frame from a previously persisted geometry, falling back to catalog defaults.
    ///
    /// Stored values outside [`WindowGeometry::is_within_bounds`] count as corrupt.
    pub fn restore(config: WindowConfig, stored: Option<WindowGeometry>) -> Self {
        let geometry = stored
            .filter(|geometry| geometry.is_within_bounds())
            .unwrap_or_else(|| {
                WindowGeometry::from_defaults(config.initial_position, config.initial_size)
            })
            .clamped(config.min_size);
        Self {
            config,
            geometry,
            gesture: WindowGesture::Idle,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn title(&self) -> &'static str {
        self.config.title
    }

    pub fn min_size(&self) -> Size {
        self.config.min_size
    }

    /// Last settled geometry (the value that is persisted).
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Geometry to render right now: the in-flight preview while a gesture is active.
    pub fn current_geometry(&self) -> WindowGeometry {
        match self.gesture {
            WindowGesture::Idle => self.geometry,
            WindowGesture::Dragging(session) => session.preview,
            WindowGesture::Resizing(session) => session.preview,
        }
    }

    pub fn gesture(&self) -> WindowGesture {
        self.gesture
    }

    pub fn is_maximized(&self) -> bool {
        self.geometry.is_maximized
    }

    /// Starts a title-bar drag. Rejected while maximized or mid-gesture.
    pub fn begin_drag(&mut self, pointer: PointerPosition) -> bool {
        if self.geometry.is_maximized || self.gesture.is_active() {
            return false;
        }
        self.gesture = WindowGesture::Dragging(DragSession {
            pointer_start: pointer,
            geometry_start: self.geometry,
            preview: self.geometry,
        });
        true
    }

    /// Starts a bottom-right resize. Rejected while maximized or mid-gesture.
    pub fn begin_resize(&mut self, pointer: PointerPosition) -> bool {
        if self.geometry.is_maximized || self.gesture.is_active() {
            return false;
        }
        self.gesture = WindowGesture::Resizing(ResizeSession {
            pointer_start: pointer,
            geometry_start: self.geometry,
            preview: self.geometry,
        });
        true
    }

    /// Applies a global pointer move to the active gesture. Returns `false` when idle.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) -> bool {
        let min_size = self.config.min_size;
        match &mut self.gesture {
            WindowGesture::Idle => false,
            WindowGesture::Dragging(session) => {
                session.preview = drag_geometry(session, pointer);
                true
            }
            WindowGesture::Resizing(session) => {
                session.preview = resize_geometry(session, pointer, min_size);
                true
            }
        }
    }

    /// Ends the active gesture, settling its preview. Returns the geometry to persist.
    pub fn end_gesture(&mut self) -> Option<WindowGeometry> {
        let settled = match std::mem::take(&mut self.gesture) {
            WindowGesture::Idle => return None,
            WindowGesture::Dragging(session) => session.preview,
            WindowGesture::Resizing(session) => session.preview,
        };
        self.geometry = settled;
        Some(settled)
    }

    /// Drops the active gesture without touching the settled geometry.
    pub fn cancel_gesture(&mut self) -> bool {
        std::mem::take(&mut self.gesture).is_active()
    }

    /// Flips the maximize flag, keeping the restore rectangle. Rejected mid-gesture.
    pub fn toggle_maximize(&mut self) -> Option<WindowGeometry> {
        if self.gesture.is_active() {
            return None;
        }
        self.geometry.is_maximized = !self.geometry.is_maximized;
        Some(self.geometry)
    }

    /// Rectangle to render inside `viewport`.
    pub fn render_rect(&self, viewport: DesktopViewport) -> WindowRect {
        let geometry = self.current_geometry();
        if geometry.is_maximized {
            viewport.maximized_rect()
        } else {
            geometry.rect()
        }
    }
}

fn pointer_delta(start: PointerPosition, pointer: PointerPosition) -> (i32, i32) {
    (
        pointer.x.saturating_sub(start.x),
        pointer.y.saturating_sub(start.y),
    )
}

fn drag_geometry(session: &DragSession, pointer: PointerPosition) -> WindowGeometry {
    let (dx, dy) = pointer_delta(session.pointer_start, pointer);
    WindowGeometry {
        x: session.geometry_start.x.saturating_add(dx),
        y: session
            .geometry_start
            .y
            .saturating_add(dy)
            .max(MENU_BAR_HEIGHT_PX),
        ..session.geometry_start
    }
}

fn resize_geometry(
    session: &ResizeSession,
    pointer: PointerPosition,
    min_size: Size,
) -> WindowGeometry {
    let (dx, dy) = pointer_delta(session.pointer_start, pointer);
    WindowGeometry {
        width: session
            .geometry_start
            .width
            .saturating_add(dx)
            .max(min_size.width),
        height: session
            .geometry_start
            .height
            .saturating_add(dy)
            .max(min_size.height),
        ..session.geometry_start
    }
}
