//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    catalog,
    model::{DesktopViewport, PointerPosition, WindowGeometry, WindowId},
    window::WindowFrame,
    window_manager::WindowManager,
};

/// Window-manager state plus the frame of every open (including minimized) window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub manager: WindowManager,
    pub frames: BTreeMap<WindowId, WindowFrame>,
    pub viewport: DesktopViewport,
}

impl DesktopState {
    pub fn frame(&self, window_id: &WindowId) -> Option<&WindowFrame> {
        self.frames.get(window_id)
    }

    /// Title of the active window, or the desktop title when nothing is focused.
    pub fn active_window_title(&self) -> &'static str {
        self.manager
            .active_window()
            .and_then(|id| self.frames.get(id))
            .map_or(catalog::DESKTOP_TITLE, WindowFrame::title)
    }

    /// Visible windows in stacking order (bottom first).
    pub fn visible_windows(&self) -> Vec<WindowId> {
        self.manager
            .z_order()
            .iter()
            .filter(|id| !self.manager.is_minimized(id))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or restore and raise) a catalog window.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Replace a window's geometry with the value loaded from persistence.
    HydrateGeometry {
        /// Window being hydrated.
        window_id: WindowId,
        /// Persisted geometry, if any was found.
        geometry: Option<WindowGeometry>,
    },
    /// Close a window and forget its geometry.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Close whichever window is active (menu bar).
    CloseActiveWindow,
    /// Minimize whichever window is active (menu bar).
    MinimizeActiveWindow,
    /// Activate a dock entry: open its window or follow its external link.
    ActivateDockItem {
        /// Dock entry id.
        item_id: String,
    },
    /// Begin dragging a window by its title bar.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Begin resizing a window from its bottom-right handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Global pointer move during a gesture.
    PointerMove {
        /// Window owning the gesture.
        window_id: WindowId,
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Global pointer release ending a gesture.
    PointerUp {
        /// Window owning the gesture.
        window_id: WindowId,
    },
    /// Abandon an in-flight gesture without persisting it.
    CancelGesture {
        /// Window owning the gesture.
        window_id: WindowId,
    },
    /// Toggle a window between its placed and maximized layouts.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Record the current browser viewport size.
    SetViewport {
        /// New viewport.
        viewport: DesktopViewport,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Load persisted geometry for a newly opened window.
    HydrateGeometry(WindowId),
    /// Persist a window's settled geometry.
    PersistGeometry(WindowId),
    /// Delete a closed window's persisted geometry.
    ForgetGeometry(WindowId),
    /// Open a URL outside the desktop shell.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot be honored.
pub enum ReducerError {
    /// The window id has no catalog entry.
    #[error("no window configured for `{0}`")]
    UnknownWindow(WindowId),
    /// The dock entry id has no catalog entry.
    #[error("no dock item configured for `{0}`")]
    UnknownDockItem(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Intents addressed to windows that are not open are treated as stale and ignored.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action names a window or dock entry missing from the catalog.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            open_window(state, window_id, &mut effects)?;
        }
        DesktopAction::HydrateGeometry {
            window_id,
            geometry,
        } => {
            if state.manager.is_open(&window_id) {
                if let Some(frame) = state.frames.get_mut(&window_id) {
                    if !frame.gesture().is_active() {
                        *frame = WindowFrame::restore(*frame.config(), geometry);
                    }
                }
            }
        }
        DesktopAction::CloseWindow { window_id } => close_window(state, &window_id, &mut effects),
        DesktopAction::MinimizeWindow { window_id } => minimize_window(state, &window_id),
        DesktopAction::FocusWindow { window_id } => {
            state.manager.focus(&window_id);
        }
        DesktopAction::CloseActiveWindow => {
            if let Some(window_id) = state.manager.active_window().cloned() {
                close_window(state, &window_id, &mut effects);
            }
        }
        DesktopAction::MinimizeActiveWindow => {
            if let Some(window_id) = state.manager.active_window().cloned() {
                minimize_window(state, &window_id);
            }
        }
        DesktopAction::ActivateDockItem { item_id } => {
            let item = catalog::dock_item(&item_id)
                .ok_or_else(|| ReducerError::UnknownDockItem(item_id.clone()))?;
            match (item.href, item.window_id()) {
                (Some(href), _) => effects.push(RuntimeEffect::OpenExternalUrl(href.to_string())),
                (None, Some(window_id)) => open_window(state, window_id, &mut effects)?,
                (None, None) => return Err(ReducerError::UnknownDockItem(item_id)),
            }
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            if let Some(frame) = visible_frame_mut(state, &window_id) {
                if frame.begin_drag(pointer) {
                    state.manager.focus(&window_id);
                }
            }
        }
        DesktopAction::BeginResize { window_id, pointer } => {
            if let Some(frame) = visible_frame_mut(state, &window_id) {
                if frame.begin_resize(pointer) {
                    state.manager.focus(&window_id);
                }
            }
        }
        DesktopAction::PointerMove { window_id, pointer } => {
            if let Some(frame) = state.frames.get_mut(&window_id) {
                frame.pointer_moved(pointer);
            }
        }
        DesktopAction::PointerUp { window_id } => {
            let settled = state
                .frames
                .get_mut(&window_id)
                .and_then(WindowFrame::end_gesture);
            if settled.is_some() {
                push_persist(state, &window_id, &mut effects);
            }
        }
        DesktopAction::CancelGesture { window_id } => {
            if let Some(frame) = state.frames.get_mut(&window_id) {
                frame.cancel_gesture();
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let toggled = visible_frame_mut(state, &window_id)
                .and_then(WindowFrame::toggle_maximize)
                .is_some();
            if toggled {
                state.manager.focus(&window_id);
                push_persist(state, &window_id, &mut effects);
            }
        }
        DesktopAction::SetViewport { viewport } => {
            state.viewport = viewport;
        }
    }

    Ok(effects)
}

fn open_window(
    state: &mut DesktopState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let config =
        catalog::window_config(&window_id).ok_or_else(|| ReducerError::UnknownWindow(window_id.clone()))?;
    state.manager.open(&window_id);
    if !state.frames.contains_key(&window_id) {
        state
            .frames
            .insert(window_id.clone(), WindowFrame::new(*config));
        effects.push(RuntimeEffect::HydrateGeometry(window_id));
    }
    Ok(())
}

fn close_window(state: &mut DesktopState, window_id: &WindowId, effects: &mut Vec<RuntimeEffect>) {
    if state.manager.close(window_id) {
        state.frames.remove(window_id);
        effects.push(RuntimeEffect::ForgetGeometry(window_id.clone()));
    }
}

fn minimize_window(state: &mut DesktopState, window_id: &WindowId) {
    if state.manager.minimize(window_id) {
        // A minimized window keeps its last settled geometry.
        if let Some(frame) = state.frames.get_mut(window_id) {
            frame.cancel_gesture();
        }
    }
}

fn visible_frame_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Option<&'a mut WindowFrame> {
    if state.manager.is_minimized(window_id) || !state.manager.is_open(window_id) {
        return None;
    }
    state.frames.get_mut(window_id)
}

fn push_persist(state: &DesktopState, window_id: &WindowId, effects: &mut Vec<RuntimeEffect>) {
    if state.manager.is_open(window_id) && !state.manager.is_minimized(window_id) {
        effects.push(RuntimeEffect::PersistGeometry(window_id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::MENU_BAR_HEIGHT_PX;

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, raw: &str) -> Vec<RuntimeEffect> {
        dispatch(state, DesktopAction::OpenWindow { window_id: id(raw) })
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn opening_creates_frame_and_requests_hydration_once() {
        let mut state = DesktopState::default();

        let effects = open(&mut state, "about");
        assert_eq!(effects, vec![RuntimeEffect::HydrateGeometry(id("about"))]);
        assert!(state.frame(&id("about")).is_some());
        assert_eq!(state.active_window_title(), "About");

        let effects = open(&mut state, "about");
        assert!(effects.is_empty(), "reopening keeps the live frame");
    }

    #[test]
    fn unknown_window_is_rejected() {
        let mut state = DesktopState::default();
        let err = reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: id("terminal"),
            },
        )
        .expect_err("unknown window");

        assert_eq!(err, ReducerError::UnknownWindow(id("terminal")));
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn hydration_applies_stored_geometry() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        let stored = WindowGeometry {
            x: 300,
            y: 200,
            width: 500,
            height: 320,
            is_maximized: false,
        };

        dispatch(
            &mut state,
            DesktopAction::HydrateGeometry {
                window_id: id("about"),
                geometry: Some(stored),
            },
        );

        assert_eq!(state.frame(&id("about")).expect("frame").geometry(), stored);
    }

    #[test]
    fn hydration_for_closed_window_is_ignored() {
        let mut state = DesktopState::default();
        let effects = dispatch(
            &mut state,
            DesktopAction::HydrateGeometry {
                window_id: id("about"),
                geometry: None,
            },
        );

        assert!(effects.is_empty());
        assert!(state.frames.is_empty());
    }

    #[test]
    fn minimized_window_keeps_frame_but_is_not_visible() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        dispatch(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: id("about"),
            },
        );

        assert_eq!(state.manager.minimized_windows(), &[id("about")]);
        assert_eq!(state.manager.active_window(), None);
        assert!(state.frame(&id("about")).is_some());
        assert!(state.visible_windows().is_empty());
        assert_eq!(state.active_window_title(), catalog::DESKTOP_TITLE);
    }

    #[test]
    fn drag_gesture_focuses_clamps_and_persists_on_release() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "projects");

        dispatch(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: id("about"),
                pointer: pointer(200, 80),
            },
        );
        assert_eq!(state.manager.active_window(), Some(&id("about")));

        let effects = dispatch(
            &mut state,
            DesktopAction::PointerMove {
                window_id: id("about"),
                pointer: pointer(260, -300),
            },
        );
        assert!(effects.is_empty(), "in-flight moves are not persisted");
        let preview = state.frame(&id("about")).expect("frame").current_geometry();
        assert_eq!((preview.x, preview.y), (160, MENU_BAR_HEIGHT_PX));

        let effects = dispatch(
            &mut state,
            DesktopAction::PointerUp {
                window_id: id("about"),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistGeometry(id("about"))]);
        assert_eq!(
            state.frame(&id("about")).expect("frame").geometry().y,
            MENU_BAR_HEIGHT_PX
        );
    }

    #[test]
    fn pointer_up_without_gesture_persists_nothing() {
        let mut state = DesktopState::default();
        open(&mut state, "about");

        let effects = dispatch(
            &mut state,
            DesktopAction::PointerUp {
                window_id: id("about"),
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn resize_below_minimum_is_clamped() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        dispatch(
            &mut state,
            DesktopAction::BeginResize {
                window_id: id("about"),
                pointer: pointer(750, 460),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::PointerMove {
                window_id: id("about"),
                pointer: pointer(200, 100),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::PointerUp {
                window_id: id("about"),
            },
        );

        let geometry = state.frame(&id("about")).expect("frame").geometry();
        assert_eq!((geometry.width, geometry.height), (400, 300));
    }

    #[test]
    fn cancelled_gesture_leaves_settled_geometry() {
        let mut state = DesktopState::default();
        open(&mut state, "cv");
        let before = state.frame(&id("cv")).expect("frame").geometry();

        dispatch(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: id("cv"),
                pointer: pointer(0, 0),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::PointerMove {
                window_id: id("cv"),
                pointer: pointer(90, 90),
            },
        );
        let effects = dispatch(
            &mut state,
            DesktopAction::CancelGesture {
                window_id: id("cv"),
            },
        );

        assert!(effects.is_empty());
        let frame = state.frame(&id("cv")).expect("frame");
        assert_eq!(frame.geometry(), before);
        assert!(!frame.gesture().is_active());
    }

    #[test]
    fn minimizing_mid_gesture_drops_the_gesture() {
        let mut state = DesktopState::default();
        open(&mut state, "cv");
        let before = state.frame(&id("cv")).expect("frame").geometry();
        dispatch(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: id("cv"),
                pointer: pointer(0, 0),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::PointerMove {
                window_id: id("cv"),
                pointer: pointer(50, 50),
            },
        );
        dispatch(&mut state, DesktopAction::MinimizeActiveWindow);

        let effects = dispatch(
            &mut state,
            DesktopAction::PointerUp {
                window_id: id("cv"),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.frame(&id("cv")).expect("frame").geometry(), before);
    }

    #[test]
    fn gestures_on_minimized_windows_are_ignored() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        dispatch(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: id("about"),
            },
        );

        dispatch(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: id("about"),
                pointer: pointer(0, 0),
            },
        );
        let effects = dispatch(
            &mut state,
            DesktopAction::ToggleMaximize {
                window_id: id("about"),
            },
        );

        assert!(effects.is_empty());
        let frame = state.frame(&id("about")).expect("frame");
        assert!(!frame.gesture().is_active());
        assert!(!frame.is_maximized());
        assert_eq!(state.manager.active_window(), None);
    }

    #[test]
    fn maximize_toggle_persists_and_focuses() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "skills");

        let effects = dispatch(
            &mut state,
            DesktopAction::ToggleMaximize {
                window_id: id("about"),
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::PersistGeometry(id("about"))]);
        assert!(state.frame(&id("about")).expect("frame").is_maximized());
        assert_eq!(state.manager.z_order(), &[id("skills"), id("about")]);
    }

    #[test]
    fn close_drops_frame_and_forgets_geometry_once() {
        let mut state = DesktopState::default();
        open(&mut state, "about");

        let effects = dispatch(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: id("about"),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::ForgetGeometry(id("about"))]);
        assert!(state.frames.is_empty());

        let once = state.clone();
        let effects = dispatch(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: id("about"),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state, once);
    }

    #[test]
    fn menu_bar_intents_target_the_active_window() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "skills");

        dispatch(&mut state, DesktopAction::MinimizeActiveWindow);
        assert_eq!(state.manager.minimized_windows(), &[id("skills")]);

        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("about"),
            },
        );
        let effects = dispatch(&mut state, DesktopAction::CloseActiveWindow);
        assert_eq!(effects, vec![RuntimeEffect::ForgetGeometry(id("about"))]);

        let effects = dispatch(&mut state, DesktopAction::CloseActiveWindow);
        assert!(effects.is_empty(), "no active window left");
        assert_eq!(state.manager.open_windows(), &[id("skills")]);
    }

    #[test]
    fn dock_items_open_windows_or_external_links() {
        let mut state = DesktopState::default();

        let effects = dispatch(
            &mut state,
            DesktopAction::ActivateDockItem {
                item_id: "github".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl("https://github.com".to_string())]
        );
        assert!(state.manager.open_windows().is_empty());

        let effects = dispatch(
            &mut state,
            DesktopAction::ActivateDockItem {
                item_id: "projects".to_string(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::HydrateGeometry(id("projects"))]);
        assert_eq!(state.manager.active_window(), Some(&id("projects")));

        let err = reduce_desktop(
            &mut state,
            DesktopAction::ActivateDockItem {
                item_id: "trash".to_string(),
            },
        )
        .expect_err("unknown dock item");
        assert_eq!(err, ReducerError::UnknownDockItem("trash".to_string()));
    }

    #[test]
    fn stale_window_intents_are_no_ops() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        let before = state.clone();

        for action in [
            DesktopAction::CloseWindow {
                window_id: id("skills"),
            },
            DesktopAction::MinimizeWindow {
                window_id: id("skills"),
            },
            DesktopAction::FocusWindow {
                window_id: id("skills"),
            },
            DesktopAction::PointerMove {
                window_id: id("skills"),
                pointer: pointer(1, 1),
            },
            DesktopAction::PointerUp {
                window_id: id("skills"),
            },
        ] {
            assert!(dispatch(&mut state, action).is_empty());
        }
        assert_eq!(state, before);
    }
}
