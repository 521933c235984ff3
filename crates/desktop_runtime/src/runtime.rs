//! Framework-independent desktop runtime: reducer state plus its host side effects.

use leptos::logging;
use platform_host::HostServices;

use crate::{
    catalog, effect_executor,
    host::DesktopHostContext,
    model::{WindowId, WindowRect},
    reducer::{reduce_desktop, DesktopAction, DesktopState, ReducerError},
};

#[derive(Debug, Clone)]
pub struct DesktopRuntime {
    host: DesktopHostContext,
    state: DesktopState,
}

impl DesktopRuntime {
    pub fn new(services: HostServices) -> Self {
        let host = DesktopHostContext::new(services);
        let state = DesktopState {
            viewport: host.desktop_viewport(),
            ..DesktopState::default()
        };
        Self { host, state }
    }

    /// Reduces `action` and runs every effect it produces, including follow-ups.
    ///
    /// Failed actions are logged and leave the state untouched.
    pub fn dispatch(&mut self, action: DesktopAction) {
        if let Err(err) = self.try_dispatch(action) {
            logging::warn!("desktop reducer error: {err}");
        }
    }

    /// Like [`Self::dispatch`], but hands the reducer error back to the caller.
    ///
    /// # Errors
    ///
    /// Returns the [`ReducerError`] for actions naming unknown windows or dock entries.
    pub fn try_dispatch(&mut self, action: DesktopAction) -> Result<(), ReducerError> {
        let mut next = self.state.clone();
        let effects = reduce_desktop(&mut next, action)?;
        self.state = next;
        effect_executor::drain(&self.host, &mut self.state, effects);
        Ok(())
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn host(&self) -> &DesktopHostContext {
        &self.host
    }

    pub fn open_windows(&self) -> &[WindowId] {
        self.state.manager.open_windows()
    }

    pub fn minimized_windows(&self) -> &[WindowId] {
        self.state.manager.minimized_windows()
    }

    pub fn active_window(&self) -> Option<&WindowId> {
        self.state.manager.active_window()
    }

    /// Menu-bar title: the active window's title, or "Finder" on the bare desktop.
    pub fn active_window_title(&self) -> &'static str {
        self.state.active_window_title()
    }

    pub fn z_index_of(&self, window_id: &WindowId) -> Option<u32> {
        self.state.manager.z_index_of(window_id)
    }

    /// Where `window_id` renders right now; `None` while closed or minimized.
    pub fn window_rect(&self, window_id: &WindowId) -> Option<WindowRect> {
        if self.state.manager.is_minimized(window_id) {
            return None;
        }
        self.state
            .frame(window_id)
            .map(|frame| frame.render_rect(self.state.viewport))
    }

    /// Dock entries whose window is currently open (running indicator).
    pub fn running_dock_items(&self) -> Vec<&'static str> {
        catalog::dock_items()
            .iter()
            .filter(|item| {
                item.window_id()
                    .is_some_and(|window_id| self.state.manager.is_open(&window_id))
            })
            .map(|item| item.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryPrefsStore, RecordingExternalUrlService};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{PointerPosition, WindowGeometry, MENU_BAR_HEIGHT_PX};

    fn runtime() -> (DesktopRuntime, MemoryPrefsStore, RecordingExternalUrlService) {
        let (services, prefs, urls) = HostServices::memory();
        (DesktopRuntime::new(services), prefs, urls)
    }

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn open(runtime: &mut DesktopRuntime, raw: &str) {
        runtime.dispatch(DesktopAction::OpenWindow { window_id: id(raw) });
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn open_about_activates_and_stacks_it() {
        let (mut runtime, _, _) = runtime();
        open(&mut runtime, "about");

        assert_eq!(runtime.open_windows(), &[id("about")]);
        assert_eq!(runtime.active_window(), Some(&id("about")));
        assert_eq!(runtime.state().manager.z_order(), &[id("about")]);
        assert_eq!(runtime.active_window_title(), "About");
    }

    #[test]
    fn focusing_an_older_window_raises_it() {
        let (mut runtime, _, _) = runtime();
        open(&mut runtime, "about");
        open(&mut runtime, "projects");
        runtime.dispatch(DesktopAction::FocusWindow {
            window_id: id("about"),
        });

        assert_eq!(
            runtime.state().manager.z_order(),
            &[id("projects"), id("about")]
        );
        assert!(runtime.z_index_of(&id("about")) > runtime.z_index_of(&id("projects")));
    }

    #[test]
    fn minimized_window_has_no_rect() {
        let (mut runtime, _, _) = runtime();
        open(&mut runtime, "about");
        runtime.dispatch(DesktopAction::MinimizeWindow {
            window_id: id("about"),
        });

        assert_eq!(runtime.minimized_windows(), &[id("about")]);
        assert_eq!(runtime.active_window(), None);
        assert_eq!(runtime.window_rect(&id("about")), None);
        assert_eq!(runtime.active_window_title(), "Finder");
    }

    #[test]
    fn resize_drag_to_narrow_width_is_clamped_and_persisted() {
        let (mut runtime, _, _) = runtime();
        open(&mut runtime, "about");
        let about = id("about");

        runtime.dispatch(DesktopAction::BeginResize {
            window_id: about.clone(),
            pointer: pointer(750, 460),
        });
        runtime.dispatch(DesktopAction::PointerMove {
            window_id: about.clone(),
            pointer: pointer(200, 460),
        });
        runtime.dispatch(DesktopAction::PointerUp {
            window_id: about.clone(),
        });

        let stored = runtime
            .host()
            .geometry_store()
            .load(&about)
            .expect("persisted geometry");
        assert_eq!(stored.width, 400);
        assert_eq!(stored.height, 400);
    }

    #[test]
    fn close_forgets_persisted_geometry() {
        let (mut runtime, prefs, _) = runtime();
        open(&mut runtime, "about");
        runtime.dispatch(DesktopAction::ToggleMaximize {
            window_id: id("about"),
        });
        assert_eq!(prefs.keys(), vec!["mac_portfolio.window.about".to_string()]);

        runtime.dispatch(DesktopAction::CloseWindow {
            window_id: id("about"),
        });

        assert_eq!(runtime.host().geometry_store().load(&id("about")), None);
        assert!(prefs.keys().is_empty());
    }

    #[test]
    fn reopening_hydrates_from_storage() {
        let (mut runtime, _, _) = runtime();
        let stored = WindowGeometry {
            x: 40,
            y: 10,
            width: 700,
            height: 420,
            is_maximized: false,
        };
        runtime
            .host()
            .geometry_store()
            .save(&id("about"), &stored)
            .expect("seed");

        open(&mut runtime, "about");

        let geometry = runtime
            .state()
            .frame(&id("about"))
            .expect("frame")
            .geometry();
        assert_eq!(
            geometry,
            WindowGeometry {
                y: MENU_BAR_HEIGHT_PX,
                ..stored
            }
        );
    }

    #[test]
    fn corrupt_storage_falls_back_to_catalog_defaults() {
        let (mut runtime, prefs, _) = runtime();
        platform_host::PrefsStore::save_pref(&prefs, "mac_portfolio.window.cv", "not json")
            .expect("seed");

        open(&mut runtime, "cv");

        let geometry = runtime.state().frame(&id("cv")).expect("frame").geometry();
        assert_eq!((geometry.x, geometry.y), (220, 110));
        assert_eq!((geometry.width, geometry.height), (550, 550));
    }

    #[test]
    fn oversized_stored_geometry_is_replaced_before_resizing() {
        let (mut runtime, prefs, _) = runtime();
        platform_host::PrefsStore::save_pref(
            &prefs,
            "mac_portfolio.window.about",
            r#"{"x":100,"y":60,"width":2147483600,"height":400,"isMaximized":false}"#,
        )
        .expect("seed");
        open(&mut runtime, "about");
        let about = id("about");

        runtime.dispatch(DesktopAction::BeginResize {
            window_id: about.clone(),
            pointer: pointer(750, 460),
        });
        runtime.dispatch(DesktopAction::PointerMove {
            window_id: about.clone(),
            pointer: pointer(1250, 460),
        });
        runtime.dispatch(DesktopAction::PointerUp {
            window_id: about.clone(),
        });

        let stored = runtime
            .host()
            .geometry_store()
            .load(&about)
            .expect("persisted geometry");
        assert_eq!((stored.width, stored.height), (1150, 400));
    }

    #[test]
    fn minimized_windows_do_not_persist() {
        let (mut runtime, prefs, _) = runtime();
        open(&mut runtime, "skills");
        runtime.dispatch(DesktopAction::MinimizeWindow {
            window_id: id("skills"),
        });
        runtime.dispatch(DesktopAction::ToggleMaximize {
            window_id: id("skills"),
        });

        assert!(prefs.keys().is_empty());
    }

    #[test]
    fn external_dock_items_open_links_without_windows() {
        let (mut runtime, _, urls) = runtime();
        runtime.dispatch(DesktopAction::ActivateDockItem {
            item_id: "linkedin".to_string(),
        });

        assert_eq!(urls.opened(), vec!["https://linkedin.com".to_string()]);
        assert!(runtime.open_windows().is_empty());
    }

    #[test]
    fn unknown_window_leaves_state_unchanged() {
        let (mut runtime, _, _) = runtime();
        open(&mut runtime, "about");
        let before = runtime.state().clone();

        let err = runtime
            .try_dispatch(DesktopAction::OpenWindow {
                window_id: id("terminal"),
            })
            .expect_err("unknown window");

        assert_eq!(err, ReducerError::UnknownWindow(id("terminal")));
        assert_eq!(runtime.state(), &before);
    }

    #[test]
    fn running_dock_items_follow_open_windows() {
        let (mut runtime, _, _) = runtime();
        open(&mut runtime, "projects");
        open(&mut runtime, "cv");
        runtime.dispatch(DesktopAction::MinimizeWindow {
            window_id: id("cv"),
        });

        assert_eq!(runtime.running_dock_items(), vec!["projects", "cv"]);
    }

    #[test]
    fn drag_never_renders_above_menu_bar() {
        let (mut runtime, _, _) = runtime();
        open(&mut runtime, "contact");
        let contact = id("contact");
        runtime.dispatch(DesktopAction::BeginDrag {
            window_id: contact.clone(),
            pointer: pointer(300, 100),
        });

        for y in [80, 40, 0, -200] {
            runtime.dispatch(DesktopAction::PointerMove {
                window_id: contact.clone(),
                pointer: pointer(300, y),
            });
            let rect = runtime.window_rect(&contact).expect("visible");
            assert!(rect.y >= MENU_BAR_HEIGHT_PX);
        }
    }
}
