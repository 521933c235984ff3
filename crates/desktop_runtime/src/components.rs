//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menu_bar;
mod window;

use leptos::*;

use self::{dock::Dock, menu_bar::MenuBar, window::DesktopWindow};

use crate::model::{PointerPosition, MENU_BAR_HEIGHT_PX};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Full desktop: menu bar on top, managed windows, dock at the bottom.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            style=format!("--menu-bar-height:{}px;", MENU_BAR_HEIGHT_PX)
        >
            <MenuBar />
            <div class="desktop-window-layer">
                <For
                    each=move || state.get().visible_windows()
                    key=|window_id| window_id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <Dock />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn is_primary_button(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}
