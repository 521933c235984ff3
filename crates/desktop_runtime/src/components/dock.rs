use super::*;
use crate::{catalog, reducer::DesktopAction};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <nav class="dock" aria-label="Dock">
            {catalog::dock_items()
                .iter()
                .map(|item| {
                    let item_id = item.id;
                    let window_id = item.window_id();
                    let indicator_id = window_id.clone();
                    let is_running = move || {
                        indicator_id
                            .as_ref()
                            .is_some_and(|id| state.with(|desktop| desktop.manager.is_open(id)))
                    };
                    let is_minimized = move || {
                        window_id
                            .as_ref()
                            .is_some_and(|id| state.with(|desktop| desktop.manager.is_minimized(id)))
                    };
                    view! {
                        <button
                            class="dock-item"
                            class:external=item.is_external()
                            class:running=is_running
                            class:minimized=is_minimized
                            title=item.label
                            aria-label=item.label
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::ActivateDockItem {
                                    item_id: item_id.to_string(),
                                });
                            }
                        >
                            <span class="dock-label">{item.label}</span>
                            <span class="dock-indicator" aria-hidden="true"></span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
