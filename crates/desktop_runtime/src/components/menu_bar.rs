use super::*;
use crate::{catalog, model::WindowId, reducer::DesktopAction};

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_menu_open = create_rw_signal(false);

    let active_title = move || state.with(|desktop| desktop.active_window_title());
    let has_active = move || state.with(|desktop| desktop.manager.active_window().is_some());
    let run = move |action: DesktopAction| {
        window_menu_open.set(false);
        runtime.dispatch_action(action);
    };

    view! {
        <header class="menu-bar" role="menubar">
            <span class="menu-bar-title">{active_title}</span>
            <div class="menu-bar-menu">
                <button
                    class="menu-bar-button"
                    aria-haspopup="menu"
                    aria-expanded=move || window_menu_open.get().to_string()
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        window_menu_open.update(|open| *open = !*open);
                    }
                >
                    "Window"
                </button>
                <Show when=move || window_menu_open.get() fallback=|| ()>
                    <ul class="menu-bar-dropdown" role="menu">
                        <li>
                            <button
                                role="menuitem"
                                disabled=move || !has_active()
                                on:click=move |_| run(DesktopAction::MinimizeActiveWindow)
                            >
                                "Minimize"
                            </button>
                        </li>
                        <li>
                            <button
                                role="menuitem"
                                disabled=move || !has_active()
                                on:click=move |_| run(DesktopAction::CloseActiveWindow)
                            >
                                "Close"
                            </button>
                        </li>
                        <li class="menu-separator" role="separator"></li>
                        {catalog::window_catalog()
                            .iter()
                            .map(|config| {
                                let window_id = config.id;
                                view! {
                                    <li>
                                        <button
                                            role="menuitem"
                                            on:click=move |_| {
                                                run(DesktopAction::OpenWindow {
                                                    window_id: WindowId::new(window_id),
                                                })
                                            }
                                        >
                                            {config.title}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
        </header>
    }
}
