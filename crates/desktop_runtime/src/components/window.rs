use leptos::leptos_dom::helpers::WindowListenerHandle;

use super::*;
use crate::{catalog, model::WindowId, reducer::DesktopAction};

/// Global pointer listeners owned by one in-flight drag or resize.
#[derive(Default)]
struct GestureListeners {
    handles: Vec<WindowListenerHandle>,
}

impl GestureListeners {
    fn is_listening(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Unregisters every listener. Returns whether any were registered.
    fn remove_all(&mut self) -> bool {
        let was_listening = self.is_listening();
        for handle in self.handles.drain(..) {
            handle.remove();
        }
        was_listening
    }
}

fn gesture_in_flight(runtime: DesktopRuntimeContext, window_id: StoredValue<WindowId>) -> bool {
    runtime.state.with_untracked(|desktop| {
        window_id.with_value(|id| {
            desktop
                .frame(id)
                .is_some_and(|frame| frame.gesture().is_active())
        })
    })
}

fn listen_for_gesture(
    runtime: DesktopRuntimeContext,
    window_id: StoredValue<WindowId>,
    listeners: StoredValue<GestureListeners>,
) {
    if listeners.with_value(GestureListeners::is_listening) {
        return;
    }

    let on_move = window_event_listener(ev::pointermove, move |ev| {
        runtime.dispatch_action(DesktopAction::PointerMove {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let on_up = window_event_listener(ev::pointerup, move |_| {
        listeners.update_value(|listeners| {
            listeners.remove_all();
        });
        runtime.dispatch_action(DesktopAction::PointerUp {
            window_id: window_id.get_value(),
        });
    });
    let on_cancel = window_event_listener(ev::pointercancel, move |_| {
        listeners.update_value(|listeners| {
            listeners.remove_all();
        });
        runtime.dispatch_action(DesktopAction::CancelGesture {
            window_id: window_id.get_value(),
        });
    });

    listeners.update_value(|listeners| listeners.handles = vec![on_move, on_up, on_cancel]);
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let title = catalog::window_config(&window_id).map_or("", |config| config.title);
    let id = store_value(window_id.clone());
    let listeners = store_value(GestureListeners::default());

    on_cleanup(move || {
        let was_listening = listeners
            .try_update_value(GestureListeners::remove_all)
            .unwrap_or(false);
        if was_listening {
            runtime.dispatch_action(DesktopAction::CancelGesture { window_id });
        }
    });

    let rect = Signal::derive(move || {
        state.with(|desktop| {
            id.with_value(|id| {
                desktop
                    .frame(id)
                    .map(|frame| frame.render_rect(desktop.viewport))
            })
        })
    });
    let z_index = Signal::derive(move || {
        state.with(|desktop| id.with_value(|id| desktop.manager.z_index_of(id)))
    });
    let is_active =
        Signal::derive(move || state.with(|desktop| id.with_value(|id| desktop.manager.is_active(id))));
    let is_maximized = Signal::derive(move || {
        state.with(|desktop| {
            id.with_value(|id| desktop.frame(id).is_some_and(|frame| frame.is_maximized()))
        })
    });

    let focus = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_button(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
        if gesture_in_flight(runtime, id) {
            listen_for_gesture(runtime, id, listeners);
        }
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_button(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
        if gesture_in_flight(runtime, id) {
            listen_for_gesture(runtime, id, listeners);
        }
    };
    let body = runtime
        .content
        .with_value(|content| id.with_value(|id| content.renderer(id)))
        .map_or_else(
            || view! { <p class="window-placeholder">{title}</p> }.into_view(),
            |render| render(),
        );
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
        });
    };

    view! {
        <section
            class=move || {
                format!(
                    "desktop-window{}{}",
                    if is_active.get() { " focused" } else { "" },
                    if is_maximized.get() { " maximized" } else { "" },
                )
            }
            style=move || {
                let Some(rect) = rect.get() else {
                    return "display:none;".to_string();
                };
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    z_index.get().unwrap_or_default()
                )
            }
            role="dialog"
            aria-label=title
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_drag
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-controls">
                    <button
                        class="traffic-light close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow {
                                window_id: id.get_value(),
                            });
                        }
                    />
                    <button
                        class="traffic-light minimize"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                                window_id: id.get_value(),
                            });
                        }
                    />
                    <button
                        class="traffic-light maximize"
                        aria-label=move || {
                            if is_maximized.get() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    />
                </div>
                <div class="titlebar-title">{title}</div>
            </header>
            <div class="window-body" data-window-id=id.get_value().to_string()>
                {body}
            </div>
            <Show when=move || !is_maximized.get() fallback=|| ()>
                <div class="window-resize-handle" aria-hidden="true" on:pointerdown=begin_resize />
            </Show>
        </section>
    }
}
