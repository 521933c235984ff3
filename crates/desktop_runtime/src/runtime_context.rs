//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the long-lived [`DesktopRuntime`] and mirrors its state into a signal for the
//! views. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    content::WindowContentRegistry,
    reducer::{DesktopAction, DesktopState},
    runtime::DesktopRuntime,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Runtime that reduces actions and executes their side effects.
    pub runtime: StoredValue<DesktopRuntime>,
    /// Reactive mirror of the runtime's desktop state.
    pub state: RwSignal<DesktopState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Hosted content for window bodies.
    pub content: StoredValue<WindowContentRegistry>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_viewport_tracking(runtime: DesktopRuntimeContext) {
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime
            .runtime
            .with_value(|desktop| desktop.host().desktop_viewport());
        runtime.dispatch_action(DesktopAction::SetViewport { viewport });
    });
    on_cleanup(move || resize_listener.remove());
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Hosted content per window id; unregistered windows show their title.
    #[prop(optional)]
    window_content: WindowContentRegistry,
    children: Children,
) -> impl IntoView {
    let desktop = DesktopRuntime::new(host_services);
    let state = create_rw_signal(desktop.state().clone());
    let runtime = store_value(desktop);

    let dispatch = Callback::new(move |action: DesktopAction| {
        runtime.update_value(|desktop| desktop.dispatch(action));
        let next = runtime.with_value(|desktop| desktop.state().clone());
        if state.with_untracked(|current| current != &next) {
            state.set(next);
        }
    });

    let context = DesktopRuntimeContext {
        runtime,
        state,
        dispatch,
        content: store_value(window_content),
    };
    provide_context(context);
    install_viewport_tracking(context);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
