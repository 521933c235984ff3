//! Desktop window management runtime: window catalog, geometry and gesture state, the window
//! manager, persisted geometry, and the Leptos shell components that drive them.

pub mod catalog;
pub mod components;
pub mod content;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime;
mod runtime_context;
pub mod window;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use content::{WindowContentRegistry, WindowContentRenderer};
pub use model::*;
pub use persistence::GeometryStore;
pub use reducer::{reduce_desktop, DesktopAction, DesktopState, ReducerError, RuntimeEffect};
pub use runtime::DesktopRuntime;
pub use window::{WindowFrame, WindowGesture};
pub use window_manager::WindowManager;
