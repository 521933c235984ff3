//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::collections::VecDeque;

use leptos::logging;

use crate::{
    host::DesktopHostContext,
    reducer::{reduce_desktop, DesktopState, RuntimeEffect},
};

/// Drains `effects` in emission order.
///
/// Follow-up actions returned by the host are reduced immediately and their effects are appended
/// to the back of the same queue.
pub(crate) fn drain(host: &DesktopHostContext, state: &mut DesktopState, effects: Vec<RuntimeEffect>) {
    let mut queue = VecDeque::from(effects);
    while let Some(effect) = queue.pop_front() {
        let Some(follow_up) = host.run_runtime_effect(state, effect) else {
            continue;
        };
        match reduce_desktop(state, follow_up) {
            Ok(more) => queue.extend(more),
            Err(err) => logging::warn!("desktop reducer error during effect drain: {err}"),
        }
    }
}
