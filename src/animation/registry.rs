//! Process-wide animation plugin registration.
//!
//! Scroll-triggered playback is a capability that is enabled once per process before any page
//! mounts. Enabling is not a resource: nothing is torn down.

use std::sync::OnceLock;

static SCROLL_TRIGGER: OnceLock<()> = OnceLock::new();

/// Enable scroll-triggered playback. Returns `true` only for the call that performed the
/// registration; later calls are no-ops.
pub fn register_plugins() -> bool {
    let mut first = false;
    SCROLL_TRIGGER.get_or_init(|| {
        tracing::debug!("scroll trigger plugin registered");
        first = true;
    });
    first
}

pub fn scroll_trigger_enabled() -> bool {
    SCROLL_TRIGGER.get().is_some()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
