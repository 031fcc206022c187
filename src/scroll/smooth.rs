use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::error::{ChiliError, ChiliResult};

#[derive(Debug, Default)]
struct HostState {
    attached: Cell<bool>,
    attaches: Cell<u32>,
    releases: Cell<u32>,
}

/// The document's scroll surface. At most one smoothing adapter may be attached at a time.
///
/// Cloning shares the same surface.
#[derive(Clone, Debug, Default)]
pub struct ScrollHost {
    state: Rc<HostState>,
}

impl ScrollHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.state.attached.get()
    }

    pub fn attach_count(&self) -> u32 {
        self.state.attaches.get()
    }

    pub fn release_count(&self) -> u32 {
        self.state.releases.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothingOpts {
    /// Fraction of the remaining distance covered per reference frame.
    pub lerp: f64,
    pub reference_fps: f64,
    /// Distance under which the offset snaps onto the target.
    pub snap_px: f64,
    pub wheel_multiplier: f64,
}

impl Default for SmoothingOpts {
    fn default() -> Self {
        Self {
            lerp: 0.1,
            reference_fps: 60.0,
            snap_px: 0.5,
            wheel_multiplier: 1.0,
        }
    }
}

impl SmoothingOpts {
    pub fn validate(&self) -> ChiliResult<()> {
        if !(self.lerp > 0.0 && self.lerp <= 1.0) {
            return Err(ChiliError::validation("smoothing lerp must be in (0, 1]"));
        }
        if !(self.reference_fps.is_finite() && self.reference_fps > 0.0) {
            return Err(ChiliError::validation(
                "smoothing reference_fps must be finite and > 0",
            ));
        }
        if !(self.snap_px.is_finite() && self.snap_px >= 0.0) {
            return Err(ChiliError::validation(
                "smoothing snap_px must be finite and >= 0",
            ));
        }
        if !self.wheel_multiplier.is_finite() {
            return Err(ChiliError::validation(
                "smoothing wheel_multiplier must be finite",
            ));
        }
        Ok(())
    }
}

/// Inertial scrolling attached to a [`ScrollHost`].
///
/// Wheel input moves a target offset; [`SmoothScroll::tick`] eases the rendered offset toward
/// it. The host is released exactly once, by [`SmoothScroll::release`] or on drop.
#[derive(Debug)]
pub struct SmoothScroll {
    host: Option<ScrollHost>,
    opts: SmoothingOpts,
    current: f64,
    target: f64,
    limit: f64,
}

impl SmoothScroll {
    pub fn attach(host: &ScrollHost, limit: f64, opts: SmoothingOpts) -> ChiliResult<Self> {
        opts.validate()?;
        if host.is_attached() {
            return Err(ChiliError::lifecycle(
                "a smoothing adapter is already attached to this scroll host",
            ));
        }
        host.state.attached.set(true);
        host.state.attaches.set(host.state.attaches.get() + 1);
        tracing::debug!(limit, "smooth scroll attached");

        Ok(Self {
            host: Some(host.clone()),
            opts,
            current: 0.0,
            target: 0.0,
            limit: limit.max(0.0),
        })
    }

    /// Detach from the host. Safe to call any number of times.
    pub fn release(&mut self) {
        if let Some(host) = self.host.take() {
            host.state.attached.set(false);
            host.state.releases.set(host.state.releases.get() + 1);
            tracing::debug!("smooth scroll released");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// Rendered scroll offset.
    pub fn offset(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Wheel input; positive scrolls down. Ignored once released.
    pub fn wheel(&mut self, delta: f64) {
        if !self.is_attached() || !delta.is_finite() {
            return;
        }
        self.target = (self.target + delta * self.opts.wheel_multiplier).clamp(0.0, self.limit);
    }

    pub fn scroll_to(&mut self, y: f64, immediate: bool) {
        if !y.is_finite() {
            return;
        }
        self.target = y.clamp(0.0, self.limit);
        if immediate {
            self.current = self.target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance by `dt_s` seconds.
    pub fn tick(&mut self, dt_s: f64) {
        if self.is_settled() {
            return;
        }
        let frames = dt_s.max(0.0) * self.opts.reference_fps;
        let factor = 1.0 - (1.0 - self.opts.lerp).powf(frames);
        self.current += (self.target - self.current) * factor;
        if (self.target - self.current).abs() < self.opts.snap_px {
            self.current = self.target;
        }
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
