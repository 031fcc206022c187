use crate::{
    animation::ease::Ease,
    animation::tween::{Tween, TweenEvent},
    foundation::core::{Palette, Point, Viewport},
    foundation::error::{ChiliError, ChiliResult},
    page::marker::GrowMarker,
    page::theme::PageTheme,
};

/// The grow ends this far past the farthest viewport corner, so the disk covers the viewport
/// while the tween is still running.
const COVER_OVERSHOOT: f64 = 1.5;

/// Durations, curves, and palettes of the reveal transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealTimings {
    pub color_s: f64,
    pub grow_s: f64,
    /// Lower bound on the marker scale at the end of the grow. The actual end scale is
    /// whichever is larger: this, or what it takes to cover the viewport from the click.
    pub grow_scale: f64,
    pub ease: Ease,
    pub dormant: Palette,
    pub revealed: Palette,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            color_s: 1.2,
            grow_s: 2.0,
            grow_scale: 1000.0,
            ease: Ease::InOutCubic,
            dormant: Palette::DORMANT,
            revealed: Palette::REVEALED,
        }
    }
}

impl RevealTimings {
    pub fn validate(&self) -> ChiliResult<()> {
        for (name, v) in [("color_s", self.color_s), ("grow_s", self.grow_s)] {
            if !v.is_finite() || v < 0.0 {
                return Err(ChiliError::validation(format!(
                    "reveal {name} must be finite and >= 0"
                )));
            }
        }
        if !self.grow_scale.is_finite() || self.grow_scale <= 0.0 {
            return Err(ChiliError::validation(
                "reveal grow_scale must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Owns the revealed flag and the transition that accompanies each toggle.
///
/// A click while a previous grow is still running cancels that grow (the marker is cleared
/// immediately) before the new transition starts. The color tween always starts from the
/// palette currently on screen, so an interrupted fade turns around without a jump.
#[derive(Debug)]
pub struct RevealController {
    timings: RevealTimings,
    revealed: bool,
    clicks: u64,
    color: Option<Tween<Palette>>,
    grow: Option<Tween<f64>>,
}

impl RevealController {
    pub fn new(timings: RevealTimings) -> ChiliResult<Self> {
        timings.validate()?;
        Ok(Self {
            timings,
            revealed: false,
            clicks: 0,
            color: None,
            grow: None,
        })
    }

    pub fn timings(&self) -> &RevealTimings {
        &self.timings
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn is_animating(&self) -> bool {
        self.color.is_some() || self.grow.is_some()
    }

    pub fn is_growing(&self) -> bool {
        self.grow.is_some()
    }

    /// Toggle the revealed flag and start the matching transition. Returns the new flag.
    #[tracing::instrument(skip(self, viewport, theme, marker), fields(revealed = self.revealed))]
    pub fn on_heading_click(
        &mut self,
        at: Point,
        viewport: Viewport,
        theme: &PageTheme,
        marker: &mut GrowMarker,
    ) -> ChiliResult<bool> {
        if self.grow.take().is_some() {
            tracing::debug!("cancelling in-flight grow");
            marker.clear_props();
        }

        let from = theme.palette();
        let t = &self.timings;
        if self.revealed {
            let mut color = Tween::new(from, t.dormant, t.color_s, t.ease)?;
            color.play();
            self.color = Some(color);
        } else {
            marker.position_at(at);
            marker.set_scale(0.0);

            let mut color = Tween::new(from, t.revealed, t.color_s, t.ease)?;
            let end = (marker.cover_scale(viewport) * COVER_OVERSHOOT).max(t.grow_scale);
            tracing::debug!(end, "grow target scale");
            let mut grow = Tween::new(0.0, end, t.grow_s, t.ease)?;
            color.play();
            grow.play();
            self.color = Some(color);
            self.grow = Some(grow);
        }

        self.revealed = !self.revealed;
        self.clicks += 1;
        tracing::info!(revealed = self.revealed, clicks = self.clicks, "reveal toggled");
        Ok(self.revealed)
    }

    /// Advance running tweens and write their values to the theme and the marker.
    pub fn tick(&mut self, dt_s: f64, theme: &mut PageTheme, marker: &mut GrowMarker) {
        if let Some(color) = self.color.as_mut() {
            let done = color.advance(dt_s).is_some();
            theme.set_theme(color.value());
            if done {
                self.color = None;
            }
        }

        if let Some(grow) = self.grow.as_mut() {
            let event = grow.advance(dt_s);
            marker.set_scale(grow.value());
            if event == Some(TweenEvent::Complete) {
                marker.clear_props();
                self.grow = None;
                tracing::debug!("grow complete, marker cleared");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controllers/reveal.rs"]
mod tests;
