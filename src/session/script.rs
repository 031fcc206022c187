use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Fps, Viewport},
    foundation::error::{ChiliError, ChiliResult},
};

/// A recorded interaction: viewport, frame rate, length, and timed input events.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_fps")]
    pub fps: Fps,
    pub duration_s: f64,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

fn default_fps() -> Fps {
    Fps { num: 30, den: 1 }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    pub at_s: f64,
    #[serde(flatten)]
    pub action: ScriptAction,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptAction {
    /// Pointer click at viewport coordinates.
    Click { x: f64, y: f64 },
    /// Click the center of the heading, wherever it currently is.
    ClickHeading,
    /// Wheel input; positive scrolls down.
    Wheel { delta: f64 },
    Unmount,
}

impl Script {
    pub fn validate(&self) -> ChiliResult<()> {
        self.viewport.validate()?;
        self.fps.validate()?;
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(ChiliError::validation(
                "script duration_s must be finite and > 0",
            ));
        }
        for (i, ev) in self.events.iter().enumerate() {
            if !ev.at_s.is_finite() || ev.at_s < 0.0 {
                return Err(ChiliError::validation(format!(
                    "event {i}: at_s must be finite and >= 0"
                )));
            }
            let finite = match ev.action {
                ScriptAction::Click { x, y } => x.is_finite() && y.is_finite(),
                ScriptAction::Wheel { delta } => delta.is_finite(),
                ScriptAction::ClickHeading | ScriptAction::Unmount => true,
            };
            if !finite {
                return Err(ChiliError::validation(format!(
                    "event {i}: coordinates must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Total frames to play, at least one.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_ceil(self.duration_s).max(1)
    }

    /// Events in playback order; ties keep their listed order.
    pub fn sorted_events(&self) -> Vec<ScriptEvent> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| a.at_s.total_cmp(&b.at_s));
        events
    }

    pub fn from_json_str(s: &str) -> ChiliResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> ChiliResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
