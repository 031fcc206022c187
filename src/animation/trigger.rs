use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::core::Rect,
    foundation::error::{ChiliError, ChiliResult},
};

/// Pairing of an anchor on the element with an anchor on the viewport, e.g. `"top 80%"`:
/// the trigger point is reached when the element's top edge meets the line 80% down the
/// viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TriggerPosition {
    /// Anchor on the element as a fraction of its height (`top` = 0, `bottom` = 1).
    pub element: f64,
    /// Anchor on the viewport as a fraction of its height.
    pub viewport: f64,
}

impl TriggerPosition {
    pub const TOP_80: Self = Self {
        element: 0.0,
        viewport: 0.8,
    };
    pub const BOTTOM_TOP: Self = Self {
        element: 1.0,
        viewport: 0.0,
    };

    /// Scroll offset at which this position is reached for an element laid out at `element`
    /// (page coordinates).
    pub fn scroll_offset(self, element: Rect, viewport_height: f64) -> f64 {
        element.y0 + element.height() * self.element - viewport_height * self.viewport
    }
}

fn parse_anchor(token: &str) -> ChiliResult<f64> {
    match token {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        other => {
            let pct = other.strip_suffix('%').ok_or_else(|| {
                ChiliError::validation(format!("unknown trigger anchor \"{other}\""))
            })?;
            let v: f64 = pct.parse().map_err(|_| {
                ChiliError::validation(format!("invalid trigger percentage \"{other}\""))
            })?;
            if !v.is_finite() {
                return Err(ChiliError::validation("trigger percentage must be finite"));
            }
            Ok(v / 100.0)
        }
    }
}

impl FromStr for TriggerPosition {
    type Err = ChiliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ChiliError::validation(
                "trigger position must be \"<element> <viewport>\"",
            ));
        };
        Ok(Self {
            element: parse_anchor(element)?,
            viewport: parse_anchor(viewport)?,
        })
    }
}

impl TryFrom<String> for TriggerPosition {
    type Error = ChiliError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TriggerPosition> for String {
    fn from(p: TriggerPosition) -> Self {
        p.to_string()
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn anchor(v: f64) -> String {
            if v == 0.0 {
                "top".to_owned()
            } else if v == 0.5 {
                "center".to_owned()
            } else if v == 1.0 {
                "bottom".to_owned()
            } else {
                format!("{}%", v * 100.0)
            }
        }
        write!(f, "{} {}", anchor(self.element), anchor(self.viewport))
    }
}

/// What a trigger does to its tween on one of the four boundary crossings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for ToggleAction {
    type Err = ChiliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => {
                return Err(ChiliError::validation(format!(
                    "unknown toggle action \"{other}\""
                )));
            }
        })
    }
}

impl ToggleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reverse => "reverse",
            Self::Restart => "restart",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::None => "none",
        }
    }
}

/// Boundary crossing reported by [`ScrollTrigger::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerCallback {
    /// Scrolled down past the start.
    Enter,
    /// Scrolled down past the end.
    Leave,
    /// Scrolled up past the end.
    EnterBack,
    /// Scrolled up past the start.
    LeaveBack,
}

/// Actions for `onEnter onLeave onEnterBack onLeaveBack`, in that order. Serialized as the
/// four words, e.g. `"play none none reverse"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub const PLAY_NONE_NONE_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    pub fn action_for(self, cb: TriggerCallback) -> ToggleAction {
        match cb {
            TriggerCallback::Enter => self.on_enter,
            TriggerCallback::Leave => self.on_leave,
            TriggerCallback::EnterBack => self.on_enter_back,
            TriggerCallback::LeaveBack => self.on_leave_back,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = ChiliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let [enter, leave, enter_back, leave_back] = words.as_slice() else {
            return Err(ChiliError::validation(
                "toggle actions must name exactly four actions",
            ));
        };
        Ok(Self {
            on_enter: enter.parse()?,
            on_leave: leave.parse()?,
            on_enter_back: enter_back.parse()?,
            on_leave_back: leave_back.parse()?,
        })
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = ChiliError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ToggleActions> for String {
    fn from(a: ToggleActions) -> Self {
        a.to_string()
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.as_str(),
            self.on_leave.as_str(),
            self.on_enter_back.as_str(),
            self.on_leave_back.as_str()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

/// Scroll-position trigger over the page range `[start, end]`.
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    start: f64,
    end: f64,
    actions: ToggleActions,
    zone: Option<Zone>,
}

impl ScrollTrigger {
    /// Build a trigger for an element laid out at `element` (page coordinates).
    pub fn for_element(
        element: Rect,
        viewport_height: f64,
        start: TriggerPosition,
        end: TriggerPosition,
        actions: ToggleActions,
    ) -> Self {
        let start = start.scroll_offset(element, viewport_height);
        let end = end.scroll_offset(element, viewport_height).max(start);
        Self {
            start,
            end,
            actions,
            zone: None,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn actions(&self) -> ToggleActions {
        self.actions
    }

    pub fn is_active(&self) -> bool {
        self.zone == Some(Zone::Active)
    }

    fn zone_of(&self, scroll_y: f64) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y <= self.end {
            Zone::Active
        } else {
            Zone::After
        }
    }

    /// Feed the current scroll offset; returns the crossings since the previous call in the
    /// order they happened. The first call behaves as if the page started above the trigger.
    pub fn update(&mut self, scroll_y: f64) -> Vec<TriggerCallback> {
        use TriggerCallback::*;

        let prev = self.zone.unwrap_or(Zone::Before);
        let next = self.zone_of(scroll_y);
        self.zone = Some(next);

        match (prev, next) {
            (Zone::Before, Zone::Active) => vec![Enter],
            (Zone::Before, Zone::After) => vec![Enter, Leave],
            (Zone::Active, Zone::After) => vec![Leave],
            (Zone::After, Zone::Active) => vec![EnterBack],
            (Zone::After, Zone::Before) => vec![EnterBack, LeaveBack],
            (Zone::Active, Zone::Before) => vec![LeaveBack],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/trigger.rs"]
mod tests;
