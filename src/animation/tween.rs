use crate::{
    animation::ease::Ease,
    foundation::core::{Palette, Rgba8, Vec2},
    foundation::error::{ChiliError, ChiliResult},
};

/// Interpolation contract for tweened value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

impl Lerp for Palette {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            foreground: Rgba8::lerp(&a.foreground, &b.foreground, t),
            background: Rgba8::lerp(&a.background, &b.background, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Boundary reached during [`Tween::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenEvent {
    /// Forward playback reached progress 1.
    Complete,
    /// Reverse playback reached progress 0.
    ReverseComplete,
}

/// A single-property tween from `from` to `to`.
///
/// The playhead is kept as normalized progress so that reversing mid-flight retraces the same
/// curve. A paused tween keeps its playhead; [`Tween::value`] is always well defined.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_s: f64,
    ease: Ease,
    progress: f64,
    direction: Direction,
    playing: bool,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Create a paused tween at progress 0.
    pub fn new(from: T, to: T, duration_s: f64, ease: Ease) -> ChiliResult<Self> {
        if !duration_s.is_finite() || duration_s < 0.0 {
            return Err(ChiliError::animation(
                "tween duration must be finite and >= 0",
            ));
        }
        Ok(Self {
            from,
            to,
            duration_s,
            ease,
            progress: 0.0,
            direction: Direction::Forward,
            playing: false,
        })
    }

    pub fn from_value(&self) -> &T {
        &self.from
    }

    pub fn to_value(&self) -> &T {
        &self.to
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Play forward from the current playhead.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = self.progress < 1.0;
    }

    /// Play backward from the current playhead.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = self.progress > 0.0;
    }

    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.play();
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Continue in the current direction.
    pub fn resume(&mut self) {
        match self.direction {
            Direction::Forward => self.play(),
            Direction::Reverse => self.reverse(),
        }
    }

    /// Jump to `progress` (clamped to `[0, 1]`) without changing the play state.
    pub fn seek(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Jump to the end and stop.
    pub fn complete(&mut self) {
        self.progress = 1.0;
        self.direction = Direction::Forward;
        self.playing = false;
    }

    /// Move the playhead by `dt_s` seconds. Returns the boundary reached by this call, if any.
    pub fn advance(&mut self, dt_s: f64) -> Option<TweenEvent> {
        if !self.playing {
            return None;
        }
        let step = if self.duration_s > 0.0 {
            dt_s.max(0.0) / self.duration_s
        } else {
            1.0
        };

        match self.direction {
            Direction::Forward => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress >= 1.0 {
                    self.playing = false;
                    return Some(TweenEvent::Complete);
                }
            }
            Direction::Reverse => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress <= 0.0 {
                    self.playing = false;
                    return Some(TweenEvent::ReverseComplete);
                }
            }
        }
        None
    }

    /// Eased value at the current playhead.
    pub fn value(&self) -> T {
        T::lerp(&self.from, &self.to, self.ease.apply(self.progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
