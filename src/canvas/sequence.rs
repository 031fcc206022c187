use crate::{
    foundation::core::{Rect, Size},
    page::config::CanvasDetails,
};

/// A mounted decorative canvas playing its image sequence on an endless linear loop.
///
/// Purely a function of its [`CanvasDetails`] and the time since it was mounted.
#[derive(Clone, Debug)]
pub struct SectionCanvas {
    section: usize,
    details: CanvasDetails,
    mounted_at_s: f64,
}

impl SectionCanvas {
    pub fn mount(section: usize, details: CanvasDetails, now_s: f64) -> Self {
        Self {
            section,
            details,
            mounted_at_s: now_s,
        }
    }

    pub fn section(&self) -> usize {
        self.section
    }

    pub fn details(&self) -> &CanvasDetails {
        &self.details
    }

    /// Image index on screen at `now_s`.
    pub fn frame_index(&self, now_s: f64) -> u32 {
        let d = &self.details;
        if d.num_images <= 1 {
            return d.start_index;
        }
        let elapsed = (now_s - self.mounted_at_s).max(0.0);
        let t = (elapsed % d.duration) / d.duration;
        let span = f64::from(d.num_images - 1);
        d.start_index + (t * span).round() as u32
    }

    /// Box inside `section` (page coordinates).
    pub fn rect_in(&self, section: Rect) -> Rect {
        let d = &self.details;
        let x = section.x0 + section.width() * d.left / 100.0;
        let y = section.y0 + section.height() * d.top / 100.0;
        Rect::from_origin_size((x, y), Size::new(d.size, d.size))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/sequence.rs"]
mod tests;
