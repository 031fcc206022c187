use crate::foundation::core::{Point, Rgba8, Viewport};

/// Inline overrides the reveal transition applies to the marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct MarkerStyle {
    pub origin: Option<Point>,
    pub scale: Option<f64>,
}

/// Fixed-position disk that grows from the click point to cover the viewport.
///
/// Without overrides it has scale 0 and is invisible.
#[derive(Clone, Debug)]
pub struct GrowMarker {
    base_diameter: f64,
    color: Rgba8,
    style: MarkerStyle,
}

impl GrowMarker {
    pub const BASE_DIAMETER: f64 = 5.0;

    pub fn new(base_diameter: f64, color: Rgba8) -> Self {
        Self {
            base_diameter,
            color,
            style: MarkerStyle::default(),
        }
    }

    pub fn base_diameter(&self) -> f64 {
        self.base_diameter
    }

    pub fn color(&self) -> Rgba8 {
        self.color
    }

    pub fn style(&self) -> MarkerStyle {
        self.style
    }

    pub fn origin(&self) -> Option<Point> {
        self.style.origin
    }

    pub fn scale(&self) -> f64 {
        self.style.scale.unwrap_or(0.0)
    }

    pub fn radius(&self) -> f64 {
        self.base_diameter * 0.5 * self.scale()
    }

    pub fn position_at(&mut self, point: Point) {
        self.style.origin = Some(point);
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.style.scale = Some(scale.max(0.0));
    }

    /// Drop every override: scale back to 0, no origin.
    pub fn clear_props(&mut self) {
        self.style = MarkerStyle::default();
    }

    pub fn has_overrides(&self) -> bool {
        self.style != MarkerStyle::default()
    }

    pub fn is_visible(&self) -> bool {
        self.style.origin.is_some() && self.radius() > 0.0
    }

    /// Whether the disk covers every corner of `viewport`.
    pub fn covers(&self, viewport: Viewport) -> bool {
        let Some(c) = self.style.origin else {
            return false;
        };
        let r = self.radius();
        corners(viewport).iter().all(|p| p.distance(c) <= r)
    }

    /// Scale at which the disk reaches the farthest corner of `viewport` from its origin.
    /// Without an origin, the scale whose radius spans the viewport diagonal.
    pub fn cover_scale(&self, viewport: Viewport) -> f64 {
        let half = self.base_diameter * 0.5;
        if half <= 0.0 {
            return 0.0;
        }
        let reach = match self.style.origin {
            Some(c) => corners(viewport)
                .iter()
                .map(|p| p.distance(c))
                .fold(0.0, f64::max),
            None => viewport.diagonal(),
        };
        reach / half
    }
}

fn corners(viewport: Viewport) -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(viewport.width, 0.0),
        Point::new(0.0, viewport.height),
        Point::new(viewport.width, viewport.height),
    ]
}

impl Default for GrowMarker {
    fn default() -> Self {
        Self::new(Self::BASE_DIAMETER, Rgba8::CHILI)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/marker.rs"]
mod tests;
