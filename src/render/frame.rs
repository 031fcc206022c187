use crate::{
    foundation::core::{Palette, Point, Rect, Rgba8, Viewport},
    page::document::ElementId,
};

/// Drawable state of one frame. All geometry is in viewport coordinates.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameState {
    pub time_s: f64,
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub revealed: bool,
    pub palette: Palette,
    pub texts: Vec<TextState>,
    /// Sorted by `z_index`, painter's order.
    pub canvases: Vec<CanvasState>,
    pub marker: Option<MarkerState>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct TextState {
    pub id: ElementId,
    pub heading: bool,
    pub rect: Rect,
    pub size_px: f64,
    pub lines: Vec<f64>,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct CanvasState {
    pub section: usize,
    pub rect: Rect,
    pub frame_index: u32,
    pub z_index: i32,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct MarkerState {
    pub center: Point,
    pub radius: f64,
    pub color: Rgba8,
    /// The disk reaches every viewport corner.
    pub covers_viewport: bool,
}

impl FrameState {
    /// Texts whose box intersects the viewport.
    pub fn visible_texts(&self) -> impl Iterator<Item = &TextState> {
        let vp = self.viewport.rect();
        self.texts
            .iter()
            .filter(move |t| t.opacity > 0.0 && t.rect.intersect(vp).area() > 0.0)
    }
}
