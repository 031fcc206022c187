use image::{Rgba, RgbaImage};

use crate::{
    assets::sequence::ImageSequenceStore,
    foundation::core::{Rect, Rgba8},
    foundation::error::{ChiliError, ChiliResult},
    render::frame::{CanvasState, FrameState, MarkerState, TextState},
};

/// Glyph bar height relative to the font size.
const GLYPH_HEIGHT: f64 = 0.7;

/// One rendered frame as straight-alpha RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct CpuRendererOpts {
    /// Alpha of the placeholder fill drawn when a canvas frame has no image.
    pub placeholder_alpha: f64,
}

impl Default for CpuRendererOpts {
    fn default() -> Self {
        Self {
            placeholder_alpha: 0.25,
        }
    }
}

/// Software rasterizer for [`FrameState`].
///
/// Paint order: page background, text, canvases by z-index, then the marker disk.
#[derive(Clone, Debug, Default)]
pub struct CpuRenderer {
    assets: ImageSequenceStore,
    opts: CpuRendererOpts,
}

impl CpuRenderer {
    pub fn new(assets: ImageSequenceStore, opts: CpuRendererOpts) -> Self {
        Self { assets, opts }
    }

    pub fn assets(&self) -> &ImageSequenceStore {
        &self.assets
    }

    pub fn render(&self, frame: &FrameState) -> ChiliResult<FrameRGBA> {
        frame.viewport.validate()?;
        let (width, height) = frame.viewport.pixel_size();
        if u64::from(width) * u64::from(height) > 64 * 1024 * 1024 {
            return Err(ChiliError::validation("viewport too large to rasterize"));
        }

        let mut img = RgbaImage::from_pixel(width, height, Rgba(frame.palette.background.to_array()));

        for text in frame.visible_texts() {
            draw_text(&mut img, text, frame.palette.foreground);
        }
        for canvas in &frame.canvases {
            self.draw_canvas(&mut img, canvas, frame.palette.foreground);
        }
        if let Some(marker) = &frame.marker {
            draw_marker(&mut img, marker);
        }

        Ok(FrameRGBA {
            width,
            height,
            data: img.into_raw(),
        })
    }

    fn draw_canvas(&self, img: &mut RgbaImage, canvas: &CanvasState, fg: Rgba8) {
        let Some((x0, y0, x1, y1)) = pixel_bounds(img, canvas.rect) else {
            return;
        };

        let Some(src) = self.assets.get(canvas.frame_index) else {
            let fill = fg.with_opacity(self.opts.placeholder_alpha);
            fill_rect(img, canvas.rect, fill);
            return;
        };

        // Nearest-neighbor scale into the canvas box.
        let (sw, sh) = src.dimensions();
        let rw = canvas.rect.width().max(1.0);
        let rh = canvas.rect.height().max(1.0);
        for y in y0..y1 {
            let v = ((f64::from(y) + 0.5 - canvas.rect.y0) / rh * f64::from(sh)).floor();
            let sy = (v.max(0.0) as u32).min(sh.saturating_sub(1));
            for x in x0..x1 {
                let u = ((f64::from(x) + 0.5 - canvas.rect.x0) / rw * f64::from(sw)).floor();
                let sx = (u.max(0.0) as u32).min(sw.saturating_sub(1));
                let p = src.get_pixel(sx, sy).0;
                blend(img, x, y, Rgba8::rgba(p[0], p[1], p[2], p[3]));
            }
        }
    }
}

fn draw_text(img: &mut RgbaImage, text: &TextState, fg: Rgba8) {
    let color = fg.with_opacity(text.opacity);
    if color.a == 0 {
        return;
    }
    let line_height = if text.lines.is_empty() {
        0.0
    } else {
        text.rect.height() / text.lines.len() as f64
    };
    let bar = text.size_px * GLYPH_HEIGHT;
    for (i, width) in text.lines.iter().enumerate() {
        let top = text.rect.y0 + line_height * i as f64 + (line_height - bar) * 0.5;
        fill_rect(
            img,
            Rect::new(text.rect.x0, top, text.rect.x0 + width, top + bar),
            color,
        );
    }
}

fn draw_marker(img: &mut RgbaImage, marker: &MarkerState) {
    if marker.covers_viewport && marker.color.a == 255 {
        let fill = Rgba(marker.color.to_array());
        img.pixels_mut().for_each(|p| *p = fill);
        return;
    }
    let c = marker.center;
    let r = marker.radius;
    let bounds = Rect::new(c.x - r, c.y - r, c.x + r, c.y + r);
    let Some((x0, y0, x1, y1)) = pixel_bounds(img, bounds) else {
        return;
    };
    let r2 = r * r;
    for y in y0..y1 {
        let dy = f64::from(y) + 0.5 - c.y;
        for x in x0..x1 {
            let dx = f64::from(x) + 0.5 - c.x;
            if dx * dx + dy * dy <= r2 {
                blend(img, x, y, marker.color);
            }
        }
    }
}

/// Pixel range `[x0, x1) x [y0, y1)` covered by `rect`, clipped to the image.
fn pixel_bounds(img: &RgbaImage, rect: Rect) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = img.dimensions();
    let x0 = rect.x0.max(0.0).round();
    let y0 = rect.y0.max(0.0).round();
    let x1 = rect.x1.min(f64::from(w)).round();
    let y1 = rect.y1.min(f64::from(h)).round();
    if !(x0 < x1 && y0 < y1) {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba8) {
    if color.a == 0 {
        return;
    }
    let Some((x0, y0, x1, y1)) = pixel_bounds(img, rect) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            blend(img, x, y, color);
        }
    }
}

/// Source-over onto an opaque destination.
fn blend(img: &mut RgbaImage, x: u32, y: u32, src: Rgba8) {
    let dst = img.get_pixel_mut(x, y);
    if src.a == 255 {
        *dst = Rgba(src.to_array());
        return;
    }
    let a = f64::from(src.a) / 255.0;
    let mix = |s: u8, d: u8| (f64::from(s) * a + f64::from(d) * (1.0 - a)).round() as u8;
    dst.0 = [
        mix(src.r, dst.0[0]),
        mix(src.g, dst.0[1]),
        mix(src.b, dst.0[2]),
        255,
    ];
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
