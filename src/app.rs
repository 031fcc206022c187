use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::registry,
    canvas::sequence::SectionCanvas,
    controllers::reveal::{RevealController, RevealTimings},
    controllers::scroll_fade::{FadeInSpec, ScrollFadeController},
    foundation::core::{Point, Vec2, Viewport},
    foundation::error::{ChiliError, ChiliResult},
    page::config::{PageConfig, SECTION_COUNT},
    page::document::{Document, ElementKind},
    page::marker::GrowMarker,
    page::theme::PageTheme,
    render::frame::{CanvasState, FrameState, MarkerState, TextState},
    scroll::smooth::{ScrollHost, SmoothScroll, SmoothingOpts},
};

/// Tunables for a mounted [`App`]. Missing JSON fields keep their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppOpts {
    pub reveal: RevealTimings,
    pub fade: FadeInSpec,
    pub smoothing: SmoothingOpts,
}

impl AppOpts {
    pub fn validate(&self) -> ChiliResult<()> {
        self.reveal.validate()?;
        self.smoothing.validate()?;
        if !self.fade.duration_s.is_finite() || self.fade.duration_s < 0.0 {
            return Err(ChiliError::validation(
                "fade duration_s must be finite and >= 0",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> ChiliResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn load(path: &Path) -> ChiliResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read app options '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

/// The page's root component.
///
/// Mounting attaches scroll smoothing, the heading click listener, and the scroll fade-ins;
/// [`App::unmount`] (or dropping the app) releases them. Input is delivered through
/// [`App::click`] and [`App::wheel`], and time advances only through [`App::tick`].
#[derive(Debug)]
pub struct App {
    viewport: Viewport,
    config: PageConfig,
    doc: Document,
    theme: PageTheme,
    marker: GrowMarker,
    reveal: RevealController,
    fade: ScrollFadeController,
    smooth: Option<SmoothScroll>,
    canvases: Vec<SectionCanvas>,
    last_scroll: f64,
    clock_s: f64,
}

impl App {
    #[tracing::instrument(skip(config, host, opts))]
    pub fn mount(
        config: PageConfig,
        viewport: Viewport,
        host: &ScrollHost,
        opts: AppOpts,
    ) -> ChiliResult<Self> {
        registry::register_plugins();

        let mut doc = Document::layout(&config, viewport)?;
        let reveal = RevealController::new(opts.reveal)?;
        let smooth = SmoothScroll::attach(host, doc.max_scroll(viewport), opts.smoothing)?;
        doc.add_click_listener(doc.heading())?;

        let mut fade = ScrollFadeController::new(opts.fade);
        fade.register_animations(&mut doc, viewport)?;

        tracing::info!(title = %config.title, "page mounted");
        Ok(Self {
            viewport,
            config,
            doc,
            theme: PageTheme::new(opts.reveal.dormant),
            marker: GrowMarker::default(),
            reveal,
            fade,
            smooth: Some(smooth),
            canvases: Vec::new(),
            last_scroll: 0.0,
            clock_s: 0.0,
        })
    }

    /// Detach the click listener and release scroll smoothing. Returns `false` when already
    /// unmounted.
    pub fn unmount(&mut self) -> bool {
        let Some(mut smooth) = self.smooth.take() else {
            return false;
        };
        self.last_scroll = smooth.offset();
        smooth.release();
        self.doc.remove_click_listener(self.doc.heading());
        tracing::info!("page unmounted");
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.smooth.is_some()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn theme(&self) -> &PageTheme {
        &self.theme
    }

    pub fn marker(&self) -> &GrowMarker {
        &self.marker
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn fade(&self) -> &ScrollFadeController {
        &self.fade
    }

    pub fn revealed(&self) -> bool {
        self.reveal.revealed()
    }

    pub fn clock_s(&self) -> f64 {
        self.clock_s
    }

    pub fn scroll_y(&self) -> f64 {
        self.smooth
            .as_ref()
            .map_or(self.last_scroll, SmoothScroll::offset)
    }

    /// Heading center in viewport coordinates at the current scroll offset.
    pub fn heading_center(&self) -> ChiliResult<Point> {
        let heading = self
            .doc
            .get(self.doc.heading())
            .ok_or_else(|| ChiliError::lifecycle("heading element missing"))?;
        let c = heading.rect.center();
        Ok(Point::new(c.x, c.y - self.scroll_y()))
    }

    /// Pointer click at viewport coordinates. Returns whether the heading handled it; clicks
    /// outside the viewport never land.
    pub fn click(&mut self, at: Point) -> ChiliResult<bool> {
        let heading = self.doc.heading();
        if !self.doc.has_click_listener(heading) || !self.viewport.rect().contains(at) {
            return Ok(false);
        }
        let page_point = Point::new(at.x, at.y + self.scroll_y());
        if self.doc.hit_test(page_point) != Some(heading) {
            return Ok(false);
        }

        self.reveal
            .on_heading_click(at, self.viewport, &self.theme, &mut self.marker)?;
        self.sync_canvases();
        Ok(true)
    }

    pub fn click_heading(&mut self) -> ChiliResult<bool> {
        let at = self.heading_center()?;
        self.click(at)
    }

    pub fn wheel(&mut self, delta: f64) {
        if let Some(smooth) = self.smooth.as_mut() {
            smooth.wheel(delta);
        }
    }

    /// Jump straight to `y` without smoothing.
    pub fn scroll_to(&mut self, y: f64) {
        if let Some(smooth) = self.smooth.as_mut() {
            smooth.scroll_to(y, true);
        }
    }

    /// Advance the page by `dt_s` seconds. Does nothing once unmounted.
    pub fn tick(&mut self, dt_s: f64) {
        let Some(smooth) = self.smooth.as_mut() else {
            return;
        };
        smooth.tick(dt_s);
        let scroll = smooth.offset();

        self.fade.update(scroll, dt_s, &mut self.doc);
        self.reveal.tick(dt_s, &mut self.theme, &mut self.marker);
        self.clock_s += dt_s;
    }

    /// Canvases exist exactly while revealed; mounting stamps their loop start.
    fn sync_canvases(&mut self) {
        if !self.reveal.revealed() {
            self.canvases.clear();
            return;
        }
        if !self.canvases.is_empty() {
            return;
        }
        let now = self.clock_s;
        for (index, section) in self.config.sections.iter().enumerate() {
            self.canvases.extend(
                section
                    .canvases
                    .iter()
                    .map(|details| SectionCanvas::mount(index, *details, now)),
            );
        }
        tracing::debug!(count = self.canvases.len(), "canvases mounted");
    }

    pub fn rendered_canvas_counts(&self) -> [usize; SECTION_COUNT] {
        let mut out = [0; SECTION_COUNT];
        for canvas in &self.canvases {
            if let Some(slot) = out.get_mut(canvas.section()) {
                *slot += 1;
            }
        }
        out
    }

    /// Everything needed to draw the current frame, in viewport coordinates.
    pub fn snapshot(&self) -> FrameState {
        let scroll = self.scroll_y();

        let texts = self
            .doc
            .elements()
            .iter()
            .filter(|e| !matches!(e.kind, ElementKind::Section { .. }))
            .map(|e| TextState {
                id: e.id,
                heading: matches!(e.kind, ElementKind::Heading { .. }),
                rect: e.rect + Vec2::new(0.0, e.translate_y() - scroll),
                size_px: e.size_px,
                lines: e.lines.clone(),
                opacity: e.opacity(),
            })
            .collect();

        let mut canvases: Vec<CanvasState> = self
            .canvases
            .iter()
            .filter_map(|c| {
                let section = self.doc.section_rect(c.section())?;
                Some(CanvasState {
                    section: c.section(),
                    rect: c.rect_in(section) - Vec2::new(0.0, scroll),
                    frame_index: c.frame_index(self.clock_s),
                    z_index: c.details().z_index,
                })
            })
            .collect();
        canvases.sort_by_key(|c| c.z_index);

        let marker = self
            .marker
            .origin()
            .filter(|_| self.marker.is_visible())
            .map(|center| MarkerState {
                center,
                radius: self.marker.radius(),
                color: self.marker.color(),
                covers_viewport: self.marker.covers(self.viewport),
            });

        FrameState {
            time_s: self.clock_s,
            viewport: self.viewport,
            scroll_y: scroll,
            revealed: self.reveal.revealed(),
            palette: self.theme.palette(),
            texts,
            canvases,
            marker,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
