use std::collections::BTreeSet;

use crate::{
    foundation::core::{Point, Rect, Viewport},
    foundation::error::{ChiliError, ChiliResult},
    page::config::{BlockRole, PageConfig, SECTION_COUNT},
};

const SECTION_PADDING: f64 = 48.0;
const BLOCK_GAP: f64 = 24.0;
const LINE_HEIGHT: f64 = 1.2;
/// Average advance of one glyph relative to the font size.
const GLYPH_ADVANCE: f64 = 0.55;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Section { index: usize },
    Heading { section: usize },
    Text { section: usize },
}

/// Style properties written by tweens; `None` means "not overridden".
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct InlineStyle {
    pub opacity: Option<f64>,
    pub translate_y: Option<f64>,
}

impl InlineStyle {
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.translate_y.is_none()
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Layout box in page coordinates.
    pub rect: Rect,
    pub text: Option<String>,
    pub size_px: f64,
    pub animatable: bool,
    /// Widths of the wrapped text lines, top to bottom.
    pub lines: Vec<f64>,
    pub style: InlineStyle,
}

impl Element {
    pub fn opacity(&self) -> f64 {
        self.style.opacity.unwrap_or(1.0)
    }

    pub fn translate_y(&self) -> f64 {
        self.style.translate_y.unwrap_or(0.0)
    }

    pub fn line_height(&self) -> f64 {
        self.size_px * LINE_HEIGHT
    }
}

/// The laid-out page: sections stacked vertically, text blocks flowed inside them.
#[derive(Clone, Debug)]
pub struct Document {
    elements: Vec<Element>,
    sections: [ElementId; SECTION_COUNT],
    heading: ElementId,
    page_height: f64,
    click_listeners: BTreeSet<ElementId>,
}

impl Document {
    #[tracing::instrument(skip(config))]
    pub fn layout(config: &PageConfig, viewport: Viewport) -> ChiliResult<Self> {
        config.validate()?;
        viewport.validate()?;

        let avail = (viewport.width - 2.0 * SECTION_PADDING).max(1.0);
        let mut elements = Vec::new();
        let mut sections = [ElementId(0); SECTION_COUNT];
        let mut heading = None;
        let mut section_top = 0.0;

        for (index, spec) in config.sections.iter().enumerate() {
            let section_id = ElementId(elements.len() as u32);
            sections[index] = section_id;
            elements.push(Element {
                id: section_id,
                kind: ElementKind::Section { index },
                rect: Rect::ZERO,
                text: None,
                size_px: 0.0,
                animatable: false,
                lines: Vec::new(),
                style: InlineStyle::default(),
            });

            let mut y = section_top + SECTION_PADDING;
            for block in &spec.blocks {
                let lines = wrap_lines(&block.text, block.size_px, avail);
                let width = lines.iter().copied().fold(0.0, f64::max);
                let height = lines.len() as f64 * block.size_px * LINE_HEIGHT;
                let id = ElementId(elements.len() as u32);
                let kind = match block.role {
                    BlockRole::Heading => {
                        heading = Some(id);
                        ElementKind::Heading { section: index }
                    }
                    BlockRole::Body => ElementKind::Text { section: index },
                };
                elements.push(Element {
                    id,
                    kind,
                    rect: Rect::new(
                        SECTION_PADDING,
                        y,
                        SECTION_PADDING + width,
                        y + height,
                    ),
                    text: Some(block.text.clone()),
                    size_px: block.size_px,
                    animatable: block.animatable,
                    lines,
                    style: InlineStyle::default(),
                });
                y += height + BLOCK_GAP;
            }

            let content_bottom = y - BLOCK_GAP + SECTION_PADDING;
            let section_height = (content_bottom - section_top).max(viewport.height);
            elements[section_id.0 as usize].rect =
                Rect::new(0.0, section_top, viewport.width, section_top + section_height);
            section_top += section_height;
        }

        let heading =
            heading.ok_or_else(|| ChiliError::validation("page has no heading block"))?;

        tracing::debug!(
            elements = elements.len(),
            page_height = section_top,
            "document laid out"
        );

        Ok(Self {
            elements,
            sections,
            heading,
            page_height: section_top,
            click_listeners: BTreeSet::new(),
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0 as usize)
    }

    pub fn heading(&self) -> ElementId {
        self.heading
    }

    pub fn section_rect(&self, index: usize) -> Option<Rect> {
        let id = self.sections.get(index)?;
        self.get(*id).map(|e| e.rect)
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn max_scroll(&self, viewport: Viewport) -> f64 {
        (self.page_height - viewport.height).max(0.0)
    }

    /// Every element tagged animatable, in document order.
    pub fn query_animatable(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.animatable)
            .map(|e| e.id)
            .collect()
    }

    /// Topmost text element under `point` (page coordinates).
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .filter(|e| !matches!(e.kind, ElementKind::Section { .. }))
            .find(|e| e.rect.contains(point))
            .map(|e| e.id)
    }

    /// Attach a click listener to `id`. Attaching to a missing element, or attaching twice,
    /// is a programming error.
    pub fn add_click_listener(&mut self, id: ElementId) -> ChiliResult<()> {
        if self.get(id).is_none() {
            return Err(ChiliError::lifecycle(format!(
                "cannot attach click listener: element {} does not exist",
                id.0
            )));
        }
        if !self.click_listeners.insert(id) {
            return Err(ChiliError::lifecycle(format!(
                "click listener already attached to element {}",
                id.0
            )));
        }
        Ok(())
    }

    /// Detach the click listener on `id`. Returns whether one was attached.
    pub fn remove_click_listener(&mut self, id: ElementId) -> bool {
        self.click_listeners.remove(&id)
    }

    pub fn has_click_listener(&self, id: ElementId) -> bool {
        self.click_listeners.contains(&id)
    }

    pub fn listener_count(&self) -> usize {
        self.click_listeners.len()
    }
}

/// Greedy word wrap using an average glyph advance. Returns line widths.
fn wrap_lines(text: &str, size_px: f64, max_width: f64) -> Vec<f64> {
    let advance = size_px * GLYPH_ADVANCE;
    let mut lines = Vec::new();
    let mut current = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        let candidate = if current == 0 { len } else { current + 1 + len };
        if current > 0 && candidate as f64 * advance > max_width {
            lines.push(current as f64 * advance);
            current = len;
        } else {
            current = candidate;
        }
    }
    if current > 0 || lines.is_empty() {
        lines.push(current as f64 * advance);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/page/document.rs"]
mod tests;
