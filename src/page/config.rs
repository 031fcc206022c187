use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ChiliError, ChiliResult};

/// Number of vertically stacked page sections.
pub const SECTION_COUNT: usize = 3;

/// Static page content: title, three sections of text, and each section's canvas list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub sections: Vec<SectionSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionSpec {
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
    #[serde(default)]
    pub canvases: Vec<CanvasDetails>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockRole {
    #[default]
    Body,
    /// The click target that toggles the reveal. Exactly one per page.
    Heading,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default = "default_size_px")]
    pub size_px: f64,
    /// Tagged for the scroll fade-in.
    #[serde(default)]
    pub animatable: bool,
    #[serde(default)]
    pub role: BlockRole,
}

fn default_size_px() -> f64 {
    18.0
}

/// One decorative image-sequence canvas.
///
/// `top`/`left` are percentages of the owning section box; `size` is the square edge in px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDetails {
    pub start_index: u32,
    pub num_images: u32,
    pub duration: f64,
    pub size: f64,
    pub top: f64,
    pub left: f64,
    #[serde(default)]
    pub z_index: i32,
}

impl CanvasDetails {
    pub fn validate(&self) -> ChiliResult<()> {
        if self.num_images == 0 {
            return Err(ChiliError::validation("canvas numImages must be >= 1"));
        }
        if self.start_index.checked_add(self.num_images - 1).is_none() {
            return Err(ChiliError::validation("canvas frame range overflows u32"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ChiliError::validation(
                "canvas duration must be finite and > 0",
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChiliError::validation("canvas size must be finite and > 0"));
        }
        if !(self.top.is_finite() && self.left.is_finite()) {
            return Err(ChiliError::validation("canvas top/left must be finite"));
        }
        Ok(())
    }
}

impl PageConfig {
    pub fn validate(&self) -> ChiliResult<()> {
        if self.sections.len() != SECTION_COUNT {
            return Err(ChiliError::validation(format!(
                "page must have exactly {SECTION_COUNT} sections, found {}",
                self.sections.len()
            )));
        }

        let headings = self
            .sections
            .iter()
            .flat_map(|s| &s.blocks)
            .filter(|b| b.role == BlockRole::Heading)
            .count();
        if headings != 1 {
            return Err(ChiliError::validation(format!(
                "page must have exactly one heading block, found {headings}"
            )));
        }

        for (si, section) in self.sections.iter().enumerate() {
            for block in &section.blocks {
                if !block.size_px.is_finite() || block.size_px <= 0.0 {
                    return Err(ChiliError::validation(format!(
                        "section {si}: text size_px must be finite and > 0"
                    )));
                }
            }
            for (ci, canvas) in section.canvases.iter().enumerate() {
                canvas.validate().map_err(|e| {
                    ChiliError::validation(format!("section {si} canvas {ci}: {e}"))
                })?;
            }
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> ChiliResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> ChiliResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read page config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Per-section canvas counts, in section order.
    pub fn canvas_counts(&self) -> [usize; SECTION_COUNT] {
        let mut out = [0; SECTION_COUNT];
        for (slot, section) in out.iter_mut().zip(&self.sections) {
            *slot = section.canvases.len();
        }
        out
    }
}

fn canvas(start_index: u32, size: f64, top: f64, left: f64, z_index: i32) -> CanvasDetails {
    CanvasDetails {
        start_index,
        num_images: 150,
        duration: 3.0,
        size,
        top,
        left,
        z_index,
    }
}

fn body(text: &str, animatable: bool) -> TextBlock {
    TextBlock {
        text: text.to_owned(),
        size_px: 18.0,
        animatable,
        role: BlockRole::Body,
    }
}

fn title(text: &str, size_px: f64) -> TextBlock {
    TextBlock {
        text: text.to_owned(),
        size_px,
        animatable: true,
        role: BlockRole::Body,
    }
}

impl Default for PageConfig {
    /// The ChiliStation landing page.
    fn default() -> Self {
        Self {
            title: "ChiliStation".to_owned(),
            sections: vec![
                SectionSpec {
                    blocks: vec![
                        body("ChiliStation", false),
                        title(
                            "At ChiliStation, we build immersive digital experiences for brands with a purpose.",
                            32.0,
                        ),
                        body(
                            "We are a team of designers, developers, and strategists who are passionate about creating digital experiences that are both beautiful and functional.",
                            true,
                        ),
                        body("Scroll", false),
                        TextBlock {
                            text: "ChiliStation".to_owned(),
                            size_px: 140.0,
                            animatable: false,
                            role: BlockRole::Heading,
                        },
                    ],
                    canvases: vec![
                        canvas(0, 200.0, 10.0, 25.0, 1),
                        canvas(150, 200.0, 50.0, 70.0, 2),
                        canvas(300, 300.0, 20.0, 55.0, 1),
                        canvas(450, 150.0, 60.0, 10.0, 3),
                        canvas(600, 250.0, 5.0, 80.0, 2),
                        canvas(750, 120.0, 75.0, 40.0, 1),
                    ],
                },
                SectionSpec {
                    blocks: vec![
                        title("01 - WHAT WE DO", 14.0),
                        title(
                            "We aim to elevate digital production in the advertising space, bringing your ideas to life.",
                            44.0,
                        ),
                        body(
                            "As a contemporary studio, we use cutting-edge design practices and the latest technologies to deliver current digital work.",
                            true,
                        ),
                        body(
                            "Our commitment to innovation and quality means every project we take on is crafted to inspire.",
                            true,
                        ),
                    ],
                    canvases: vec![
                        canvas(900, 300.0, 15.0, 60.0, 1),
                        canvas(1050, 180.0, 65.0, 20.0, 2),
                        canvas(1200, 220.0, 40.0, 85.0, 1),
                        canvas(1350, 140.0, 80.0, 50.0, 3),
                    ],
                },
                SectionSpec {
                    blocks: vec![
                        title("02 - HOW WE WORK", 14.0),
                        title(
                            "From first sketch to final frame, we move fast and keep the heat on.",
                            44.0,
                        ),
                        body(
                            "Small senior teams, short feedback loops, and work that ships.",
                            true,
                        ),
                    ],
                    canvases: vec![
                        canvas(1500, 260.0, 20.0, 15.0, 2),
                        canvas(1650, 200.0, 55.0, 65.0, 1),
                        canvas(1800, 160.0, 75.0, 35.0, 3),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
