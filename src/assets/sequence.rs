use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::ChiliResult;

/// Decoded canvas frames, keyed by image index.
///
/// Frames live at `<root>/<index>.png`. Missing files are skipped so a partial asset directory
/// still renders (the renderer draws placeholders); files that exist but fail to decode are
/// errors.
#[derive(Clone, Debug, Default)]
pub struct ImageSequenceStore {
    root: Option<PathBuf>,
    frames: HashMap<u32, Arc<image::RgbaImage>>,
}

impl ImageSequenceStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn frame_path(root: &Path, index: u32) -> PathBuf {
        root.join(format!("{index}.png"))
    }

    #[tracing::instrument(skip(indices))]
    pub fn prepare(root: &Path, indices: impl IntoIterator<Item = u32>) -> ChiliResult<Self> {
        let wanted: BTreeSet<u32> = indices.into_iter().collect();
        let mut frames = HashMap::with_capacity(wanted.len());
        let mut missing = 0usize;

        for index in wanted {
            let path = Self::frame_path(root, index);
            if !path.is_file() {
                missing += 1;
                continue;
            }
            let img = image::open(&path)
                .with_context(|| format!("decode canvas frame '{}'", path.display()))?
                .to_rgba8();
            frames.insert(index, Arc::new(img));
        }

        if missing > 0 {
            tracing::warn!(missing, root = %root.display(), "canvas frames not found");
        }

        Ok(Self {
            root: Some(root.to_path_buf()),
            frames,
        })
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn get(&self, index: u32) -> Option<&image::RgbaImage> {
        self.frames.get(&index).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sequence.rs"]
mod tests;
