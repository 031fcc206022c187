use crate::foundation::core::Palette;

/// The page-level text/background style.
///
/// This is the one shared mutable style resource on the page. Only the reveal transition
/// writes it; everything else reads [`PageTheme::palette`].
#[derive(Clone, Debug)]
pub struct PageTheme {
    palette: Palette,
    writes: u64,
}

impl PageTheme {
    pub fn new(palette: Palette) -> Self {
        Self { palette, writes: 0 }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn set_theme(&mut self, palette: Palette) {
        self.palette = palette;
        self.writes += 1;
    }

    /// Number of [`PageTheme::set_theme`] calls so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Default for PageTheme {
    fn default() -> Self {
        Self::new(Palette::DORMANT)
    }
}
