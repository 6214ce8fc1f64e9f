//! Rendering options.

/// Smallest accepted base font size, in points.
pub const MIN_FONT_SIZE_PT: f32 = 10.0;

/// Largest accepted base font size, in points.
pub const MAX_FONT_SIZE_PT: f32 = 32.0;

const DEFAULT_FONT_SIZE_PT: f32 = 14.0;

/// Options for rendering markdown to a styled HTML document.
///
/// Constructed per render call; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Use the dark color palette
    pub dark_mode: bool,

    /// Base font size in points, kept within 10–32 (fractional accepted)
    pub font_size_pt: f32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the dark color palette.
    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    /// Set the base font size, clamped to the accepted range.
    pub fn with_font_size(mut self, pt: f32) -> Self {
        self.font_size_pt = pt.clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
        }
    }
}
