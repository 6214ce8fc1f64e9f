//! Export options and page geometry.

use super::LineMode;

/// Default maximum characters per wrapped line.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Fixed page canvas parameters, in PDF points (1 pt = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Uniform page margin
    pub margin: f32,

    /// Vertical distance between consecutive baselines
    pub line_height: f32,

    /// Body font size
    pub font_size: f32,
}

impl PageGeometry {
    /// A4 portrait (595 × 842 pt) with the default margin and line metrics.
    pub fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 50.0,
            line_height: 20.0,
            font_size: 12.0,
        }
    }

    /// Number of text lines that fit between the top and bottom margins.
    ///
    /// Always at least 1, so pagination advances even for degenerate
    /// geometries.
    pub fn max_lines_per_page(&self) -> usize {
        let fit = ((self.height - 2.0 * self.margin) / self.line_height).floor();
        (fit as usize).max(1)
    }

    /// Baseline y coordinate, measured from the page bottom, for the given
    /// line slot (0-based from the top of the text area).
    pub fn baseline(&self, slot: usize) -> f32 {
        self.height - self.margin - self.line_height * (slot as f32 + 1.0)
    }

    /// Position of the page-number footer, measured from the page
    /// bottom-left corner.
    pub fn footer_position(&self) -> (f32, f32) {
        (self.width - self.margin, self.margin / 2.0)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Options for exporting text content to a PDF document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// How input lines are prepared before pagination
    pub mode: LineMode,

    /// Maximum characters per wrapped line
    pub wrap_width: usize,

    /// Page canvas parameters
    pub geometry: PageGeometry,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line preparation mode.
    pub fn with_mode(mut self, mode: LineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the word-wrap width in characters.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: LineMode::default(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            geometry: PageGeometry::default(),
        }
    }
}
