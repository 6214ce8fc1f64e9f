//! # markview
//!
//! Rendering and export core for markdown file viewers.
//!
//! The library turns raw markdown text into a styled, self-contained HTML
//! document for display in an embedded web view, and exports markdown or
//! plain text as a paginated PDF. Both transformations are pure synchronous
//! functions; UI concerns (file pickers, navigation, web-view hosting) stay
//! with the caller, as does threading — every call is independent and
//! re-entrant.
//!
//! ## Quick start
//!
//! ```no_run
//! use markview::{ExportOptions, RenderOptions};
//!
//! fn main() -> markview::Result<()> {
//!     let markdown = std::fs::read_to_string("README.md")?;
//!
//!     // Render for display
//!     let html = markview::render_markdown(&markdown, &RenderOptions::default());
//!
//!     // Export to PDF
//!     let pdf = markview::export_markdown_to_pdf(&markdown, &ExportOptions::default())?;
//!     std::fs::write("README.pdf", pdf)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design notes
//!
//! - The renderer is a deliberate regex substitution cascade, not a
//!   CommonMark parser, and it does **not** escape raw HTML found in the
//!   source: input is trusted local content.
//! - The PDF exporter lays plain text lines onto fixed-size pages. It is a
//!   printable fallback, not a layout engine, and prefers producing a
//!   degraded document over failing; only blank input is rejected.
//! - Settings and the recent-file list persist through an injected
//!   [`KeyValueStore`], never through globals.

pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod store;

pub use error::{Error, Result};
pub use export::{ExportOptions, LineMode, PageGeometry};
pub use model::{Page, RecentFile};
pub use render::{HtmlRenderer, Palette, RenderOptions};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, RecentFiles, Settings};

use std::path::Path;

/// Render markdown text into a complete HTML document.
pub fn render_markdown(markdown: &str, options: &RenderOptions) -> String {
    render::to_html(markdown, options)
}

/// Read a markdown file and render it into a complete HTML document.
pub fn render_file<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let markdown = std::fs::read_to_string(path)?;
    Ok(render::to_html(&markdown, options))
}

/// Export markdown content to a PDF byte stream, stripping markdown syntax
/// down to printable markers.
pub fn export_markdown_to_pdf(markdown: &str, options: &ExportOptions) -> Result<Vec<u8>> {
    let options = options.clone().with_mode(LineMode::MarkdownStripped);
    export::to_pdf(markdown, &options)
}

/// Export plain text content to a PDF byte stream, no markdown handling.
pub fn export_text_to_pdf(text: &str, options: &ExportOptions) -> Result<Vec<u8>> {
    let options = options.clone().with_mode(LineMode::Plain);
    export::to_pdf(text, &options)
}

/// Read a file and export it to PDF, picking the line mode from the
/// extension: `.md`/`.markdown` are stripped, everything else is plain.
pub fn export_file_to_pdf<P: AsRef<Path>>(path: P, options: &ExportOptions) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mode = match path.extension().and_then(|e| e.to_str()) {
        Some("md") | Some("markdown") => LineMode::MarkdownStripped,
        _ => LineMode::Plain,
    };
    export::to_pdf(&text, &options.clone().with_mode(mode))
}

/// Builder for rendering and exporting markdown content.
///
/// # Example
///
/// ```no_run
/// use markview::Markview;
///
/// let loaded = Markview::new().dark_mode(true).font_size(16.0).load("notes.md")?;
/// let html = loaded.to_html();
/// loaded.write_pdf("notes.pdf")?;
/// # Ok::<(), markview::Error>(())
/// ```
pub struct Markview {
    render_options: RenderOptions,
    export_options: ExportOptions,
}

impl Markview {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
            export_options: ExportOptions::default(),
        }
    }

    /// Use the dark color palette.
    pub fn dark_mode(mut self, dark: bool) -> Self {
        self.render_options = self.render_options.with_dark_mode(dark);
        self
    }

    /// Set the display font size in points (clamped to 10–32).
    pub fn font_size(mut self, pt: f32) -> Self {
        self.render_options = self.render_options.with_font_size(pt);
        self
    }

    /// Set the export line preparation mode.
    pub fn line_mode(mut self, mode: LineMode) -> Self {
        self.export_options = self.export_options.with_mode(mode);
        self
    }

    /// Set the export word-wrap width in characters.
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.export_options = self.export_options.with_wrap_width(width);
        self
    }

    /// Set the export page geometry.
    pub fn page_geometry(mut self, geometry: PageGeometry) -> Self {
        self.export_options = self.export_options.with_geometry(geometry);
        self
    }

    /// Load content from a file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<Loaded> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.load_str(content))
    }

    /// Use already-read content.
    pub fn load_str(self, content: impl Into<String>) -> Loaded {
        Loaded {
            content: content.into(),
            render_options: self.render_options,
            export_options: self.export_options,
        }
    }
}

impl Default for Markview {
    fn default() -> Self {
        Self::new()
    }
}

/// Content loaded through [`Markview`], ready to render or export.
pub struct Loaded {
    content: String,
    render_options: RenderOptions,
    export_options: ExportOptions,
}

impl Loaded {
    /// Render to a complete HTML document.
    pub fn to_html(&self) -> String {
        render::to_html(&self.content, &self.render_options)
    }

    /// Export to a PDF byte stream.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        export::to_pdf(&self.content, &self.export_options)
    }

    /// Export to a PDF file at `path`.
    pub fn write_pdf<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_pdf()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// The raw loaded content.
    pub fn content(&self) -> &str {
        &self.content
    }
}
