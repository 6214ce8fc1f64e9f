//! Plain-text PDF export: line preparation, pagination, serialization.
//!
//! The exporter prefers "always produce *a* PDF" over failing fast: degraded
//! units (unmappable glyphs, over-length single words) are recovered locally.
//! The one hard precondition is non-blank input, surfaced as
//! [`Error::EmptyContent`](crate::Error::EmptyContent).

mod lines;
mod options;
mod paginate;
mod pdf;

pub use lines::{prepare_lines, strip_inline, wrap_text, LineMode};
pub use options::{ExportOptions, PageGeometry, DEFAULT_WRAP_WIDTH};
pub use paginate::paginate;
pub use pdf::write_pdf;

use crate::error::{Error, Result};
use crate::model::Page;

/// Export text content to a PDF byte stream.
///
/// Blank (empty or whitespace-only) input is rejected with
/// [`Error::EmptyContent`]; every accepted input yields a document with at
/// least one page.
pub fn to_pdf(text: &str, options: &ExportOptions) -> Result<Vec<u8>> {
    let pages = to_pages(text, options)?;
    write_pdf(&pages, &options.geometry)
}

/// Paginate text without serializing it, for inspection or a custom
/// realization of the page sequence.
pub fn to_pages(text: &str, options: &ExportOptions) -> Result<Vec<Page>> {
    if text.trim().is_empty() {
        return Err(Error::EmptyContent);
    }

    let lines = prepare_lines(text, options.mode, options.wrap_width);
    Ok(paginate(&lines, &options.geometry))
}
