//! Markdown rendering to a styled, self-contained HTML document.

mod html;
mod options;
mod theme;

pub use html::{to_html, HtmlRenderer};
pub use options::{RenderOptions, MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT};
pub use theme::Palette;
