//! PDF serialization of paginated pages.
//!
//! Pages are drawn with the builtin Helvetica Type1 font in WinAnsi encoding
//! and content streams are Flate-compressed. Characters without a WinAnsi
//! code point degrade to `?`, so a single unrenderable glyph never aborts an
//! export.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::{Error, Result};
use crate::model::Page;

use super::PageGeometry;

const FONT_NAME: &[u8] = b"F1";

/// Serialize pages into a complete PDF byte stream.
pub fn write_pdf(pages: &[Page], geometry: &PageGeometry) -> Result<Vec<u8>> {
    let mut pdf = Pdf::new();
    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let font_id = alloc();
    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (i, page) in pages.iter().enumerate() {
        let content = draw_page(page, geometry);
        let compressed = compress(&content.finish())?;
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);

        let mut obj = pdf.page(page_ids[i]);
        obj.media_box(Rect::new(0.0, 0.0, geometry.width, geometry.height))
            .parent(pages_id)
            .contents(content_ids[i]);
        obj.resources().fonts().pair(Name(FONT_NAME), font_id);
    }

    Ok(pdf.finish())
}

fn draw_page(page: &Page, geometry: &PageGeometry) -> Content {
    let mut content = Content::new();

    for (slot, line) in page.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let encoded = to_winansi(line);
        content
            .begin_text()
            .set_font(Name(FONT_NAME), geometry.font_size)
            .next_line(geometry.margin, geometry.baseline(slot))
            .show(Str(&encoded))
            .end_text();
    }

    let (x, y) = geometry.footer_position();
    let footer = to_winansi(&page.footer_label());
    content
        .begin_text()
        .set_font(Name(FONT_NAME), geometry.font_size)
        .next_line(x, y)
        .show(Str(&footer))
        .end_text();

    content
}

fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| Error::Export(format!("content stream compression failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| Error::Export(format!("content stream compression failed: {e}")))
}

/// Encode text as WinAnsi (CP1252) bytes, substituting `?` for characters
/// outside the code page.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

fn winansi_byte(c: char) -> u8 {
    match c {
        '\u{0020}'..='\u{007e}' => c as u8,
        '\u{00a0}'..='\u{00ff}' => c as u8,
        '\u{20ac}' => 0x80, // €
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85, // …
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91, // '
        '\u{2019}' => 0x92, // '
        '\u{201c}' => 0x93, // "
        '\u{201d}' => 0x94, // "
        '\u{2022}' => 0x95, // •
        '\u{2013}' => 0x96, // –
        '\u{2014}' => 0x97, // —
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99, // ™
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => {
            log::debug!("character {c:?} has no WinAnsi code point, substituting '?'");
            b'?'
        }
    }
}
