//! Integration tests for the PDF export pipeline.

use markview::export::{paginate, prepare_lines, to_pages, to_pdf, wrap_text};
use markview::{Error, ExportOptions, LineMode, PageGeometry};

#[test]
fn test_wrap_invariants() {
    let text = "The quick brown fox jumps over the lazy dog again and again and again";
    for width in [5, 10, 20, 40, 80] {
        let lines = wrap_text(text, width);
        for line in &lines {
            let fits = line.chars().count() <= width;
            let single_long_word = !line.contains(' ') && line.chars().count() > width;
            assert!(fits || single_long_word, "bad line {line:?} at width {width}");
        }
        let rebuilt = lines.join(" ");
        assert_eq!(rebuilt, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}

#[test]
fn test_pagination_partition_invariants() {
    let lines: Vec<String> = (0..173).map(|i| format!("line {i}")).collect();
    let geometry = PageGeometry::a4();
    let pages = paginate(&lines, &geometry);

    let total: usize = pages.iter().map(|p| p.line_count()).sum();
    assert_eq!(total, lines.len());

    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.number, i as u32 + 1);
        assert!(page.line_count() <= geometry.max_lines_per_page());
    }
}

#[test]
fn test_500_plain_lines_page_counts() {
    let text = (0..500).map(|i| format!("row {i}")).collect::<Vec<_>>().join("\n");

    // A4 defaults fit floor((842 - 100) / 20) = 37 lines per page.
    let pages = to_pages(&text, &ExportOptions::new().with_mode(LineMode::Plain)).unwrap();
    assert_eq!(PageGeometry::a4().max_lines_per_page(), 37);
    assert_eq!(pages.len(), 14);

    // A tighter line height fits 39, reproducing ceil(500 / 39) = 13.
    let mut geometry = PageGeometry::a4();
    geometry.line_height = 19.0;
    let options = ExportOptions::new()
        .with_mode(LineMode::Plain)
        .with_geometry(geometry);
    let pages = to_pages(&text, &options).unwrap();
    assert_eq!(geometry.max_lines_per_page(), 39);
    assert_eq!(pages.len(), 13);
    assert_eq!(pages.last().unwrap().line_count(), 500 - 12 * 39);
}

#[test]
fn test_empty_input_is_a_hard_error() {
    for text in ["", "  ", "\n\t \n"] {
        match to_pdf(text, &ExportOptions::default()) {
            Err(Error::EmptyContent) => {}
            other => panic!("expected EmptyContent, got {other:?}"),
        }
    }
}

#[test]
fn test_markdown_stripped_document() {
    let text = "# Report\n\nIntro with **bold** words.\n\n- first\n- second\n\n> note";
    let lines = prepare_lines(text, LineMode::MarkdownStripped, 80);

    assert_eq!(lines[0], "\u{25a0} Report");
    assert!(lines.contains(&"  \u{2022} first".to_string()));
    assert!(lines.contains(&"  \u{2022} second".to_string()));
    assert!(lines.contains(&"  \" note".to_string()));
    assert!(lines.contains(&"Intro with bold words.".to_string()));
}

#[test]
fn test_pdf_bytes_are_well_formed_enough() {
    let text = "# Title\n\nBody text.";
    let bytes = to_pdf(text, &ExportOptions::default()).unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
    let tail = &bytes[bytes.len().saturating_sub(64)..];
    let tail_str = String::from_utf8_lossy(tail);
    assert!(tail_str.contains("%%EOF"));
}

#[test]
fn test_long_document_gets_numbered_pages() {
    let text = (0..200)
        .map(|i| format!("paragraph number {i} with a little bit of content"))
        .collect::<Vec<_>>()
        .join("\n\n");
    let pages = to_pages(&text, &ExportOptions::default()).unwrap();

    assert!(pages.len() > 1);
    let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
    let expected: Vec<u32> = (1..=pages.len() as u32).collect();
    assert_eq!(numbers, expected);
    assert_eq!(pages.last().unwrap().footer_label(), format!("Page {}", pages.len()));
}
