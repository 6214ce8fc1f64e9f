//! Benchmarks for markdown rendering and PDF export.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic markdown documents of varying size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use markview::export::{prepare_lines, LineMode};
use markview::{render_markdown, ExportOptions, RenderOptions};

/// Creates a synthetic markdown document with the given number of sections.
fn create_test_markdown(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("# Section {i}\n\n"));
        content.push_str(&format!(
            "Paragraph with **bold {i}**, *italic*, `code` and a \
             [link](https://example.com/{i}) plus enough plain prose to make \
             the wrap pass do real work on every single line of the input.\n\n"
        ));
        content.push_str("- first item\n- second item\n- third item\n\n");
        content.push_str("> a quoted remark\n\n");
    }
    content
}

fn bench_render_html(c: &mut Criterion) {
    let options = RenderOptions::default();
    let small = create_test_markdown(10);
    let large = create_test_markdown(200);

    c.bench_function("render_html_10_sections", |b| {
        b.iter(|| render_markdown(black_box(&small), &options))
    });
    c.bench_function("render_html_200_sections", |b| {
        b.iter(|| render_markdown(black_box(&large), &options))
    });
}

fn bench_prepare_lines(c: &mut Criterion) {
    let document = create_test_markdown(100);

    c.bench_function("prepare_lines_stripped", |b| {
        b.iter(|| prepare_lines(black_box(&document), LineMode::MarkdownStripped, 80))
    });
    c.bench_function("prepare_lines_plain", |b| {
        b.iter(|| prepare_lines(black_box(&document), LineMode::Plain, 80))
    });
}

fn bench_export_pdf(c: &mut Criterion) {
    let document = create_test_markdown(50);
    let options = ExportOptions::default();

    c.bench_function("export_pdf_50_sections", |b| {
        b.iter(|| markview::export::to_pdf(black_box(&document), &options).unwrap())
    });
}

criterion_group!(
    benches,
    bench_render_html,
    bench_prepare_lines,
    bench_export_pdf
);
criterion_main!(benches);
