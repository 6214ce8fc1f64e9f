//! Markdown to HTML conversion.
//!
//! This is deliberately a small regex substitution cascade, not a CommonMark
//! parser: no nested lists, no tables, no fenced code blocks. Each rule is a
//! single global pass over the text, applied in a fixed order so a later rule
//! never corrupts the output of an earlier one (bold must run before italic,
//! list wrapping runs last over the already-substituted string).
//!
//! Raw HTML in the source passes through unescaped. The input is trusted
//! local content; callers embedding untrusted text must sanitize it first.

use regex::Regex;

use super::{Palette, RenderOptions};

/// Convert markdown text into a complete, self-contained HTML document.
///
/// Total over all inputs: an empty string yields a valid document with an
/// empty body.
pub fn to_html(markdown: &str, options: &RenderOptions) -> String {
    HtmlRenderer::new(*options).render(markdown)
}

/// Markdown renderer with precompiled substitution rules.
///
/// Stateless between calls; a single instance can serve any number of
/// concurrent renders.
pub struct HtmlRenderer {
    options: RenderOptions,
    headers: Vec<(Regex, String)>,
    bold: Regex,
    italic: Regex,
    code: Regex,
    link: Regex,
    blockquote: Regex,
    dash_item: Regex,
    star_item: Regex,
    list_run: Regex,
}

impl HtmlRenderer {
    /// Create a renderer for the given options.
    pub fn new(options: RenderOptions) -> Self {
        let headers = (1..=6)
            .map(|level| {
                let pattern = format!("(?m)^{} (.+)$", "#".repeat(level));
                let replacement = format!("<h{level}>$1</h{level}>");
                (Regex::new(&pattern).unwrap(), replacement)
            })
            .collect();

        Self {
            options,
            headers,
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic: Regex::new(r"\*(.+?)\*").unwrap(),
            code: Regex::new(r"`(.+?)`").unwrap(),
            link: Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap(),
            blockquote: Regex::new(r"(?m)^> (.+)$").unwrap(),
            dash_item: Regex::new(r"(?m)^- (.+)$").unwrap(),
            star_item: Regex::new(r"(?m)^\* (.+)$").unwrap(),
            list_run: Regex::new(r"<li>.*?</li>(?:(?:<br>)*<li>.*?</li>)*").unwrap(),
        }
    }

    /// Render markdown into a complete HTML document.
    pub fn render(&self, markdown: &str) -> String {
        let body = self.convert_body(markdown);
        self.wrap_document(&body)
    }

    fn convert_body(&self, markdown: &str) -> String {
        let mut html = markdown.to_string();

        // Levels are anchored to exact `#` counts, so passes 1→6 never
        // overlap.
        for (pattern, replacement) in &self.headers {
            html = pattern.replace_all(&html, replacement.as_str()).into_owned();
        }

        // Bold consumes `**` pairs before the italic pass sees them.
        html = self.bold.replace_all(&html, "<strong>$1</strong>").into_owned();
        html = self.italic.replace_all(&html, "<em>$1</em>").into_owned();
        html = self.code.replace_all(&html, "<code>$1</code>").into_owned();
        html = self
            .link
            .replace_all(&html, r#"<a href="$2">$1</a>"#)
            .into_owned();
        html = self
            .blockquote
            .replace_all(&html, "<blockquote>$1</blockquote>")
            .into_owned();
        html = self.dash_item.replace_all(&html, "<li>$1</li>").into_owned();
        html = self.star_item.replace_all(&html, "<li>$1</li>").into_owned();

        let html = html.replace('\n', "<br>");

        // Post-pass: each maximal run of list items, separated only by the
        // <br> that replaced their line breaks, gets a single <ul>.
        self.list_run.replace_all(&html, "<ul>$0</ul>").into_owned()
    }

    fn wrap_document(&self, content: &str) -> String {
        let palette = Palette::for_mode(self.options.dark_mode);
        let font_size = self.options.font_size_pt;
        let code_size = (font_size * 0.9 * 100.0).round() / 100.0;

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
body {{
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background-color: {bg};
    color: {text};
    padding: 20px;
    line-height: 1.6;
    font-size: {font_size}px;
    margin: 0;
}}
h1, h2, h3, h4, h5, h6 {{
    margin-top: 1.5em;
    margin-bottom: 0.5em;
}}
h1 {{
    font-size: 2em;
    border-bottom: 1px solid {border};
    padding-bottom: 0.3em;
}}
h2 {{ font-size: 1.5em; }}
h3 {{ font-size: 1.25em; }}
h4 {{ font-size: 1.1em; }}
h5 {{ font-size: 1em; }}
h6 {{ font-size: 0.9em; }}
pre {{
    background: {code_bg};
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
    font-family: 'Courier New', monospace;
    font-size: {code_size}px;
}}
code {{
    background: {code_bg};
    padding: 2px 4px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
    font-size: {code_size}px;
}}
a {{
    color: {link};
    text-decoration: none;
}}
a:hover {{
    text-decoration: underline;
}}
blockquote {{
    border-left: 4px solid {border};
    padding-left: 16px;
    margin-left: 0;
    color: {quote};
    font-style: italic;
}}
ul {{
    padding-left: 20px;
}}
li {{
    margin-bottom: 4px;
}}
strong {{
    font-weight: bold;
}}
em {{
    font-style: italic;
}}
img {{
    max-width: 100%;
    height: auto;
}}
</style>
</head>
<body>
{content}
</body>
</html>"#,
            bg = palette.background,
            text = palette.text,
            code_bg = palette.code_background,
            link = palette.link,
            border = palette.border,
            quote = palette.quote_text,
            font_size = font_size,
            code_size = code_size,
            content = content,
        )
    }
}
