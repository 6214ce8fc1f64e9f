//! Line preparation: turning raw text into a flat, wrapped line sequence.

use regex::Regex;

/// Line preparation strategy feeding the pagination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Wrap the input as-is, no markdown interpretation
    Plain,

    /// Strip markdown syntax down to printable text markers
    #[default]
    MarkdownStripped,
}

/// Prepare the printable line sequence for pagination.
pub fn prepare_lines(text: &str, mode: LineMode, wrap_width: usize) -> Vec<String> {
    match mode {
        LineMode::Plain => prepare_plain(text, wrap_width),
        LineMode::MarkdownStripped => prepare_stripped(text, wrap_width),
    }
}

fn prepare_plain(text: &str, wrap_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for line in text.split('\n') {
        lines.extend(wrap_text(line, wrap_width));
    }
    lines
}

fn prepare_stripped(text: &str, wrap_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let trimmed = raw.trim();
        if let Some(rest) = trimmed.strip_prefix("# ") {
            lines.push(format!("■ {}", rest.trim()));
            lines.push(String::new());
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            lines.push(format!("▪ {}", rest.trim()));
            lines.push(String::new());
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            lines.push(format!("• {}", rest.trim()));
            lines.push(String::new());
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            lines.push(format!("  • {}", strip_inline(rest.trim())));
        } else if let Some(rest) = trimmed.strip_prefix("> ") {
            lines.push(format!("  \" {}", strip_inline(rest.trim())));
        } else if !trimmed.is_empty() {
            lines.extend(wrap_text(&strip_inline(trimmed), wrap_width));
            lines.push(String::new());
        } else {
            lines.push(String::new());
        }
    }
    lines
}

/// Remove markdown syntax, keeping bare text: emphasis markers are deleted,
/// inline code keeps bracket markers, links collapse to their label. Lossy by
/// design; this feeds a printable-text fallback, not a rendering engine.
pub fn strip_inline(text: &str) -> String {
    let bold = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    let stripped = bold.replace_all(text, "$1");

    let italic = Regex::new(r"\*(.+?)\*").unwrap();
    let stripped = italic.replace_all(&stripped, "$1");

    let code = Regex::new(r"`(.+?)`").unwrap();
    let stripped = code.replace_all(&stripped, "[$1]");

    let link = Regex::new(r"\[(.+?)\]\(.+?\)").unwrap();
    link.replace_all(&stripped, "$1").into_owned()
}

/// Greedy word wrap. Breaks only at spaces and normalizes runs of
/// whitespace; a single word longer than `max_length` is emitted unsplit.
pub fn wrap_text(text: &str, max_length: usize) -> Vec<String> {
    if text.chars().count() <= max_length {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_length {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
