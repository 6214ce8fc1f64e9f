//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page of the paginated document: an ordered run of wrapped text
/// lines plus the 1-indexed page number stamped into the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Lines placed on this page, top to bottom
    pub lines: Vec<String>,
}

impl Page {
    /// Create an empty page with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    /// Append a line to the page.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Footer label drawn at the bottom-right margin.
    pub fn footer_label(&self) -> String {
        format!("Page {}", self.number)
    }

    /// Number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the page holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(3);
        assert_eq!(page.number, 3);
        assert!(page.is_empty());
        assert_eq!(page.footer_label(), "Page 3");
    }

    #[test]
    fn test_push_line() {
        let mut page = Page::new(1);
        page.push_line("first");
        page.push_line(String::from("second"));
        assert_eq!(page.line_count(), 2);
        assert_eq!(page.lines, vec!["first", "second"]);
    }
}
