//! Color palettes for the embedded stylesheet.

/// Colors used by the embedded stylesheet, keyed by dark/light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: &'static str,
    /// Body text
    pub text: &'static str,
    /// Background of `code` and `pre` blocks
    pub code_background: &'static str,
    /// Anchor color
    pub link: &'static str,
    /// Heading underline and blockquote bar
    pub border: &'static str,
    /// Blockquote text
    pub quote_text: &'static str,
}

const DARK: Palette = Palette {
    background: "#1e1e1e",
    text: "#d4d4d4",
    code_background: "#2d2d2d",
    link: "#9cdcfe",
    border: "#444",
    quote_text: "#aaa",
};

const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#000000",
    code_background: "#f4f4f4",
    link: "#0066cc",
    border: "#ddd",
    quote_text: "#666",
};

impl Palette {
    /// Select the palette for the given mode.
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            DARK
        } else {
            LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_selection() {
        assert_eq!(Palette::for_mode(true).background, "#1e1e1e");
        assert_eq!(Palette::for_mode(false).background, "#ffffff");
        assert_ne!(Palette::for_mode(true), Palette::for_mode(false));
    }
}
