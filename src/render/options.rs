//! Fixed presentation settings for the rendered report.
//!
//! These are not user-configurable. [`RenderOptions::default`] is the one
//! configuration every run uses; backends translate it into their own flags.

/// Paper size of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    A4,
}

impl PageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PageFormat::A4 => "A4",
        }
    }
}

/// Page margins, as CSS-style lengths (`"20mm"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Margins {
    pub top: &'static str,
    pub right: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
}

/// A running header or footer line.
///
/// `text` may contain the placeholders [`PAGE_NUMBER`] and [`TOTAL_PAGES`],
/// which the renderer resolves per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub text: &'static str,
    pub font_size_px: u8,
}

/// Placeholder for the current page number in a [`PageTemplate`].
pub const PAGE_NUMBER: &str = "{page}";
/// Placeholder for the page count in a [`PageTemplate`].
pub const TOTAL_PAGES: &str = "{total}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub page_format: PageFormat,
    pub margins: Margins,
    pub print_background: bool,
    pub header: PageTemplate,
    pub footer: PageTemplate,
    pub stylesheet: &'static str,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A4,
            margins: Margins {
                top: "20mm",
                right: "15mm",
                bottom: "20mm",
                left: "15mm",
            },
            print_background: true,
            header: PageTemplate {
                text: "UUTIK - Контекст и профили",
                font_size_px: 10,
            },
            footer: PageTemplate {
                text: "{page} / {total}",
                font_size_px: 10,
            },
            stylesheet: STYLESHEET,
        }
    }
}

/// Typography and block styling for the report body.
pub const STYLESHEET: &str = concat!(
    "@import url('https://fonts.googleapis.com/css2?family=Noto+Color+Emoji&display=swap');\n",
    "body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Noto Color Emoji', sans-serif; line-height: 1.6; color: #333; }\n",
    "h1 { color: #2c3e50; border-bottom: 3px solid #3498db; padding-bottom: 10px; margin-top: 30px; }\n",
    "h2 { color: #34495e; border-bottom: 2px solid #95a5a6; padding-bottom: 8px; margin-top: 25px; }\n",
    "h3 { color: #7f8c8d; margin-top: 20px; }\n",
    "code { background-color: #f4f4f4; padding: 2px 6px; border-radius: 3px; font-family: 'Courier New', monospace; }\n",
    "pre { background-color: #f8f8f8; padding: 15px; border-left: 4px solid #3498db; overflow-x: auto; }\n",
    "blockquote { border-left: 4px solid #e74c3c; padding-left: 15px; color: #555; font-style: italic; margin: 15px 0; }\n",
    "ul, ol { padding-left: 25px; }\n",
    "li { margin: 5px 0; }\n",
    "hr { border: none; border-top: 2px solid #ecf0f1; margin: 30px 0; }\n",
    "strong { color: #2c3e50; }\n",
    "em { color: #7f8c8d; }\n",
    "table { border-collapse: collapse; }\n",
    "th, td { border: 1px solid #ddd; padding: 4px 8px; }\n",
);

impl PageTemplate {
    /// Substitute the placeholders with backend-specific tokens.
    pub fn resolve(&self, page: &str, total: &str) -> String {
        self.text.replace(PAGE_NUMBER, page).replace(TOTAL_PAGES, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a4_with_page_counter_footer() {
        let opts = RenderOptions::default();
        assert_eq!(opts.page_format.as_str(), "A4");
        assert_eq!(opts.margins.top, "20mm");
        assert_eq!(opts.margins.left, "15mm");
        assert!(opts.footer.text.contains(PAGE_NUMBER));
        assert!(opts.footer.text.contains(TOTAL_PAGES));
    }

    #[test]
    fn resolve_replaces_placeholders() {
        let footer = RenderOptions::default().footer;
        assert_eq!(footer.resolve("[page]", "[topage]"), "[page] / [topage]");
    }

    #[test]
    fn header_has_no_placeholders() {
        let header = RenderOptions::default().header;
        assert_eq!(header.resolve("1", "9"), header.text);
    }
}
