//! Markdown to standalone HTML conversion for page-oriented backends.

use super::options::RenderOptions;
use pulldown_cmark::{Options, Parser, html};

/// Markdown extensions enabled for report content.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Render `markdown` into a complete HTML page with the report stylesheet.
///
/// Raw HTML in the markdown, such as the `<a id="...">` anchor markers, is
/// passed through unchanged so in-document links resolve.
pub fn to_html_page(markdown: &str, options: &RenderOptions) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, parser);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = options.header.text,
        css = options.stylesheet,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_anchor_markers_and_links() {
        let md = "[see](#incident)\n\n<a id=\"incident\"></a>\n## incident\n\nBody";
        let page = to_html_page(md, &RenderOptions::default());

        assert!(page.contains("<a href=\"#incident\">see</a>"));
        assert!(page.contains("<a id=\"incident\"></a>"));
        assert!(page.contains("<h2>incident</h2>"));
    }

    #[test]
    fn embeds_stylesheet_and_charset() {
        let page = to_html_page("# Title", &RenderOptions::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<meta charset=\"utf-8\">"));
        assert!(page.contains("border-left: 4px solid #e74c3c"));
        assert!(page.contains("<h1>Title</h1>"));
    }

    #[test]
    fn renders_tables() {
        let page = to_html_page("| a | b |\n|---|---|\n| 1 | 2 |", &RenderOptions::default());
        assert!(page.contains("<table>"));
    }
}
