//! Markdown to HTML rendering for mdnav.
//!
//! A thin wrapper over `pulldown-cmark` with the GitHub-flavored extensions
//! enabled. Rendering is a pure function of its input; callers treat the
//! output as opaque HTML.
//!
//! # Example
//!
//! ```
//! use mdnav_renderer::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::new().render("# Hello\n\n**Bold** text");
//! assert_eq!(html, "<h1>Hello</h1>\n<p><strong>Bold</strong> text</p>\n");
//! ```

use pulldown_cmark::{Options, Parser, html};

/// Markdown renderer producing HTML fragments.
#[derive(Clone, Copy, Debug)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with tables, strikethrough and task lists enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Render markdown to an HTML fragment.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
