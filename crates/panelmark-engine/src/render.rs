use crate::{html::write_document, options::RenderOptions, parsing::parse_document};

/// Converts markdown to HTML with a fixed set of [`RenderOptions`].
///
/// Holds no per-call state, so one renderer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `markdown` to an HTML fragment.
    ///
    /// Never fails: malformed syntax degrades to escaped text. Empty or
    /// whitespace-only input gives an empty string.
    pub fn render(&self, markdown: &str) -> String {
        let doc = parse_document(markdown);
        write_document(&doc, &self.options)
    }
}

/// Renders `markdown` with default options.
pub fn render(markdown: &str) -> String {
    Renderer::default().render(markdown)
}
