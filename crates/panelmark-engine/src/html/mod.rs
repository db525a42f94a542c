//! HTML emission for the parsed block IR.
//!
//! The writer is the only place markup is produced. Text reaches it as
//! [`Escaped`] and is written as-is; fence bodies are escaped here, on
//! substitution, and nowhere else.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    options::RenderOptions,
    parsing::{
        ParsedDoc,
        blocks::{
            Block,
            kinds::{Alignment, ListKind, TableModel},
        },
        escape::Escaped,
        fence::{FenceId, FenceTable},
        inline::{InlineNode, parse_inline},
        span::Span,
    },
};

const HEADING_TAGS: [(&str, &str); 6] = [
    ("<h1>", "</h1>"),
    ("<h2>", "</h2>"),
    ("<h3>", "</h3>"),
    ("<h4>", "</h4>"),
    ("<h5>", "</h5>"),
    ("<h6>", "</h6>"),
];

/// Separator written between top-level blocks.
pub const BLOCK_SEPARATOR: char = '\n';

/// Writes blocks and their inline content into an HTML string.
pub struct HtmlWriter<'a> {
    options: &'a RenderOptions,
    fences: &'a FenceTable,
    out: String,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(options: &'a RenderOptions, fences: &'a FenceTable) -> Self {
        Self {
            options,
            fences,
            out: String::new(),
        }
    }

    /// Writes every block, separated by newlines, and returns the HTML.
    pub fn write_document(mut self, blocks: &[Block]) -> String {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                self.out.push(BLOCK_SEPARATOR);
            }
            self.write_block(block);
        }
        self.out
    }

    fn write_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                let (open, close) = HEADING_TAGS[usize::from(*level).clamp(1, 6) - 1];
                self.out.push_str(open);
                self.write_inline(text);
                self.out.push_str(close);
            }
            Block::Rule => self.out.push_str("<hr>"),
            Block::BlockQuote { lines } => {
                self.out.push_str("<blockquote>");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str("<br>");
                    }
                    self.write_inline(line);
                }
                self.out.push_str("</blockquote>");
            }
            Block::List { kind, items } => {
                let (open, close) = match kind {
                    ListKind::Unordered => ("<ul>", "</ul>"),
                    ListKind::Ordered => ("<ol>", "</ol>"),
                };
                self.out.push_str(open);
                for item in items {
                    self.out.push_str("<li>");
                    self.write_inline(item);
                    self.out.push_str("</li>");
                }
                self.out.push_str(close);
            }
            Block::Table(table) => self.write_table(table),
            Block::Paragraph(text) => {
                self.out.push_str("<p>");
                self.write_inline(text);
                self.out.push_str("</p>");
            }
            Block::Code(id) => self.write_code(*id),
        }
    }

    fn write_table(&mut self, table: &TableModel) {
        self.out.push_str("<table");
        if let Some(class) = &self.options.table_class {
            self.out.push_str(" class=\"");
            self.out.push_str(&encode_double_quoted_attribute(class));
            self.out.push('"');
        }
        self.out.push_str("><thead><tr>");
        for (i, cell) in table.headers.iter().enumerate() {
            self.write_cell("th", table.alignment(i), cell);
        }
        self.out.push_str("</tr></thead><tbody>");
        for row in &table.rows {
            self.out.push_str("<tr>");
            for (i, cell) in row.iter().enumerate() {
                self.write_cell("td", table.alignment(i), cell);
            }
            self.out.push_str("</tr>");
        }
        self.out.push_str("</tbody></table>");
    }

    fn write_cell(&mut self, tag: &str, alignment: Alignment, cell: &Escaped) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(" style=\"text-align:");
        self.out.push_str(alignment.as_css());
        self.out.push_str("\">");
        self.write_inline(cell);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn write_code(&mut self, id: FenceId) {
        let Some(code) = self.fences.get(id) else {
            log::warn!("no code block registered for placeholder {}", id.index());
            return;
        };
        self.out.push_str("<pre><code class=\"language-");
        self.out
            .push_str(&encode_double_quoted_attribute(&code.language));
        self.out.push_str("\">");
        self.out.push_str(&encode_text(&code.body));
        self.out.push_str("</code></pre>");
    }

    fn write_inline(&mut self, text: &Escaped) {
        let src = text.as_str();
        let nodes = parse_inline(0, src);
        self.write_nodes(src, &nodes);
    }

    fn write_nested(&mut self, src: &str, inner: Span) {
        let nodes = parse_inline(inner.start, inner.slice(src));
        self.write_nodes(src, &nodes);
    }

    fn write_nodes(&mut self, src: &str, nodes: &[InlineNode]) {
        for node in nodes {
            match *node {
                InlineNode::Text(sp) => self.out.push_str(sp.slice(src)),
                InlineNode::CodeSpan { inner, .. } => {
                    self.out.push_str("<code>");
                    self.out.push_str(inner.slice(src));
                    self.out.push_str("</code>");
                }
                InlineNode::Strong { inner, .. } => {
                    self.out.push_str("<strong>");
                    self.write_nested(src, inner);
                    self.out.push_str("</strong>");
                }
                InlineNode::Emphasis { inner, .. } => {
                    self.out.push_str("<em>");
                    self.write_nested(src, inner);
                    self.out.push_str("</em>");
                }
                InlineNode::Link { label, url, .. } => {
                    self.out.push_str("<a href=\"");
                    // Already escaped text; only the attribute quote is left.
                    self.out.push_str(&url.slice(src).replace('"', "&quot;"));
                    self.out.push('"');
                    if self.options.open_links_in_new_tab {
                        self.out.push_str(" target=\"_blank\"");
                    }
                    self.out.push_str(" rel=\"noopener\">");
                    self.write_nested(src, label);
                    self.out.push_str("</a>");
                }
            }
        }
    }
}

/// Writes a parsed document as HTML.
pub fn write_document(doc: &ParsedDoc, options: &RenderOptions) -> String {
    HtmlWriter::new(options, &doc.fences).write_document(&doc.blocks)
}

/// Wraps rendered HTML in a `<div>` carrying `class`.
pub fn wrap_in_container(html: &str, class: &str) -> String {
    let class = encode_double_quoted_attribute(class);
    let mut out = String::with_capacity(html.len() + class.len() + 20);
    out.push_str("<div class=\"");
    out.push_str(&class);
    out.push_str("\">");
    out.push_str(html);
    out.push_str("</div>");
    out
}
