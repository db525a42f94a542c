use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the text it was parsed from.
///
/// Spans are absolute: nested content is re-parsed with its own start as the
/// base offset, so every span indexes the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone: no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between backticks.
        inner: Span,
    },
    /// `**bold**`; `inner` is inline-parsed again.
    Strong { full: Span, inner: Span },
    /// `*italic*`; `inner` is inline-parsed again.
    Emphasis { full: Span, inner: Span },
    /// `[label](url)`; the label is inline-parsed again, the url is literal.
    Link { full: Span, label: Span, url: Span },
}

impl InlineNode {
    /// The full span of the node, delimiters included.
    pub fn span(&self) -> Span {
        match *self {
            InlineNode::Text(sp) => sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::Link { full, .. } => full,
        }
    }
}
