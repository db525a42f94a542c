use crate::parsing::escape::Escaped;

/// Paragraph block type.
///
/// Paragraphs have no delimiters: they collect the text lines no other block
/// opener claims, up to the next blank line or block opener.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_SEPARATOR: &'static str = "\n";

    /// Joins collected lines into paragraph text, trimmed at both ends.
    pub fn join(lines: &[Escaped]) -> Escaped {
        let joined = Escaped::join(lines, Self::LINE_SEPARATOR);
        Escaped::from_escaped(joined.as_str().trim())
    }
}
