/// The kind of a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item` or `* item`, rendered as `<ul>`.
    Unordered,
    /// `1. item`, rendered as `<ol>`.
    Ordered,
}

/// List item syntax.
pub struct List;

impl List {
    pub const BULLETS: [char; 2] = ['-', '*'];
    pub const ORDINAL_SUFFIX: &'static str = ". ";

    /// Strips a `- ` or `* ` marker, returning the item text.
    pub fn strip_bullet(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::BULLETS)?;
        let text = rest.strip_prefix(' ')?;
        Some(text.trim())
    }

    /// Strips a `<digits>. ` marker, returning the item text.
    ///
    /// The number itself is discarded.
    pub fn strip_ordinal(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let text = line[digits..].strip_prefix(Self::ORDINAL_SUFFIX)?;
        Some(text.trim())
    }

    /// Classifies a line as a list item of either kind.
    pub fn item(line: &str) -> Option<(ListKind, &str)> {
        if let Some(text) = Self::strip_bullet(line) {
            return Some((ListKind::Unordered, text));
        }
        Self::strip_ordinal(line).map(|text| (ListKind::Ordered, text))
    }
}
