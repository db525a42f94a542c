/// Blockquote block type with owned delimiter constant.
///
/// Lines are classified after escaping, so the `>` marker is matched in its
/// escaped form.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix as it appears in escaped text.
    pub const PREFIX: &'static str = "&gt;";

    /// Strips the quote marker and one optional following space.
    ///
    /// Returns the trimmed quoted text, which may be empty, or `None` if the
    /// line is not quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        Some(rest.trim())
    }
}
