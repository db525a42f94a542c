/// Fenced code block syntax.
///
/// All fence delimiter knowledge lives here; the extractor only asks whether
/// a line opens or closes a fence.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the language tag if `line` opens a fence.
    ///
    /// The tag must follow the backticks directly and consist of ASCII word
    /// characters. It may be empty. Trailing spaces and tabs are ignored.
    pub fn opener(line: &str) -> Option<&str> {
        let tag = line
            .strip_prefix(Self::BACKTICKS)?
            .trim_end_matches([' ', '\t']);
        tag.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
            .then_some(tag)
    }

    /// Returns `true` if `line` is a bare closing fence.
    pub fn closes(line: &str) -> bool {
        line.trim_end_matches([' ', '\t']) == Self::BACKTICKS
    }
}
