/// ATX heading syntax (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// The whole run of `#` is counted before the level is checked, so a run of
    /// seven or more is never read as a shorter heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = line[level..].strip_prefix(' ')?;
        let level = u8::try_from(level).ok()?;
        Some((level, text.trim()))
    }
}
