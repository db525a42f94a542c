use std::borrow::Cow;

/// Rewrites `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows when the input has no carriage returns.
pub fn normalize_newlines(src: &str) -> Cow<'_, str> {
    if src.contains('\r') {
        Cow::Owned(src.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(src)
    }
}
