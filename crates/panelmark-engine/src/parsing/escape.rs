//! # Escaping
//!
//! Second pass of the pipeline. Every text line left over after fence
//! extraction is HTML-escaped here, once, and carried forward as [`Escaped`].
//! Block and inline recognisers run on the escaped text; the HTML writer only
//! accepts [`Escaped`], so literal input can neither skip escaping nor be
//! escaped twice.

use std::fmt;

use super::fence::{FenceId, SourceLine};

/// Text that has been HTML-escaped exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Escaped(String);

impl Escaped {
    /// Escapes `&`, `<` and `>` in a single left-to-right scan.
    pub fn escape(raw: &str) -> Self {
        Self(html_escape::encode_text(raw).into_owned())
    }

    /// Wraps a fragment cut out of an already escaped string.
    ///
    /// Fragments are only ever cut at ASCII markup delimiters or whitespace,
    /// which never fall inside an entity.
    pub(crate) fn from_escaped(fragment: &str) -> Self {
        Self(fragment.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the text holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Joins escaped fragments with `sep`, which must not need escaping.
    pub(crate) fn join(parts: &[Escaped], sep: &str) -> Self {
        let mut out = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(part.as_str());
        }
        Self(out)
    }
}

impl AsRef<str> for Escaped {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line after the escaping pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Escaped markdown text.
    Text(Escaped),
    /// Placeholder for an extracted code fence.
    Fence(FenceId),
}

/// Escapes a source line. Placeholders pass through untouched.
pub fn escape_line(line: SourceLine<'_>) -> Line {
    match line {
        SourceLine::Text(text) => Line::Text(Escaped::escape(text)),
        SourceLine::Fence(id) => Line::Fence(id),
    }
}
