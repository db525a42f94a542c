//! # Fence Extraction
//!
//! First pass over normalized source. Fenced code blocks are lifted into a
//! [`FenceTable`] and each one is replaced by a single [`SourceLine::Fence`]
//! placeholder, so no later pass can read code as markdown. Bodies are stored
//! raw; they are escaped only when the HTML writer substitutes them back.

use super::blocks::kinds::CodeFence;

/// Index of a code block in a [`FenceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FenceId(usize);

impl FenceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An extracted fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag from the opening fence, possibly empty.
    pub language: String,
    /// Raw, unescaped body without the fence lines.
    pub body: String,
}

/// Ordered registry of the code blocks found in one document.
#[derive(Debug, Clone, Default)]
pub struct FenceTable {
    blocks: Vec<CodeBlock>,
}

impl FenceTable {
    fn push(&mut self, block: CodeBlock) -> FenceId {
        self.blocks.push(block);
        FenceId(self.blocks.len() - 1)
    }

    pub fn get(&self, id: FenceId) -> Option<&CodeBlock> {
        self.blocks.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeBlock> {
        self.blocks.iter()
    }
}

/// A source line after fence extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLine<'a> {
    /// Ordinary text, still raw.
    Text(&'a str),
    /// Placeholder standing in for a whole fenced block.
    Fence(FenceId),
}

/// Output of [`extract_fences`].
#[derive(Debug)]
pub struct Extracted<'a> {
    pub lines: Vec<SourceLine<'a>>,
    pub fences: FenceTable,
}

/// Splits `source` into lines and lifts out fenced code blocks.
///
/// `source` must already use `\n` line endings. Each opening fence is closed by
/// the nearest following closing fence. An opener with no closer after it is
/// kept as a text line.
pub fn extract_fences(source: &str) -> Extracted<'_> {
    let raw: Vec<&str> = source.split('\n').collect();
    let mut lines = Vec::with_capacity(raw.len());
    let mut fences = FenceTable::default();
    // Once one opener has failed to find a closer, no later opener can.
    let mut closers_exhausted = false;

    let mut i = 0;
    while i < raw.len() {
        if !closers_exhausted && let Some(language) = CodeFence::opener(raw[i]) {
            let close = raw[i + 1..]
                .iter()
                .position(|l| CodeFence::closes(l))
                .map(|offset| i + 1 + offset);

            match close {
                Some(close) => {
                    let id = fences.push(CodeBlock {
                        language: language.to_owned(),
                        body: raw[i + 1..close].join("\n"),
                    });
                    lines.push(SourceLine::Fence(id));
                    i = close + 1;
                    continue;
                }
                None => {
                    log::debug!("unterminated code fence on line {}, kept as text", i + 1);
                    closers_exhausted = true;
                }
            }
        }

        lines.push(SourceLine::Text(raw[i]));
        i += 1;
    }

    log::trace!("extracted {} code fence(s)", fences.len());
    Extracted { lines, fences }
}
