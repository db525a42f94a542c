//! # Parsing
//!
//! Turns raw markdown into a flat block IR in three passes:
//!
//! 1. **Fence extraction** (`fence`): code fences become placeholder lines
//!    backed by a `FenceTable`
//! 2. **Escaping** (`escape`): every remaining text line is HTML-escaped once
//! 3. **Block parsing** (`blocks`): escaped lines are classified and built into
//!    `Block`s
//!
//! Inline parsing (`inline`) runs later, per block, while HTML is written.

pub mod blocks;
pub mod escape;
pub mod fence;
pub mod inline;
pub mod source;
pub mod span;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use escape::escape_line;
use fence::{Extracted, FenceTable, extract_fences};
use source::normalize_newlines;

/// A parsed document: blocks plus the code fences their placeholders refer to.
#[derive(Debug, Clone, Default)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
    pub fences: FenceTable,
}

pub fn parse_document(markdown: &str) -> ParsedDoc {
    let source = normalize_newlines(markdown);
    let Extracted { lines, fences } = extract_fences(&source);

    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines {
        let lc = classifier.classify(escape_line(line));
        builder.push(lc);
    }

    let blocks = builder.finish();
    log::debug!(
        "parsed {} block(s), {} code fence(s)",
        blocks.len(),
        fences.len()
    );

    ParsedDoc { blocks, fences }
}
