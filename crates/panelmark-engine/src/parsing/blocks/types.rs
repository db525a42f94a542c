use crate::parsing::{escape::Escaped, fence::FenceId};

use super::kinds::{ListKind, TableModel};

/// A block in the parsed document.
///
/// Block structure is flat: no block contains another block. Text fields hold
/// escaped markdown that still needs inline parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#` to `######` heading.
    Heading { level: u8, text: Escaped },
    /// `---` horizontal rule.
    Rule,
    /// Consecutive `>` lines, empty lines already dropped.
    BlockQuote { lines: Vec<Escaped> },
    /// Consecutive list items of one kind.
    List { kind: ListKind, items: Vec<Escaped> },
    /// Pipe table with header, alignments and body rows.
    Table(TableModel),
    /// Remaining text between blank lines and block openers.
    Paragraph(Escaped),
    /// Placeholder for an extracted fenced code block.
    Code(FenceId),
}
