use crate::parsing::{escape::Escaped, escape::Line, fence::FenceId};

use super::kinds::{Alignment, BlockQuote, Heading, List, ListKind, Rule, Table};

/// What a line would open or continue if it stood alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// Code fence placeholder.
    Fence(FenceId),
    /// Heading with its level and text.
    Heading { level: u8, text: Escaped },
    /// Horizontal rule.
    Rule,
    /// Quoted line; the text may be empty.
    Quote(Escaped),
    /// List item of the given kind.
    ListItem { kind: ListKind, text: Escaped },
    /// Anything else: paragraph text.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Table detection needs the next
/// line too, so the table facts are recorded here and combined by the builder.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Escaped line text. Empty for fence placeholders.
    pub text: Escaped,
    /// Block-level meaning of the line on its own.
    pub kind: LineKind,
    /// Whether the line can be a table header or body row.
    pub table_row: bool,
    /// Column alignments if the line is a table separator row.
    pub separator: Option<Vec<Alignment>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Kinds are tried in precedence order: heading, rule, quote, list item,
    /// then plain text.
    pub fn classify(&self, line: Line) -> LineClass {
        let text = match line {
            Line::Fence(id) => {
                return LineClass {
                    text: Escaped::default(),
                    kind: LineKind::Fence(id),
                    table_row: false,
                    separator: None,
                };
            }
            Line::Text(text) => text,
        };

        let s = text.as_str();
        let is_blank = text.is_blank();
        let kind = if is_blank {
            LineKind::Blank
        } else if let Some((level, heading)) = Heading::parse(s) {
            LineKind::Heading {
                level,
                text: Escaped::from_escaped(heading),
            }
        } else if Rule::matches(s) {
            LineKind::Rule
        } else if let Some(quoted) = BlockQuote::strip_prefix(s) {
            LineKind::Quote(Escaped::from_escaped(quoted))
        } else if let Some((kind, item)) = List::item(s) {
            LineKind::ListItem {
                kind,
                text: Escaped::from_escaped(item),
            }
        } else {
            LineKind::Text
        };

        LineClass {
            table_row: !is_blank && s.contains(Table::PIPE),
            separator: Table::separator(s),
            text,
            kind,
        }
    }
}
