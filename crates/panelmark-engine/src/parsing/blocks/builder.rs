use crate::parsing::escape::Escaped;

use super::{
    classify::{LineClass, LineKind},
    kinds::{ListKind, Paragraph, Table, TableModel},
    types::Block,
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<Escaped> },
    Quote { lines: Vec<Escaped> },
    List { kind: ListKind, items: Vec<Escaped> },
    Table(TableModel),
}

/// Phase 2 of block parsing: turns classified lines into [`Block`]s.
///
/// The builder holds at most one open multi-line block. A line that could be a
/// table header is held back for one line until the next line shows whether
/// it is a separator row.
pub struct BlockBuilder {
    leaf: LeafState,
    pending_header: Option<LineClass>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            pending_header: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if let Some(header) = self.pending_header.take() {
            if let Some(alignments) = c.separator {
                self.flush_leaf();
                self.leaf = LeafState::Table(TableModel::new(Table::cells(&header.text), alignments));
                return;
            }
            self.push_line(header);
        }

        if let LeafState::Table(table) = &mut self.leaf {
            if c.table_row {
                table.push_row(Table::cells(&c.text));
                return;
            }
            self.flush_leaf();
        }

        if c.table_row {
            self.pending_header = Some(c);
            return;
        }

        self.push_line(c);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if let Some(header) = self.pending_header.take() {
            self.push_line(header);
        }
        self.flush_leaf();
        self.out
    }

    fn push_line(&mut self, c: LineClass) {
        match c.kind {
            LineKind::Blank => self.flush_leaf(),
            LineKind::Fence(id) => self.emit(Block::Code(id)),
            LineKind::Heading { level, text } => self.emit(Block::Heading { level, text }),
            LineKind::Rule => self.emit(Block::Rule),
            LineKind::Quote(text) => self.extend_quote(text),
            LineKind::ListItem { kind, text } => self.extend_list(kind, text),
            LineKind::Text => self.extend_paragraph(c.text),
        }
    }

    fn emit(&mut self, block: Block) {
        self.flush_leaf();
        self.out.push(block);
    }

    fn extend_quote(&mut self, text: Escaped) {
        if let LeafState::Quote { lines } = &mut self.leaf {
            if !text.is_empty() {
                lines.push(text);
            }
            return;
        }
        self.flush_leaf();
        let lines = if text.is_empty() { vec![] } else { vec![text] };
        self.leaf = LeafState::Quote { lines };
    }

    fn extend_list(&mut self, kind: ListKind, text: Escaped) {
        if let LeafState::List { kind: open, items } = &mut self.leaf
            && *open == kind
        {
            items.push(text);
            return;
        }
        self.flush_leaf();
        self.leaf = LeafState::List {
            kind,
            items: vec![text],
        };
    }

    fn extend_paragraph(&mut self, line: Escaped) {
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(line);
            return;
        }
        self.flush_leaf();
        self.leaf = LeafState::Paragraph { lines: vec![line] };
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => self.out.push(Block::Paragraph(Paragraph::join(&lines))),
            LeafState::Quote { lines } => self.out.push(Block::BlockQuote { lines }),
            LeafState::List { kind, items } => self.out.push(Block::List { kind, items }),
            LeafState::Table(table) => self.out.push(Block::Table(table)),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
