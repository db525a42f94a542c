use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::escape::Escaped;

/// Column alignment taken from a table separator row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Value for a CSS `text-align` declaration.
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    fn from_cell(cell: &str) -> Self {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// A parsed pipe table.
///
/// Rows keep exactly the cells they were written with: short rows are not
/// padded and long rows are not truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub headers: Vec<Escaped>,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Vec<Escaped>>,
}

impl TableModel {
    pub fn new(headers: Vec<Escaped>, alignments: Vec<Alignment>) -> Self {
        Self {
            headers,
            alignments,
            rows: vec![],
        }
    }

    /// Alignment for column `index`, left when the separator row was shorter.
    pub fn alignment(&self, index: usize) -> Alignment {
        self.alignments.get(index).copied().unwrap_or_default()
    }

    pub fn push_row(&mut self, cells: Vec<Escaped>) {
        self.rows.push(cells);
    }
}

/// Pipe table syntax.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Minimum width of a separator cell, colons included.
    pub const MIN_SEPARATOR_WIDTH: usize = 3;

    /// Splits a row into trimmed cells.
    ///
    /// A leading or trailing pipe does not produce an empty edge cell, so
    /// `| a | b |` and `a | b` both give `["a", "b"]`.
    pub fn split_row(line: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }

    /// Splits an escaped row into escaped cells.
    pub fn cells(line: &Escaped) -> Vec<Escaped> {
        Self::split_row(line.as_str())
            .into_iter()
            .map(Escaped::from_escaped)
            .collect()
    }

    /// Parses a separator row such as `|---|:--:|--:|` into alignments.
    ///
    /// The row must contain a pipe and every cell must be dashes with optional
    /// edge colons, at least [`Self::MIN_SEPARATOR_WIDTH`] characters wide.
    pub fn separator(line: &str) -> Option<Vec<Alignment>> {
        static SEPARATOR_CELL: OnceLock<Regex> = OnceLock::new();
        let cell_regex = SEPARATOR_CELL
            .get_or_init(|| Regex::new(r"^:?-+:?$").expect("Invalid separator cell regex"));

        if !line.contains(Self::PIPE) {
            return None;
        }
        let cells = Self::split_row(line);
        if cells.is_empty() {
            return None;
        }
        cells
            .into_iter()
            .map(|cell| {
                (cell.len() >= Self::MIN_SEPARATOR_WIDTH && cell_regex.is_match(cell))
                    .then(|| Alignment::from_cell(cell))
            })
            .collect()
    }
}
