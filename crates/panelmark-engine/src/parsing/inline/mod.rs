//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the escaped
//! text of headings, paragraphs, list items, quote lines and table cells.
//! Constructs are recognised left to right, trying at each position, in order:
//!
//! 1. code span `` `x` ``, a raw zone
//! 2. strong `**x**`
//! 3. emphasis `*x*`, which may contain complete strong spans
//! 4. link `[label](url)`
//!
//! Strong is tried before emphasis so `**x**` never parses as two emphases.
//! Anything that does not close degrades to plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
