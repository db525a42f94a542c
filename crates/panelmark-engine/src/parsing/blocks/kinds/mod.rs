//! # Block Kinds
//!
//! Each block type owns its syntax knowledge: markers, prefixes and the small
//! parse helpers the classifier calls. Classifier and builder code never
//! hardcode `#`, `|` or `&gt;` themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{List, ListKind};
pub use paragraph::Paragraph;
pub use rule::Rule;
pub use table::{Alignment, Table, TableModel};
