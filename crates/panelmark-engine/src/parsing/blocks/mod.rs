//! # Block Parsing
//!
//! Two-phase block parsing over escaped lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` holding local facts (block kind, table row/separator facts)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps at most one
//!    open block and emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: The `Block` IR
//! - **`kinds`**: Block-specific syntax with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Block structure is flat: quotes, lists and tables never nest
//! - Fence placeholders are always blocks of their own
//! - Table detection takes precedence over every other line kind
//! - Any block opener ends an open paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::Block;
