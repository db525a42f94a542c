//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'`, raw zone that suppresses other parsing
//! - **`Strong`**: `DELIM = b"**"`
//! - **`Emphasis`**: `STAR = b'*'`
//! - **`Link`**: `OPEN = b'['`, `URL_OPEN = b"]("`, `URL_CLOSE = b')'`
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
