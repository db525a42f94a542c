pub mod html;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use html::wrap_in_container;
pub use io::*;
pub use options::RenderOptions;
pub use parsing::{ParsedDoc, parse_document};
pub use render::{Renderer, render};
