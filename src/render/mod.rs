//! Display-side logic: message classification and tabular formatting.

pub mod message;
pub mod tables;

pub use message::{classify, render_colored, RenderedMessage, Role};
pub use tables::section_heading;
