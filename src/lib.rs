//! # plainfmt
//!
//! Plain text formatting for structured documents.
//!
//! A document arrives as a tree of [`Node`]s: documents, sections, paragraphs,
//! sentences, lists and list items, plus literal text and uncategorized
//! groupings. [`TextFormatter`] walks the tree once and flattens it into a
//! single [`TextLeaf`], choosing titles, spacing, line breaks and bullets
//! purely from each node's category.

pub mod parser;
pub mod renderer;

pub use parser::*;
pub use renderer::*;
