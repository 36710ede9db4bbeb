//! Line-oriented markdown to structured document conversion.
//!
//! [`convert`] turns markdown text into a [`DocumentTree`] of headings,
//! paragraphs and flat bullet lists with inline bold/italic spans. The
//! [`metadata`] module derives a title, slug and description from the same
//! text. Nothing here touches the filesystem or the network.

pub mod lexical;
pub mod metadata;
pub mod models;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use lexical::{LexicalNode, LexicalRoot, to_lexical};
pub use metadata::{
    NO_DESCRIPTION, PostMetadata, extract_description, extract_title, generate_slug,
    resolve_title,
};
pub use models::*;
pub use options::{ConvertOptions, LinkPolicy};

/// Converts markdown with the default options.
pub fn convert(text: &str) -> DocumentTree {
    convert_with(text, &ConvertOptions::default())
}

pub fn convert_with(text: &str, opts: &ConvertOptions) -> DocumentTree {
    parsing::parse_document(text, opts)
}
