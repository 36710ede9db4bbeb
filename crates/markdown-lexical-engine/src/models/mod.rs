pub mod document_tree;

pub use document_tree::{Block, DocumentTree, ListItem, Span};
