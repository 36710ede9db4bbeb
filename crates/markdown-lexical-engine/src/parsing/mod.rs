pub mod blocks;
pub mod inline;
pub mod invariants;

use crate::{ConvertOptions, models::DocumentTree};

pub use blocks::{BlockBuilder, LineClass, MarkdownLineClassifier, classify_line};
pub use inline::parse_inline;

/// Parses markdown source into a [`DocumentTree`].
///
/// Every line is classified on its own, then folded through a
/// [`BlockBuilder`]. Never fails: unsupported constructs become paragraphs.
pub fn parse_document(text: &str, opts: &ConvertOptions) -> DocumentTree {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(opts.links);

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    DocumentTree::new(builder.finish())
}
