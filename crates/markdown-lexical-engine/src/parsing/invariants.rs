use crate::models::{Block, DocumentTree, Span};

/// Validates converter output invariants.
///
/// Asserts that:
/// - Heading levels are within `1..=6`
/// - Headings and paragraphs carry at least one span
/// - Lists are non-empty and their ordinals run `1..=n` in order
/// - List items hold exactly one plain text span
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tree: &DocumentTree) {
    for (i, b) in tree.blocks().iter().enumerate() {
        match b {
            Block::Heading { level, spans } => {
                assert!(
                    (1..=6).contains(level),
                    "heading level out of range: {level} (block {i})"
                );
                assert!(!spans.is_empty(), "heading without spans (block {i})");
            }
            Block::Paragraph { spans } => {
                assert!(!spans.is_empty(), "paragraph without spans (block {i})");
            }
            Block::List { items, .. } => {
                assert!(!items.is_empty(), "empty list (block {i})");
                for (n, item) in items.iter().enumerate() {
                    assert_eq!(
                        item.ordinal,
                        n + 1,
                        "list item ordinal out of sequence (block {i})"
                    );
                    assert!(
                        matches!(item.spans.as_slice(), [Span::PlainText(_)]),
                        "list item must be a single plain span: {:?} (block {i})",
                        item.spans
                    );
                }
            }
        }
    }
}
