use super::kinds::{Bullet, Heading};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// A `#`-led line that is not a heading. Produces no block.
    Hashtag,
    Heading { level: u8, text: &'a str },
    ListItem { indent: usize, text: &'a str },
    /// Anything else, trimmed.
    Paragraph(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, hashtag, heading, bullet, paragraph. The hashtag
    /// rule runs first, so only `# `-led lines can become headings.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return LineClass::Blank;
        }

        if Heading::is_hashtag(line) {
            return LineClass::Hashtag;
        }

        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }

        if let Some((indent, text)) = Bullet::parse(line) {
            return LineClass::ListItem { indent, text };
        }

        LineClass::Paragraph(line.trim())
    }
}

/// Shorthand for [`MarkdownLineClassifier::classify`].
pub fn classify_line(line: &str) -> LineClass<'_> {
    MarkdownLineClassifier.classify(line)
}
