/// An inline run of text carrying exactly one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Unformatted text.
    PlainText(String),
    /// `**text**` or `__text__` with the delimiters stripped.
    Bold(String),
    /// `*text*` or `_text_` with the delimiters stripped.
    Italic(String),
    /// `[text](url)`, only produced under [`LinkPolicy::Preserve`](crate::LinkPolicy::Preserve).
    Link { text: String, url: String },
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::PlainText(text.into())
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Span::Bold(text.into())
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Span::Italic(text.into())
    }

    /// The visible text of this span, whatever its format.
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText(t) | Span::Bold(t) | Span::Italic(t) => t,
            Span::Link { text, .. } => text,
        }
    }
}

/// One bullet of a [`Block::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub spans: Vec<Span>,
    /// 1-based position within the owning list.
    pub ordinal: usize,
}

/// Top-level structural unit of a [`DocumentTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// Always within `1..=6`.
        level: u8,
        spans: Vec<Span>,
    },
    Paragraph {
        spans: Vec<Span>,
    },
    /// A flat bullet list. Items never nest; a change of indent starts a new list.
    List {
        /// Indent level shared by every item (`leading spaces / 2`).
        indent: usize,
        items: Vec<ListItem>,
    },
}

impl Block {
    /// Builds a list block from raw bullet texts, numbering items from 1.
    pub fn list_from_texts(indent: usize, texts: Vec<String>) -> Self {
        let items = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| ListItem {
                spans: vec![Span::PlainText(text)],
                ordinal: i + 1,
            })
            .collect();
        Block::List { indent, items }
    }
}

/// The parsed structure of one markdown source, rooted at a single `Root`.
///
/// Built once by [`convert`](crate::convert) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentTree {
    blocks: Vec<Block>,
}

impl DocumentTree {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
