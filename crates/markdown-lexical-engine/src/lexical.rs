//! Lexical editor-state serialization of a [`DocumentTree`].
//!
//! This is the JSON shape the content store persists. Every node carries
//! a `type` discriminator plus the fixed bookkeeping fields the editor
//! expects (`direction`, `format`, `indent`, `version`).

use serde::{Deserialize, Serialize};

use crate::models::{Block, DocumentTree, ListItem, Span};

const DIRECTION: &str = "ltr";
const VERSION: u32 = 1;

/// Text format bitmask values.
pub const FORMAT_PLAIN: u32 = 0;
pub const FORMAT_BOLD: u32 = 1;
pub const FORMAT_ITALIC: u32 = 2;

/// Top-level editor state: `{ "root": { "type": "root", ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalRoot {
    pub root: LexicalNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkFields {
    #[serde(rename = "linkType")]
    pub link_type: String,
    pub url: String,
    #[serde(rename = "newTab")]
    pub new_tab: bool,
}

/// One node of the editor state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LexicalNode {
    Root {
        children: Vec<LexicalNode>,
        direction: String,
        format: String,
        indent: usize,
        version: u32,
    },
    Heading {
        children: Vec<LexicalNode>,
        direction: String,
        format: String,
        indent: usize,
        tag: String,
        version: u32,
    },
    Paragraph {
        children: Vec<LexicalNode>,
        direction: String,
        format: String,
        indent: usize,
        #[serde(rename = "textFormat")]
        text_format: u32,
        #[serde(rename = "textStyle")]
        text_style: String,
        version: u32,
    },
    List {
        children: Vec<LexicalNode>,
        direction: String,
        format: String,
        indent: usize,
        #[serde(rename = "listType")]
        list_type: String,
        start: usize,
        tag: String,
        version: u32,
    },
    #[serde(rename = "listitem")]
    ListItem {
        children: Vec<LexicalNode>,
        direction: String,
        format: String,
        indent: usize,
        version: u32,
        value: usize,
    },
    Link {
        children: Vec<LexicalNode>,
        direction: String,
        fields: LinkFields,
        format: String,
        indent: usize,
        version: u32,
    },
    Text {
        detail: u32,
        format: u32,
        mode: String,
        style: String,
        text: String,
        version: u32,
    },
}

impl LexicalNode {
    fn text(text: &str, format: u32) -> Self {
        LexicalNode::Text {
            detail: 0,
            format,
            mode: "normal".to_string(),
            style: String::new(),
            text: text.to_string(),
            version: VERSION,
        }
    }

    fn from_span(span: &Span) -> Self {
        match span {
            Span::PlainText(t) => Self::text(t, FORMAT_PLAIN),
            Span::Bold(t) => Self::text(t, FORMAT_BOLD),
            Span::Italic(t) => Self::text(t, FORMAT_ITALIC),
            Span::Link { text, url } => LexicalNode::Link {
                children: vec![Self::text(text, FORMAT_PLAIN)],
                direction: DIRECTION.to_string(),
                fields: LinkFields {
                    link_type: "custom".to_string(),
                    url: url.clone(),
                    new_tab: false,
                },
                format: String::new(),
                indent: 0,
                version: VERSION,
            },
        }
    }

    fn from_item(item: &ListItem, indent: usize) -> Self {
        LexicalNode::ListItem {
            children: spans(&item.spans),
            direction: DIRECTION.to_string(),
            format: String::new(),
            indent,
            version: VERSION,
            value: item.ordinal,
        }
    }

    fn from_block(block: &Block) -> Self {
        match block {
            Block::Heading { level, spans: s } => LexicalNode::Heading {
                children: spans(s),
                direction: DIRECTION.to_string(),
                format: String::new(),
                indent: 0,
                tag: format!("h{level}"),
                version: VERSION,
            },
            Block::Paragraph { spans: s } => LexicalNode::Paragraph {
                children: spans(s),
                direction: DIRECTION.to_string(),
                format: String::new(),
                indent: 0,
                text_format: 0,
                text_style: String::new(),
                version: VERSION,
            },
            Block::List { indent, items } => LexicalNode::List {
                children: items.iter().map(|i| Self::from_item(i, *indent)).collect(),
                direction: DIRECTION.to_string(),
                format: String::new(),
                indent: 0,
                list_type: "bullet".to_string(),
                start: 1,
                tag: "ul".to_string(),
                version: VERSION,
            },
        }
    }
}

fn spans(spans: &[Span]) -> Vec<LexicalNode> {
    spans.iter().map(LexicalNode::from_span).collect()
}

/// Converts a tree into the editor state the content store expects.
pub fn to_lexical(tree: &DocumentTree) -> LexicalRoot {
    LexicalRoot {
        root: LexicalNode::Root {
            children: tree.blocks().iter().map(LexicalNode::from_block).collect(),
            direction: DIRECTION.to_string(),
            format: String::new(),
            indent: 0,
            version: VERSION,
        },
    }
}

impl DocumentTree {
    pub fn to_lexical(&self) -> LexicalRoot {
        to_lexical(self)
    }

    /// Compact JSON of [`Self::to_lexical`].
    pub fn to_lexical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_lexical())
    }
}
