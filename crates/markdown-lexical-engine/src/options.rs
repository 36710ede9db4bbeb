use serde::{Deserialize, Serialize};

use crate::metadata::{DEFAULT_DESCRIPTION_LENGTH, DEFAULT_TITLE};

/// How `[text](url)` is represented in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkPolicy {
    /// Keep only the anchor text as plain text; the URL is dropped.
    #[default]
    AnchorText,
    /// Emit a [`Span::Link`](crate::Span::Link) carrying both text and URL.
    Preserve,
}

/// Knobs for a single conversion. The defaults reproduce the stored content format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub links: LinkPolicy,
    pub description_max_length: usize,
    pub title_fallback: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            links: LinkPolicy::default(),
            description_max_length: DEFAULT_DESCRIPTION_LENGTH,
            title_fallback: DEFAULT_TITLE.to_string(),
        }
    }
}
