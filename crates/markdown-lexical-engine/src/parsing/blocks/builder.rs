use crate::{LinkPolicy, models::Block, parsing::inline::parse_inline};

use super::classify::LineClass;

/// Bullet lines waiting to become a [`Block::List`].
#[derive(Debug)]
struct PendingList {
    indent: usize,
    items: Vec<String>,
}

/// Folds classified lines into blocks.
///
/// The only state carried between lines is the list under construction.
/// It is flushed by any non-bullet line, by an indent change, and by
/// [`BlockBuilder::finish`].
pub struct BlockBuilder {
    links: LinkPolicy,
    pending: Option<PendingList>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new(links: LinkPolicy) -> Self {
        Self {
            links,
            pending: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match *c {
            LineClass::Blank => self.flush_list(),
            LineClass::Hashtag => {
                self.flush_list();
                log::trace!("dropping hashtag line");
            }
            LineClass::Heading { level, text } => {
                self.flush_list();
                self.out.push(Block::Heading {
                    level,
                    spans: parse_inline(text, self.links),
                });
            }
            LineClass::Paragraph(text) => {
                self.flush_list();
                self.out.push(Block::Paragraph {
                    spans: parse_inline(text, self.links),
                });
            }
            LineClass::ListItem { indent, text } => self.extend_list(indent, text),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn extend_list(&mut self, indent: usize, text: &str) {
        if self.pending.as_ref().is_some_and(|p| p.indent != indent) {
            self.flush_list();
        }

        self.pending
            .get_or_insert_with(|| PendingList {
                indent,
                items: vec![],
            })
            .items
            .push(text.to_string());
    }

    fn flush_list(&mut self) {
        if let Some(PendingList { indent, items }) = self.pending.take() {
            log::debug!("flushing list of {} item(s) at indent {indent}", items.len());
            self.out.push(Block::list_from_texts(indent, items));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(LinkPolicy::default())
    }
}
