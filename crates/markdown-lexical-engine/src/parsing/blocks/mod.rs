//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only (blank, heading, hashtag, bullet, paragraph)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` folds the classes into
//!    `Block`s, buffering contiguous same-indent bullets into one list
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, Bullet)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Lists are flat: an indent change closes the current list and opens another
//! - Hashtag lines (`#tag`, `####### x`) produce no block at all
//! - Blocks come out in source order

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier, classify_line};
