//! # Inline Parsing
//!
//! Cursor-based inline parsing over a single trimmed line of paragraph or
//! heading text.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Bold is tried strictly before italic, which is tried before links.
//! `**x**` is always bold, never an italic wrapping `*x*`.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
