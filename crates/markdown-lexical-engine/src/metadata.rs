//! Heuristic metadata for documents that carry none of their own.
//!
//! All functions are total: missing information falls back to a fixed
//! value rather than an error.

use serde::Serialize;

use crate::{ConvertOptions, parsing::blocks::kinds::Bullet};

/// Returned by [`extract_description`] when no line qualifies.
pub const NO_DESCRIPTION: &str = "No description available";
pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_DESCRIPTION_LENGTH: usize = 160;
/// Length of the description used as a stand-in title.
pub const TITLE_FROM_DESCRIPTION_LENGTH: usize = 60;

const ELLIPSIS: &str = "...";
/// Titles that mean "no title" to the migration tooling.
const PLACEHOLDER_TITLE: &str = "?";

/// Returns the text of the first level-1 heading (`# text`), or `fallback`.
///
/// `##` and deeper headings are ignored, as are later `#` headings.
pub fn extract_title(text: &str, fallback: &str) -> String {
    text.lines()
        .find_map(h1_text)
        .unwrap_or(fallback)
        .to_string()
}

fn h1_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim_start();
    (!title.trim_end().is_empty()).then_some(title)
}

/// Returns the first line that is not blank, a `#` line, or a bullet, trimmed.
///
/// Lines longer than `max_length` characters are cut to `max_length - 3`
/// characters followed by `...`.
pub fn extract_description(text: &str, max_length: usize) -> String {
    let Some(line) = text
        .lines()
        .map(str::trim)
        .find(|t| !t.is_empty() && !t.starts_with('#') && !Bullet::looks_like_item(t))
    else {
        return NO_DESCRIPTION.to_string();
    };

    if line.chars().count() <= max_length {
        return line.to_string();
    }

    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut out: String = line.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Lowercases `title` and collapses every run outside `[a-z0-9]` into `-`.
///
/// Leading and trailing dashes are stripped, so the result is stable under
/// repeated application.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_gap = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if in_gap && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            in_gap = false;
        } else {
            in_gap = true;
        }
    }
    slug
}

/// Picks a usable title for a migrated document.
///
/// Uses the first `# heading`. If that is missing, empty, or a bare `?`,
/// falls back to a short description with its ellipsis removed, and
/// finally to `file_stem`.
pub fn resolve_title(text: &str, file_stem: &str) -> String {
    let title = extract_title(text, file_stem);
    let trimmed = title.trim();
    if !trimmed.is_empty() && trimmed != PLACEHOLDER_TITLE {
        return title;
    }

    log::debug!("title {title:?} unusable, falling back to description");
    let description = extract_description(text, TITLE_FROM_DESCRIPTION_LENGTH);
    if description == NO_DESCRIPTION {
        return file_stem.to_string();
    }
    description
        .strip_suffix(ELLIPSIS)
        .unwrap_or(&description)
        .to_string()
}

/// Title, slug and description for one source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMetadata {
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl PostMetadata {
    /// Extracts metadata the way a migration run does.
    ///
    /// With a `file_stem`, the title follows [`resolve_title`]. Without one,
    /// it is [`extract_title`] with the configured fallback.
    pub fn extract(text: &str, file_stem: Option<&str>, opts: &ConvertOptions) -> Self {
        let title = match file_stem {
            Some(stem) => resolve_title(text, stem),
            None => extract_title(text, &opts.title_fallback),
        };
        let slug = generate_slug(&title);
        let description = extract_description(text, opts.description_max_length);
        Self {
            title,
            slug,
            description,
        }
    }
}
