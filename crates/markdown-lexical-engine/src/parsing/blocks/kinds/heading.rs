/// ATX heading type with owned delimiter constants.
///
/// Headings must start in column 0 with `# `. Any other line whose first
/// non-space character is `#` (including `## Title`) is a hashtag and gets
/// dropped, so [`Heading::is_hashtag`] must be checked before [`Heading::parse`].
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest level a run of markers may denote.
    pub const MAX_LEVEL: usize = 6;
    /// Prefix that keeps an indented `#` line out of the hashtag bucket.
    pub const SPACED_MARKER: &'static str = "# ";

    /// Splits a heading line into `(level, text)`.
    ///
    /// Requires 1–6 markers, at least one whitespace character, and some
    /// non-whitespace content. The text is the rest of the line after the
    /// separating whitespace, trailing whitespace included.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let rest = &line[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        let text = rest.trim_start();
        if text.trim_end().is_empty() {
            return None;
        }
        Some((level as u8, text))
    }

    /// A `#`-led line that is not a heading, e.g. `#work-on-myself/blog`.
    pub fn is_hashtag(line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.starts_with(Self::MARKER) && !trimmed.starts_with(Self::SPACED_MARKER)
    }
}
