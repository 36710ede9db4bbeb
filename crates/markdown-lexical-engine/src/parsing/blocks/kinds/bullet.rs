/// Bullet list item type with owned delimiter constants.
pub struct Bullet;

impl Bullet {
    /// Characters that open a bullet.
    pub const MARKERS: [char; 2] = ['*', '-'];
    /// Leading whitespace characters per indent level.
    pub const INDENT_WIDTH: usize = 2;

    /// Splits a bullet line into `(indent, text)`.
    ///
    /// `indent` is the leading whitespace count divided by [`Self::INDENT_WIDTH`],
    /// rounded down. The marker must be followed by whitespace and content;
    /// a bare marker with only whitespace after it is paragraph text.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let rest = line.trim_start();
        let leading = line[..line.len() - rest.len()].chars().count();

        let mut chars = rest.chars();
        let marker = chars.next()?;
        if !Self::MARKERS.contains(&marker) {
            return None;
        }

        let after = chars.as_str();
        if !after.starts_with(char::is_whitespace) {
            return None;
        }

        let text = after.trim();
        if text.is_empty() {
            return None;
        }
        Some((leading / Self::INDENT_WIDTH, text))
    }

    /// True if a trimmed line opens with a marker and whitespace (`- `, `* `).
    pub fn looks_like_item(trimmed: &str) -> bool {
        let mut chars = trimmed.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(m), Some(ws)) if Self::MARKERS.contains(&m) && ws.is_whitespace()
        )
    }
}
