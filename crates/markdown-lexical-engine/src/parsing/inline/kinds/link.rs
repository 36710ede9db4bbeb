/// Inline link `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Closes the anchor text and opens the destination.
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}
