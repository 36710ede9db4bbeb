/// Emphasis inline types with owned delimiter constants.
///
/// Strong delimiters are always tried before their single-character
/// counterparts so that `**x**` never reads as italic.
pub struct Emphasis;

impl Emphasis {
    /// Delimiters for bold text, in precedence order.
    pub const STRONG: [&'static str; 2] = ["**", "__"];
    /// Delimiters for italic text, in precedence order.
    pub const EM: [&'static str; 2] = ["*", "_"];
}
