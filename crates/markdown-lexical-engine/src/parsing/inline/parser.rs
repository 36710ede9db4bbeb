use crate::{LinkPolicy, models::Span};

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Link},
};

/// What a successful construct match turns into.
enum Token {
    /// A finished span.
    Emit(Span),
    /// Delimiters with nothing inside; kept as part of the surrounding text.
    Literal,
}

struct Hit {
    end: usize,
    token: Token,
}

/// Parses one line of paragraph or heading text into [`Span`]s.
///
/// # Precedence
/// At each position the parser tries bold, then italic, then link, and
/// otherwise advances one byte. The leftmost construct wins and its interior
/// is never re-scanned, so `**a *b* c**` is a single bold span.
///
/// # Degradation
/// Unclosed delimiters stay in the plain text. Non-empty input always yields
/// at least one span; if nothing survives, the whole line comes back as
/// a single [`Span::PlainText`].
pub fn parse_inline(s: &str, links: LinkPolicy) -> Vec<Span> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a PlainText span
    fn flush_text(out: &mut Vec<Span>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Span::PlainText(s[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let hit = try_parse_strong(&cur)
            .or_else(|| try_parse_em(&cur))
            .or_else(|| try_parse_link(&cur, links));

        let Some(Hit { end, token }) = hit else {
            cur.bump();
            continue;
        };

        match token {
            Token::Emit(span) => {
                flush_text(&mut out, s, text_start, start);
                out.push(span);
                text_start = end;
            }
            Token::Literal => {}
        }
        cur.jump_to(end);
    }

    flush_text(&mut out, s, text_start, cur.pos().min(s.len()));

    if out.is_empty() && !s.is_empty() {
        out.push(Span::PlainText(s.to_string()));
    }
    out
}

/// Matches `delim…delim` with the shortest possible interior.
fn delimited(cur: &Cursor<'_>, delim: &str, wrap: fn(String) -> Span) -> Option<Hit> {
    if !cur.starts_with(delim.as_bytes()) {
        return None;
    }

    let inner_start = cur.pos() + delim.len();
    let inner_end = cur.find_from(inner_start, delim)?;
    let end = inner_end + delim.len();

    let token = if inner_end == inner_start {
        Token::Literal
    } else {
        Token::Emit(wrap(cur.s[inner_start..inner_end].to_string()))
    };
    Some(Hit { end, token })
}

fn try_parse_strong(cur: &Cursor<'_>) -> Option<Hit> {
    Emphasis::STRONG
        .iter()
        .find_map(|delim| delimited(cur, delim, Span::Bold))
}

fn try_parse_em(cur: &Cursor<'_>) -> Option<Hit> {
    Emphasis::EM
        .iter()
        .find_map(|delim| delimited(cur, delim, Span::Italic))
}

/// Attempts to parse `[text](url)` starting at the current position.
fn try_parse_link(cur: &Cursor<'_>, links: LinkPolicy) -> Option<Hit> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let text_start = cur.pos() + 1;
    let text_end = cur.find_from(text_start, Link::MIDDLE)?;
    let url_start = text_end + Link::MIDDLE.len();
    let url_end = cur.find_from(url_start, Link::CLOSE)?;
    let end = url_end + Link::CLOSE.len();

    // An empty anchor still yields a span; the url is never kept.
    let text = &cur.s[text_start..text_end];
    let token = match links {
        LinkPolicy::AnchorText => Token::Emit(Span::PlainText(text.to_string())),
        LinkPolicy::Preserve => Token::Emit(Span::Link {
            text: text.to_string(),
            url: cur.s[url_start..url_end].to_string(),
        }),
    };
    Some(Hit { end, token })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(s: &str) -> Vec<Span> {
        parse_inline(s, LinkPolicy::AnchorText)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse("hello world"), vec![Span::plain("hello world")]);
    }

    #[test]
    fn parse_mixed_emphasis() {
        assert_eq!(
            parse("Some *italic* and **bold** text."),
            vec![
                Span::plain("Some "),
                Span::italic("italic"),
                Span::plain(" and "),
                Span::bold("bold"),
                Span::plain(" text."),
            ]
        );
    }

    #[test]
    fn underscore_delimiters() {
        assert_eq!(
            parse("__strong__ and _soft_"),
            vec![
                Span::bold("strong"),
                Span::plain(" and "),
                Span::italic("soft"),
            ]
        );
    }

    #[test]
    fn bold_interior_is_not_rescanned() {
        assert_eq!(parse("**a *b* c**"), vec![Span::bold("a *b* c")]);
    }

    #[test]
    fn shortest_interior_wins() {
        assert_eq!(
            parse("*a* b *c*"),
            vec![Span::italic("a"), Span::plain(" b "), Span::italic("c")]
        );
    }

    #[test]
    fn unclosed_bold_falls_back_to_italic_then_text() {
        // `**` closes itself as an empty italic, which degrades to text
        assert_eq!(parse("**unclosed"), vec![Span::plain("**unclosed")]);
        assert_eq!(parse("a ** b"), vec![Span::plain("a ** b")]);
    }

    #[test]
    fn unclosed_italic_becomes_text() {
        assert_eq!(parse("*dangling"), vec![Span::plain("*dangling")]);
    }

    #[test]
    fn empty_bold_is_literal() {
        assert_eq!(parse("x **** y"), vec![Span::plain("x **** y")]);
    }

    #[test]
    fn intraword_underscores_read_as_italic() {
        assert_eq!(
            parse("snake_case_name"),
            vec![
                Span::plain("snake"),
                Span::italic("case"),
                Span::plain("name"),
            ]
        );
    }

    #[test]
    fn link_keeps_only_anchor_text() {
        assert_eq!(
            parse("see [docs](https://example.com) now"),
            vec![Span::plain("see "), Span::plain("docs"), Span::plain(" now")]
        );
    }

    #[test]
    fn link_preserved_when_requested() {
        assert_eq!(
            parse_inline("[docs](https://example.com)", LinkPolicy::Preserve),
            vec![Span::Link {
                text: "docs".into(),
                url: "https://example.com".into(),
            }]
        );
    }

    #[test]
    fn emphasis_around_link_wins() {
        assert_eq!(
            parse("*see [a](b)*"),
            vec![Span::italic("see [a](b)")]
        );
    }

    #[test]
    fn unclosed_link_becomes_text() {
        assert_eq!(parse("[text](no close"), vec![Span::plain("[text](no close")]);
        assert_eq!(parse("[just brackets]"), vec![Span::plain("[just brackets]")]);
    }

    #[test]
    fn empty_anchor_discards_url() {
        assert_eq!(parse("[](https://secret.example)"), vec![Span::plain("")]);
        assert_eq!(
            parse("go [](https://x) on"),
            vec![Span::plain("go "), Span::plain(""), Span::plain(" on")]
        );
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        assert_eq!(
            parse("café **naïve** 日本"),
            vec![Span::plain("café "), Span::bold("naïve"), Span::plain(" 日本")]
        );
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(parse("").is_empty());
    }
}
