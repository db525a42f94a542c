use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
    types::InlineNode,
};

/// Closers already known to be missing from part of the input.
///
/// Lets a failed scan fail every later opener of the same kind at once, so a
/// run of unclosed delimiters is parsed in linear time. Positions are
/// absolute; openers before a recorded position are still tried.
#[derive(Debug)]
struct Exhausted {
    /// No backtick lies after this position.
    ticks_from: usize,
    /// No `*` outside code spans lies at or after this position.
    stars_from: usize,
    /// Every `[` before this position fails to form a link.
    links_before: usize,
}

impl Exhausted {
    fn new() -> Self {
        Self {
            ticks_from: usize::MAX,
            stars_from: usize::MAX,
            links_before: 0,
        }
    }
}

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset of `s` within the string the spans should index
/// - `s`: The escaped text to parse
///
/// # Returns
/// Nodes covering the entire input in order. Text between constructs is
/// emitted as `InlineNode::Text`. Nested content (strong, emphasis, link
/// labels) is not parsed here; callers re-parse the inner span.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut seen = Exhausted::new();
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_construct(&mut cur, &mut seen) {
            let span = node.span();
            flush_text(&mut out, text_start, span.start);
            text_start = span.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Tries every construct at the cursor in precedence order.
fn try_parse_construct(cur: &mut Cursor<'_>, seen: &mut Exhausted) -> Option<InlineNode> {
    try_parse_code_span(cur, seen)
        .or_else(|| try_parse_strong(cur, seen))
        .or_else(|| try_parse_emphasis(cur, seen))
        .or_else(|| try_parse_link(cur, seen))
}

/// Advances to the next `stop` byte, stepping over whole code spans.
///
/// Returns `false`, with the cursor at the end, if no `stop` lies outside a
/// code span.
fn skip_to(cur: &mut Cursor<'_>, stop: u8, seen: &mut Exhausted) -> bool {
    loop {
        match cur.peek() {
            None => return false,
            Some(b) if b == stop => return true,
            Some(CodeSpan::TICK) => {
                if try_parse_code_span(cur, seen).is_none() {
                    cur.bump();
                }
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it isn't
/// closed. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>, seen: &mut Exhausted) -> Option<InlineNode> {
    if cur.pos() >= seen.ticks_from || cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    let inner_len = cur.bump_until(CodeSpan::TICK);
    if cur.eof() {
        seen.ticks_from = start;
        *cur = saved;
        return None;
    }
    if inner_len == 0 {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts to parse `**text**`.
///
/// The text holds no `*` outside code spans. On failure, cursor position is
/// restored.
fn try_parse_strong(cur: &mut Cursor<'_>, seen: &mut Exhausted) -> Option<InlineNode> {
    if cur.pos() >= seen.stars_from || !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Strong::DELIM.len());
    let inner_start = cur.pos();

    if !skip_to(cur, Emphasis::STAR, seen) {
        seen.stars_from = inner_start;
        *cur = saved;
        return None;
    }
    if cur.pos() == inner_start || !cur.starts_with(Strong::DELIM) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(Strong::DELIM.len());

    Some(InlineNode::Strong {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts to parse `*text*`.
///
/// The text may contain code spans and complete `**strong**` spans; any other
/// `*` closes the emphasis. On failure, cursor position is restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>, seen: &mut Exhausted) -> Option<InlineNode> {
    if cur.pos() >= seen.stars_from || cur.peek() != Some(Emphasis::STAR) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // *
    let inner_start = cur.pos();

    loop {
        let scan_start = cur.pos();
        if !skip_to(cur, Emphasis::STAR, seen) {
            seen.stars_from = scan_start;
            *cur = saved;
            return None;
        }
        if try_parse_strong(cur, seen).is_none() {
            break;
        }
    }

    let inner_end = cur.pos();
    if inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing *

    Some(InlineNode::Emphasis {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts to parse `[label](url)` with non-empty label and url.
///
/// The label ends at the first `]` outside a code span; the url is literal.
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>, seen: &mut Exhausted) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) || cur.pos() < seen.links_before {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let label_start = cur.pos();

    if !skip_to(cur, Link::LABEL_CLOSE, seen) {
        seen.links_before = usize::MAX;
        *cur = saved;
        return None;
    }
    // Any `[` between here and this `]` would stop at the same `]`.
    let label_end = cur.pos();
    if label_end == label_start || !cur.starts_with(Link::URL_OPEN) {
        seen.links_before = label_end;
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::URL_OPEN.len());
    let url_start = cur.pos();

    let url_len = cur.bump_until(Link::URL_CLOSE);
    if cur.eof() {
        seen.links_before = usize::MAX;
        *cur = saved;
        return None;
    }
    if url_len == 0 {
        seen.links_before = label_end;
        *cur = saved;
        return None;
    }
    let url_end = cur.pos();
    cur.bump(); // )

    Some(InlineNode::Link {
        full: Span::new(start, cur.pos()),
        label: Span::new(label_start, label_end),
        url: Span::new(url_start, url_end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sp(start: usize, end: usize) -> Span {
        Span::new(start, end)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline(0, "hello world"), vec![InlineNode::Text(sp(0, 11))]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse_inline(0, "").is_empty());
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline(0, "`code`"),
            vec![InlineNode::CodeSpan {
                full: sp(0, 6),
                inner: sp(1, 5)
            }]
        );
    }

    #[test]
    fn code_span_suppresses_other_constructs() {
        let nodes = parse_inline(0, "`**not bold**`");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], InlineNode::CodeSpan { .. }));
    }

    #[test]
    fn empty_code_span_is_text() {
        assert_eq!(parse_inline(0, "``"), vec![InlineNode::Text(sp(0, 2))]);
    }

    #[test]
    fn bold_before_italic() {
        assert_eq!(
            parse_inline(0, "**bold** and *italic*"),
            vec![
                InlineNode::Strong {
                    full: sp(0, 8),
                    inner: sp(2, 6)
                },
                InlineNode::Text(sp(8, 13)),
                InlineNode::Emphasis {
                    full: sp(13, 21),
                    inner: sp(14, 20)
                },
            ]
        );
    }

    #[test]
    fn emphasis_may_contain_strong() {
        assert_eq!(
            parse_inline(0, "*a **b** c*"),
            vec![InlineNode::Emphasis {
                full: sp(0, 11),
                inner: sp(1, 10)
            }]
        );
    }

    #[test]
    fn triple_star_is_emphasis_around_strong() {
        assert_eq!(
            parse_inline(0, "***x***"),
            vec![InlineNode::Emphasis {
                full: sp(0, 7),
                inner: sp(1, 6)
            }]
        );
    }

    #[test]
    fn unclosed_star_is_text() {
        assert_eq!(parse_inline(0, "2 * 3"), vec![InlineNode::Text(sp(0, 5))]);
        assert_eq!(parse_inline(0, "**open"), vec![InlineNode::Text(sp(0, 6))]);
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline(0, "see [docs](https://x.io)!"),
            vec![
                InlineNode::Text(sp(0, 4)),
                InlineNode::Link {
                    full: sp(4, 24),
                    label: sp(5, 9),
                    url: sp(11, 23)
                },
                InlineNode::Text(sp(24, 25)),
            ]
        );
    }

    #[test]
    fn incomplete_links_are_text() {
        for s in ["[label]", "[label](", "[](url)", "[label]()", "[label] (url)"] {
            let nodes = parse_inline(0, s);
            assert_eq!(nodes, vec![InlineNode::Text(sp(0, s.len()))], "input: {s}");
        }
    }

    #[test]
    fn emphasis_steps_over_code_span_holding_star() {
        let s = "*call `f(*args)` now*";
        assert_eq!(
            parse_inline(0, s),
            vec![InlineNode::Emphasis {
                full: sp(0, s.len()),
                inner: sp(1, s.len() - 1)
            }]
        );
        let inner = parse_inline(1, &s[1..s.len() - 1]);
        assert_eq!(
            inner[1],
            InlineNode::CodeSpan {
                full: sp(6, 16),
                inner: sp(7, 15)
            }
        );
    }

    #[test]
    fn strong_steps_over_code_span_holding_star() {
        assert_eq!(
            parse_inline(0, "**Use `*args`** here"),
            vec![
                InlineNode::Strong {
                    full: sp(0, 15),
                    inner: sp(2, 13)
                },
                InlineNode::Text(sp(15, 20)),
            ]
        );
    }

    #[test]
    fn link_label_steps_over_code_span_holding_bracket() {
        assert_eq!(
            parse_inline(0, "[`a]`](u)"),
            vec![InlineNode::Link {
                full: sp(0, 9),
                label: sp(1, 5),
                url: sp(7, 8)
            }]
        );
    }

    #[test]
    fn unclosed_backtick_inside_emphasis_is_text() {
        assert_eq!(
            parse_inline(0, "*a ` b*"),
            vec![InlineNode::Emphasis {
                full: sp(0, 7),
                inner: sp(1, 6)
            }]
        );
    }

    #[test]
    fn failed_link_does_not_block_later_link() {
        assert_eq!(
            parse_inline(0, "[a] [b](c)"),
            vec![
                InlineNode::Text(sp(0, 4)),
                InlineNode::Link {
                    full: sp(4, 10),
                    label: sp(5, 6),
                    url: sp(8, 9)
                },
            ]
        );
    }

    #[test]
    fn failed_scan_still_allows_earlier_constructs() {
        assert_eq!(
            parse_inline(0, "*a **b** c"),
            vec![
                InlineNode::Text(sp(0, 3)),
                InlineNode::Strong {
                    full: sp(3, 8),
                    inner: sp(5, 6)
                },
                InlineNode::Text(sp(8, 10)),
            ]
        );
        assert_eq!(
            parse_inline(0, "*`a` `b"),
            vec![
                InlineNode::Text(sp(0, 1)),
                InlineNode::CodeSpan {
                    full: sp(1, 4),
                    inner: sp(2, 3)
                },
                InlineNode::Text(sp(4, 7)),
            ]
        );
    }

    #[test]
    fn long_runs_of_unclosed_openers_are_text() {
        for opener in ["[", "`", "*", "**", "[a](", "[a] "] {
            let s = opener.repeat(50_000);
            assert_eq!(
                parse_inline(0, &s),
                vec![InlineNode::Text(sp(0, s.len()))],
                "opener: {opener}"
            );
        }
    }

    #[test]
    fn long_run_of_openers_before_one_closer() {
        let s = format!("{}]", "[".repeat(50_000));
        assert_eq!(parse_inline(0, &s), vec![InlineNode::Text(sp(0, s.len()))]);
    }

    #[test]
    fn base_offset_is_applied() {
        assert_eq!(
            parse_inline(10, "`x`"),
            vec![InlineNode::CodeSpan {
                full: sp(10, 13),
                inner: sp(11, 12)
            }]
        );
    }

    #[test]
    fn multibyte_text_around_constructs() {
        let s = "é *ü* ß";
        let nodes = parse_inline(0, s);
        assert_eq!(nodes.len(), 3);
        let InlineNode::Emphasis { inner, .. } = nodes[1] else {
            panic!("expected emphasis, got {:?}", nodes[1]);
        };
        assert_eq!(inner.slice(s), "ü");
    }

    #[test]
    fn escaped_entities_are_plain_text() {
        let nodes = parse_inline(0, "a &lt;b&gt; &amp; c");
        assert_eq!(nodes, vec![InlineNode::Text(sp(0, 19))]);
    }
}
