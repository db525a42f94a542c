//! Parser-level tests: raw markdown in, block IR out.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{
        Block,
        kinds::{Alignment, ListKind},
    },
    escape::Escaped,
    parse_document,
};

fn esc(s: &str) -> Escaped {
    Escaped::escape(s)
}

#[test]
fn empty_document() {
    let doc = parse_document("");
    assert!(doc.blocks.is_empty());
    assert!(doc.fences.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n  \n").blocks.is_empty());
}

#[rstest]
#[case("a\r\n\r\nb")]
#[case("a\r\rb")]
#[case("a\n\nb")]
fn line_endings_are_normalized(#[case] md: &str) {
    assert_eq!(
        parse_document(md).blocks,
        vec![Block::Paragraph(esc("a")), Block::Paragraph(esc("b"))]
    );
}

#[test]
fn fence_contents_are_not_parsed_as_markdown() {
    let doc = parse_document("```md\n# heading\n- item\n| a | b |\n|---|---|\n```");
    assert_eq!(doc.blocks.len(), 1);
    let Block::Code(id) = doc.blocks[0] else {
        panic!("expected code block, got {:?}", doc.blocks[0]);
    };
    let code = doc.fences.get(id).unwrap();
    assert_eq!(code.language, "md");
    assert_eq!(code.body, "# heading\n- item\n| a | b |\n|---|---|");
}

#[test]
fn fence_breaks_paragraph() {
    let doc = parse_document("before\n```\nx\n```\nafter");
    assert_eq!(doc.blocks.len(), 3);
    assert_eq!(doc.blocks[0], Block::Paragraph(esc("before")));
    assert!(matches!(doc.blocks[1], Block::Code(_)));
    assert_eq!(doc.blocks[2], Block::Paragraph(esc("after")));
}

#[test]
fn unterminated_fence_opening_line_is_text() {
    let doc = parse_document("```js\nlet a = 1;");
    assert!(doc.fences.is_empty());
    assert_eq!(doc.blocks, vec![Block::Paragraph(esc("```js\nlet a = 1;"))]);
}

#[test]
fn fence_ends_table() {
    let doc = parse_document("| a |\n|---|\n| 1 |\n```\ncode | x\n```");
    assert_eq!(doc.blocks.len(), 2);
    let Block::Table(table) = &doc.blocks[0] else {
        panic!("expected table");
    };
    assert_eq!(table.rows, vec![vec![esc("1")]]);
    assert!(matches!(doc.blocks[1], Block::Code(_)));
}

#[test]
fn text_is_escaped_before_block_parsing() {
    let doc = parse_document("# a <b> & c");
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: 1,
            text: esc("a <b> & c")
        }]
    );
    let Block::Heading { text, .. } = &doc.blocks[0] else {
        unreachable!()
    };
    assert_eq!(text.as_str(), "a &lt;b&gt; &amp; c");
}

#[test]
fn quote_marker_is_recognised_after_escaping() {
    assert_eq!(
        parse_document("> quoted <x>\n> more").blocks,
        vec![Block::BlockQuote {
            lines: vec![esc("quoted <x>"), esc("more")]
        }]
    );
}

#[test]
fn ragged_table_rows_keep_their_cells() {
    let doc = parse_document("| a | b |\n|---|---:|\n| 1 |\n| 1 | 2 | 3 |");
    let Block::Table(table) = &doc.blocks[0] else {
        panic!("expected table");
    };
    assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
    assert_eq!(
        table.rows,
        vec![vec![esc("1")], vec![esc("1"), esc("2"), esc("3")]]
    );
}

#[test]
fn malformed_separator_falls_through_to_paragraph() {
    assert_eq!(
        parse_document("| a | b |\n| -- | -- |").blocks,
        vec![Block::Paragraph(esc("| a | b |\n| -- | -- |"))]
    );
}

#[test]
fn mixed_document() {
    let md = "# Title\n\nIntro text.\n\n- one\n- two\n\n1. first\n2. second\n\n---\n\n> note";
    let kinds: Vec<&str> = parse_document(md)
        .blocks
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::Rule => "rule",
            Block::BlockQuote { .. } => "quote",
            Block::List {
                kind: ListKind::Unordered,
                ..
            } => "ul",
            Block::List {
                kind: ListKind::Ordered,
                ..
            } => "ol",
            Block::Table(_) => "table",
            Block::Paragraph(_) => "paragraph",
            Block::Code(_) => "code",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["heading", "paragraph", "ul", "ol", "rule", "quote"]
    );
}
