use super::helpers::{inline_source, text};
use crate::ui::content::{parse_inline, InlineNode};

#[test]
fn plain_text_passes_through() {
    let parsed = parse_inline("just some words", true);
    assert_eq!(parsed.nodes, vec![text("just some words")]);
    assert!(parsed.buttons.is_empty());
}

#[test]
fn empty_input_yields_empty_sequences() {
    let parsed = parse_inline("", true);
    assert!(parsed.nodes.is_empty());
    assert!(parsed.buttons.is_empty());
}

#[test]
fn bold_then_link_then_trailing_text() {
    let parsed = parse_inline("**Note:** see [docs](https://example.com) now", true);
    assert_eq!(
        parsed.nodes,
        vec![
            InlineNode::Bold("Note:".into()),
            text(" see "),
            InlineNode::Link {
                text: "docs".into(),
                url: "https://example.com".into(),
            },
            text(" now"),
        ]
    );
}

#[test]
fn bold_is_shortest_match() {
    let parsed = parse_inline("**a** and **b**", true);
    assert_eq!(
        parsed.nodes,
        vec![
            InlineNode::Bold("a".into()),
            text(" and "),
            InlineNode::Bold("b".into()),
        ]
    );
}

#[test]
fn unterminated_bold_stays_plain() {
    let parsed = parse_inline("**still open", true);
    assert_eq!(parsed.nodes, vec![text("**still open")]);
}

#[test]
fn empty_bold_does_not_match() {
    let parsed = parse_inline("**** nothing", true);
    assert_eq!(parsed.nodes, vec![text("**** nothing")]);
}

#[test]
fn italic_with_underscores() {
    let parsed = parse_inline("an _encrypted_ value", true);
    assert_eq!(
        parsed.nodes,
        vec![
            text("an "),
            InlineNode::Italic("encrypted".into()),
            text(" value"),
        ]
    );
}

#[test]
fn unterminated_italic_stays_plain() {
    let parsed = parse_inline("euint32_value", true);
    assert_eq!(parsed.nodes, vec![text("euint32_value")]);
}

#[test]
fn link_requires_http_scheme() {
    let parsed = parse_inline("[docs](ftp://example.com)", true);
    assert_eq!(parsed.nodes, vec![text("[docs](ftp://example.com)")]);
}

#[test]
fn link_with_https_and_http() {
    for url in ["https://docs.zama.ai", "http://localhost:8545"] {
        let parsed = parse_inline(&format!("see [here]({url})."), true);
        assert_eq!(
            parsed.nodes,
            vec![
                text("see "),
                InlineNode::Link {
                    text: "here".into(),
                    url: url.into(),
                },
                text("."),
            ]
        );
    }
}

#[test]
fn control_tag_is_consumed_silently() {
    let parsed = parse_inline("before [DEPLOYMENT_GUIDE_UI] after", true);
    assert_eq!(parsed.nodes, vec![text("before "), text(" after")]);
    assert!(parsed.buttons.is_empty());
}

#[test]
fn lone_control_tag_parses_to_nothing() {
    let parsed = parse_inline("[DEPLOYMENT_GUIDE_UI]", true);
    assert!(parsed.is_empty());
}

#[test]
fn malformed_brackets_fall_through() {
    for input in ["[unclosed", "[text](", "[](https://example.com)", "[a]b"] {
        let parsed = parse_inline(input, true);
        assert_eq!(parsed.nodes, vec![text(input)], "input: {input}");
    }
}

#[test]
fn earliest_match_wins_over_later_constructs() {
    let parsed = parse_inline("_i_ then **b**", true);
    assert_eq!(
        parsed.nodes,
        vec![
            InlineNode::Italic("i".into()),
            text(" then "),
            InlineNode::Bold("b".into()),
        ]
    );
}

#[test]
fn recognized_spans_cover_the_input_exactly() {
    let input = "**bold** _it_ [docs](https://example.com) plain tail";
    let parsed = parse_inline(input, false);
    assert_eq!(inline_source(&parsed.nodes), input);
}
