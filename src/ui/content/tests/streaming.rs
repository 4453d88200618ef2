use super::helpers::assert_paragraph;
use crate::ui::content::{parse_blocks, ContentBlock};

const CLOSED_DOC: &str = "Welcome **dev**!\n\n```solidity\nuint64 tally;\nfunction vote() public {}\n```\nSteps:\n1. encrypt\n2. submit\n[FHEVM_DATA_FLOW_VISUALIZATION]\nMore at [docs](https://docs.zama.ai)\n[BUTTON:Continue|next]";

#[test]
fn unterminated_fence_degrades_to_verbatim_paragraphs() {
    let blocks = parse_blocks("```solidity\nuint x", true);
    assert_eq!(blocks.len(), 2);
    assert_paragraph(&blocks[0], "```solidity");
    assert_paragraph(&blocks[1], "uint x");
    assert!(!blocks.iter().any(|b| matches!(b, ContentBlock::CodeBlock { .. })));
}

#[test]
fn fence_resolves_once_the_closing_marker_arrives() {
    let open = "```solidity\nuint x";
    let closed = "```solidity\nuint x = 1;\n```";
    assert!(!parse_blocks(open, true)
        .iter()
        .any(|b| matches!(b, ContentBlock::CodeBlock { .. })));
    assert!(parse_blocks(closed, true)
        .iter()
        .any(|b| matches!(b, ContentBlock::CodeBlock { .. })));
}

#[test]
fn every_truncation_point_parses_without_panicking() {
    let boundaries: Vec<usize> = CLOSED_DOC
        .char_indices()
        .map(|(i, _)| i)
        .chain([CLOSED_DOC.len()])
        .collect();
    for at in boundaries {
        // Totality is the property under test: any prefix parses.
        let _ = parse_blocks(&CLOSED_DOC[..at], true);
        let _ = parse_blocks(&CLOSED_DOC[..at], false);
    }
}

#[test]
fn closed_blocks_are_stable_across_prefix_growth() {
    // Prefix ends right after the closing fence, so every block in it is
    // fully closed; growing the content must not change those blocks.
    let fence_end = CLOSED_DOC.find("```\n").expect("closing fence") + 3;
    let prefix = &CLOSED_DOC[..fence_end];
    let from_prefix = parse_blocks(prefix, true);
    let from_full = parse_blocks(CLOSED_DOC, true);
    assert!(from_full.len() >= from_prefix.len());
    for (got, expected) in from_full.iter().zip(&from_prefix) {
        assert_eq!(got, expected);
    }
}

#[test]
fn reparse_of_a_growing_message_converges() {
    // Simulate chunked streaming: accumulate and re-parse on every chunk,
    // keeping only the final result, as the renderer does.
    let mut accumulated = String::new();
    let mut last = Vec::new();
    for chunk in CLOSED_DOC.as_bytes().chunks(7) {
        accumulated.push_str(std::str::from_utf8(chunk).expect("ascii fixture"));
        last = parse_blocks(&accumulated, true);
    }
    assert_eq!(last, parse_blocks(CLOSED_DOC, true));
}
