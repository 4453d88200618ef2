use super::helpers::{assert_paragraph, text};
use crate::ui::content::{parse_blocks, ButtonDirective, ContentBlock, InlineNode, DATA_FLOW_TAG};

#[test]
fn fenced_code_block_with_language() {
    let blocks = parse_blocks("```solidity\nuint x = 1;\n```", true);
    assert_eq!(
        blocks,
        vec![ContentBlock::CodeBlock {
            language: "solidity".into(),
            code: "uint x = 1;".into(),
        }]
    );
}

#[test]
fn code_language_defaults_to_plaintext() {
    let blocks = parse_blocks("```\nsome output\n```", true);
    assert_eq!(
        blocks,
        vec![ContentBlock::CodeBlock {
            language: "plaintext".into(),
            code: "some output".into(),
        }]
    );
}

#[test]
fn code_interior_blank_lines_and_indentation_survive() {
    let blocks = parse_blocks("```js\n\nconst a = 1;\n\n  const b = 2;\n\n```", true);
    assert_eq!(
        blocks,
        vec![ContentBlock::CodeBlock {
            language: "js".into(),
            code: "const a = 1;\n\n  const b = 2;".into(),
        }]
    );
}

#[test]
fn text_around_code_block_becomes_paragraphs() {
    let blocks = parse_blocks("Here:\n```rust\nlet x = 1;\n```\nDone.", true);
    assert_eq!(blocks.len(), 3);
    assert_paragraph(&blocks[0], "Here:");
    assert!(matches!(blocks[1], ContentBlock::CodeBlock { .. }));
    assert_paragraph(&blocks[2], "Done.");
}

#[test]
fn diagram_directive_consumes_its_line() {
    let blocks = parse_blocks("Watch:\n[FHEVM_DATA_FLOW_VISUALIZATION]\nNeat.", true);
    assert_eq!(blocks.len(), 3);
    assert_paragraph(&blocks[0], "Watch:");
    assert_eq!(blocks[1], ContentBlock::DataFlowDiagram);
    assert_paragraph(&blocks[2], "Neat.");
}

#[test]
fn diagram_tag_mid_line_stays_plain_text() {
    let blocks = parse_blocks("see [FHEVM_DATA_FLOW_VISUALIZATION] inline", true);
    assert_eq!(blocks.len(), 1);
    assert_paragraph(&blocks[0], "see [FHEVM_DATA_FLOW_VISUALIZATION] inline");
}

#[test]
fn unordered_list_from_dash_and_star_markers() {
    let blocks = parse_blocks("- first\n* second\n- third", true);
    assert_eq!(
        blocks,
        vec![ContentBlock::List {
            ordered: false,
            items: vec![
                vec![text("first")],
                vec![text("second")],
                vec![text("third")],
            ],
        }]
    );
}

#[test]
fn ordered_list_from_numeric_markers() {
    let blocks = parse_blocks("1. install\n2. compile\n10. deploy", true);
    assert_eq!(
        blocks,
        vec![ContentBlock::List {
            ordered: true,
            items: vec![
                vec![text("install")],
                vec![text("compile")],
                vec![text("deploy")],
            ],
        }]
    );
}

#[test]
fn first_marker_decides_list_type() {
    // Mixed markers still form one list; the first line's marker wins.
    let blocks = parse_blocks("- a\n1. b\n- c", true);
    assert_eq!(
        blocks,
        vec![ContentBlock::List {
            ordered: false,
            items: vec![vec![text("a")], vec![text("b")], vec![text("c")]],
        }]
    );
}

#[test]
fn list_item_order_matches_line_order() {
    let input = "1. one\n2. two\n3. three\n4. four";
    let blocks = parse_blocks(input, true);
    let ContentBlock::List { items, .. } = &blocks[0] else {
        panic!("expected list");
    };
    let texts: Vec<String> = items
        .iter()
        .map(|i| i.iter().map(InlineNode::display_text).collect())
        .collect();
    assert_eq!(texts, ["one", "two", "three", "four"]);
}

#[test]
fn list_run_ends_at_first_non_matching_line() {
    let blocks = parse_blocks("- a\n- b\nnot an item", true);
    assert_eq!(blocks.len(), 2);
    assert!(matches!(
        &blocks[0],
        ContentBlock::List { items, .. } if items.len() == 2
    ));
    assert_paragraph(&blocks[1], "not an item");
}

#[test]
fn indented_markers_still_form_a_list() {
    let blocks = parse_blocks("  - indented\n  - items", true);
    assert!(matches!(
        &blocks[0],
        ContentBlock::List { ordered: false, items } if items.len() == 2
    ));
}

#[test]
fn marker_without_following_space_is_not_a_list() {
    let blocks = parse_blocks("-dash\n*star\n1.number", true);
    assert_eq!(blocks.len(), 3);
    assert!(blocks.iter().all(|b| matches!(b, ContentBlock::Paragraph(_))));
}

#[test]
fn list_items_run_through_the_inline_parser() {
    let blocks = parse_blocks("- **euint32** docs: [here](https://docs.zama.ai)", true);
    assert_eq!(
        blocks,
        vec![ContentBlock::List {
            ordered: false,
            items: vec![vec![
                InlineNode::Bold("euint32".into()),
                text(" docs: "),
                InlineNode::Link {
                    text: "here".into(),
                    url: "https://docs.zama.ai".into(),
                },
            ]],
        }]
    );
}

#[test]
fn blank_lines_produce_no_nodes() {
    let blocks = parse_blocks("first\n\n\nsecond\n   \nthird", true);
    assert_eq!(blocks.len(), 3);
    assert_paragraph(&blocks[0], "first");
    assert_paragraph(&blocks[1], "second");
    assert_paragraph(&blocks[2], "third");
}

#[test]
fn control_tag_line_renders_nothing_but_raw_string_keeps_it() {
    let raw = "Hi\n[DEPLOYMENT_GUIDE_UI]";
    let blocks = parse_blocks(raw, true);
    assert_eq!(blocks.len(), 1);
    assert_paragraph(&blocks[0], "Hi");
    // The orchestrator's side channel sees the tag on the untouched input.
    assert!(raw.contains(crate::ui::content::DEPLOYMENT_GUIDE_TAG));
}

#[test]
fn empty_input_yields_no_blocks() {
    assert!(parse_blocks("", true).is_empty());
}

#[test]
fn mixed_document_keeps_source_order() {
    let input = "Intro **bold**\n\n```js\nlet a;\n```\nSee [docs](https://example.com)\n- one\n- two\n[FHEVM_DATA_FLOW_VISUALIZATION]\nEnd";
    let blocks = parse_blocks(input, true);
    assert_eq!(blocks.len(), 6);
    assert_paragraph(&blocks[0], "Intro bold");
    assert!(matches!(&blocks[1], ContentBlock::CodeBlock { language, .. } if language == "js"));
    assert_paragraph(&blocks[2], "See docs");
    assert!(matches!(&blocks[3], ContentBlock::List { items, .. } if items.len() == 2));
    assert_eq!(blocks[4], ContentBlock::DataFlowDiagram);
    assert_paragraph(&blocks[5], "End");
}

#[test]
fn parsing_is_idempotent_on_closed_input() {
    let input = "A **b**\n```rust\nfn main() {}\n```\n- x\n- y";
    assert_eq!(parse_blocks(input, true), parse_blocks(input, true));
}

fn block_source(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Paragraph(nodes) => nodes.iter().map(InlineNode::source_text).collect(),
        ContentBlock::CodeBlock { language, code } => format!("```{language}\n{code}\n```"),
        ContentBlock::DataFlowDiagram => DATA_FLOW_TAG.to_string(),
        ContentBlock::ButtonRow(row) => row
            .iter()
            .map(ButtonDirective::source_text)
            .collect::<Vec<_>>()
            .join("\n"),
        ContentBlock::List { .. } => panic!("document under test has no lists"),
    }
}

#[test]
fn recognized_blocks_cover_the_document_exactly() {
    // One paragraph per line makes reconstruction well-defined for documents
    // without lists or blank lines; fences, the diagram line, and button
    // spans must all round-trip byte for byte.
    let input = "Intro **here**\n```solidity\nuint x;\n```\n[FHEVM_DATA_FLOW_VISUALIZATION]\nSee [docs](https://docs.zama.ai)\n[BUTTON:Go|next]";
    let blocks = parse_blocks(input, true);
    let rebuilt: Vec<String> = blocks.iter().map(block_source).collect();
    assert_eq!(rebuilt.join("\n"), input);
}
