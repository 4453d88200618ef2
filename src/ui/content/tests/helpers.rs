use crate::ui::content::{ContentBlock, InlineNode};

/// Concatenated source text of an inline sequence, used to check that the
/// scanner visits every character exactly once.
pub fn inline_source(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::source_text).collect()
}

pub fn paragraph_text(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Paragraph(nodes) => {
            nodes.iter().map(InlineNode::display_text).collect()
        }
        other => panic!("expected paragraph, got {other:?}"),
    }
}

pub fn assert_paragraph(block: &ContentBlock, expected: &str) {
    assert_eq!(paragraph_text(block), expected);
}

pub fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_string())
}
