//! Block-level scanner over a full (possibly still streaming) message.
//!
//! The scan walks the content left to right looking for the earliest block
//! match — fenced code, the data-flow directive line, or a list run — with
//! that precedence on ties. Text between matches is split on line breaks and
//! handed to the inline scanner one line at a time. An unterminated construct
//! (an open fence mid-stream, say) simply fails to match and its text rides
//! along as paragraphs until a later chunk closes it; the scan never fails.

use super::inline::parse_inline;
use super::node::{ButtonDirective, ContentBlock};

/// Directive line that renders as the fixed FHEVM data-flow panel.
pub const DATA_FLOW_TAG: &str = "[FHEVM_DATA_FLOW_VISUALIZATION]";

const FENCE: &str = "```";

/// Parse a message body into ordered content blocks. `can_send` reflects
/// whether button directives can actually send anything; when false they
/// degrade to visible text.
pub fn parse_blocks(content: &str, can_send: bool) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(m) = next_block(content, cursor, can_send) {
        if m.start > cursor {
            push_text_lines(&content[cursor..m.start], can_send, &mut blocks);
        }
        blocks.push(m.block);
        if !m.buttons.is_empty() {
            blocks.push(ContentBlock::ButtonRow(m.buttons));
        }
        cursor = m.end;
    }
    if cursor < content.len() {
        push_text_lines(&content[cursor..], can_send, &mut blocks);
    }
    blocks
}

struct BlockMatch {
    start: usize,
    end: usize,
    block: ContentBlock,
    /// Buttons hoisted out of list items; empty for other block kinds.
    buttons: Vec<ButtonDirective>,
}

fn next_block(content: &str, from: usize, can_send: bool) -> Option<BlockMatch> {
    let candidates = [
        find_fence(content, from),
        find_diagram(content, from),
        find_list(content, from, can_send),
    ];
    // Earliest start wins; the array order breaks ties.
    candidates
        .into_iter()
        .flatten()
        .min_by_key(|m| m.start)
}

/// ```` ```lang\n…\n``` ````. The language token is `\w*`; an opening fence
/// without a closing one is not a match at all.
fn find_fence(content: &str, from: usize) -> Option<BlockMatch> {
    let mut search = from;
    while let Some(off) = content[search..].find(FENCE) {
        let start = search + off;
        if let Some(m) = fence_at(content, start) {
            return Some(m);
        }
        search = start + 1;
    }
    None
}

fn fence_at(content: &str, start: usize) -> Option<BlockMatch> {
    let bytes = content.as_bytes();
    let lang_start = start + FENCE.len();
    let lang_len = content[lang_start..]
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    let after_lang = lang_start + lang_len;
    if bytes.get(after_lang) != Some(&b'\n') {
        return None;
    }
    let body_start = after_lang + 1;
    let close = body_start + content[body_start..].find("\n```")?;

    // One leading/trailing newline is fence framing, not payload; interior
    // blank lines and indentation are preserved exactly.
    let mut code = &content[body_start..close];
    code = code.strip_prefix('\n').unwrap_or(code);
    code = code.strip_suffix('\n').unwrap_or(code);

    let language = if lang_len == 0 {
        "plaintext".to_string()
    } else {
        content[lang_start..after_lang].to_string()
    };
    Some(BlockMatch {
        start,
        end: close + 1 + FENCE.len(),
        block: ContentBlock::CodeBlock {
            language,
            code: code.to_string(),
        },
        buttons: Vec::new(),
    })
}

/// A line whose trimmed content is exactly the data-flow tag. The match
/// consumes the full line including its trailing newline; a mid-line
/// occurrence of the tag stays plain text.
fn find_diagram(content: &str, from: usize) -> Option<BlockMatch> {
    let mut search = from;
    while let Some(off) = content[search..].find(DATA_FLOW_TAG) {
        let at = search + off;
        let line_start = content[..at].rfind('\n').map(|i| i + 1).unwrap_or(0);
        if line_start >= from {
            let line_end = content[at..]
                .find('\n')
                .map(|i| at + i + 1)
                .unwrap_or(content.len());
            if content[line_start..line_end].trim() == DATA_FLOW_TAG {
                return Some(BlockMatch {
                    start: line_start,
                    end: line_end,
                    block: ContentBlock::DataFlowDiagram,
                    buttons: Vec::new(),
                });
            }
        }
        search = at + 1;
    }
    None
}

/// A run of consecutive lines each starting (after indentation) with `-`,
/// `*`, or `N.` followed by whitespace. The first line's marker alone decides
/// whether the whole run is ordered, even if later lines mix styles.
fn find_list(content: &str, from: usize, can_send: bool) -> Option<BlockMatch> {
    let mut line_start = start_of_next_line(content, from)?;

    // Find the first list line.
    loop {
        let line_end = end_of_line(content, line_start);
        if list_item_text(&content[line_start..line_end]).is_some() {
            break;
        }
        if line_end == content.len() {
            return None;
        }
        line_start = line_end + 1;
    }

    let start = line_start;
    let mut ordered = false;
    let mut items = Vec::new();
    let mut buttons = Vec::new();
    let mut end = start;

    while line_start < content.len() {
        let line_end = end_of_line(content, line_start);
        let Some((is_ordered, item)) = list_item_text(&content[line_start..line_end]) else {
            break;
        };
        if items.is_empty() {
            ordered = is_ordered;
        }
        let mut parsed = parse_inline(item, can_send);
        items.push(parsed.nodes);
        buttons.append(&mut parsed.buttons);

        end = if line_end < content.len() {
            line_end + 1
        } else {
            line_end
        };
        if line_end == content.len() {
            break;
        }
        line_start = line_end + 1;
    }

    Some(BlockMatch {
        start,
        end,
        block: ContentBlock::List { ordered, items },
        buttons,
    })
}

/// Match one line against the list-item pattern, returning whether its marker
/// is ordered and the item text with marker and surrounding whitespace
/// stripped.
fn list_item_text(line: &str) -> Option<(bool, &str)> {
    let trimmed = line.trim_start();
    let (ordered, after_marker) = if let Some(rest) = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
    {
        (false, rest)
    } else {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        (true, trimmed[digits..].strip_prefix('.')?)
    };
    if !after_marker.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    Some((ordered, after_marker.trim_start()))
}

/// First line start at or after `from` (`from` itself when it sits at a line
/// boundary). `None` when no further line begins before the end of input.
fn start_of_next_line(content: &str, from: usize) -> Option<usize> {
    if from >= content.len() {
        return None;
    }
    if from == 0 || content.as_bytes()[from - 1] == b'\n' {
        return Some(from);
    }
    content[from..].find('\n').and_then(|i| {
        let next = from + i + 1;
        (next < content.len()).then_some(next)
    })
}

fn end_of_line(content: &str, line_start: usize) -> usize {
    content[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(content.len())
}

/// Interstitial text: one paragraph per non-blank line, with any buttons that
/// line produced emitted as a sibling row right after it. A line that parses
/// to nothing visible (a lone control tag) produces no node.
fn push_text_lines(span: &str, can_send: bool, blocks: &mut Vec<ContentBlock>) {
    for line in span.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_inline(line, can_send);
        if !parsed.nodes.is_empty() {
            blocks.push(ContentBlock::Paragraph(parsed.nodes));
        }
        if !parsed.buttons.is_empty() {
            blocks.push(ContentBlock::ButtonRow(parsed.buttons));
        }
    }
}
