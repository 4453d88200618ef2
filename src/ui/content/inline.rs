//! Span-level scanner for a single line of message text.
//!
//! The grammar is a fixed set of alternatives tried left to right: the match
//! starting earliest wins, and among alternatives starting at the same byte
//! the one listed first in [`match_at`] wins. Anything that does not match
//! falls through to plain text, so scanning never fails — partial constructs
//! mid-stream simply under-recognize until a later chunk closes them.

use memchr::{memchr, memchr3};

use super::node::{ButtonDirective, InlineNode};
use crate::utils::url::is_http_url;

/// Tag the model emits to switch the surrounding app into guide mode. The
/// renderer consumes it silently; the session layer observes it on the raw
/// string (see `core::session::deployment_guide_requested`).
pub const DEPLOYMENT_GUIDE_TAG: &str = "[DEPLOYMENT_GUIDE_UI]";

const BUTTON_PREFIX: &str = "[BUTTON:";

/// Output of scanning one line: inline nodes in source order, plus any button
/// directives hoisted out of the text flow.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InlineParse {
    pub nodes: Vec<InlineNode>,
    pub buttons: Vec<ButtonDirective>,
}

impl InlineParse {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.buttons.is_empty()
    }
}

enum Token {
    Node(InlineNode),
    Button(ButtonDirective),
    /// Recognized and consumed, but renders as nothing.
    ControlTag,
}

struct TokenMatch {
    token: Token,
    end: usize,
}

/// Scan `text` into inline nodes. `allow_buttons` reflects whether the caller
/// supplied a send callback: without one, `[BUTTON:…]` directives are left in
/// the text verbatim rather than becoming dead controls.
pub fn parse_inline(text: &str, allow_buttons: bool) -> InlineParse {
    let bytes = text.as_bytes();
    let mut out = InlineParse::default();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        // Every construct opens with '[', '*', or '_'; skip ahead to the
        // next candidate byte (all three are ASCII, so the offset is always
        // a char boundary).
        let Some(off) = memchr3(b'[', b'*', b'_', &bytes[pos..]) else {
            break;
        };
        let at = pos + off;
        match match_at(text, at, allow_buttons) {
            Some(m) => {
                if at > plain_start {
                    out.nodes
                        .push(InlineNode::Text(text[plain_start..at].to_string()));
                }
                match m.token {
                    Token::Node(node) => out.nodes.push(node),
                    Token::Button(button) => out.buttons.push(button),
                    Token::ControlTag => {}
                }
                pos = m.end;
                plain_start = m.end;
            }
            None => pos = at + 1,
        }
    }

    if plain_start < text.len() {
        out.nodes
            .push(InlineNode::Text(text[plain_start..].to_string()));
    }
    out
}

fn match_at(text: &str, at: usize, allow_buttons: bool) -> Option<TokenMatch> {
    match_link(text, at)
        .or_else(|| match_control_tag(text, at))
        .or_else(|| match_bold(text, at))
        .or_else(|| match_italic(text, at))
        .or_else(|| {
            if allow_buttons {
                match_button(text, at)
            } else {
                None
            }
        })
}

/// `[text](url)` where `url` is http(s). Label stops at the first `]`, URL at
/// the first `)`.
fn match_link(text: &str, at: usize) -> Option<TokenMatch> {
    let bytes = text.as_bytes();
    if bytes[at] != b'[' {
        return None;
    }
    let close = at + 1 + memchr(b']', &bytes[at + 1..])?;
    if close == at + 1 {
        return None;
    }
    if bytes.get(close + 1) != Some(&b'(') {
        return None;
    }
    let paren = close + 2 + memchr(b')', &bytes[close + 2..])?;
    let url = &text[close + 2..paren];
    if !is_http_url(url) {
        return None;
    }
    Some(TokenMatch {
        token: Token::Node(InlineNode::Link {
            text: text[at + 1..close].to_string(),
            url: url.to_string(),
        }),
        end: paren + 1,
    })
}

fn match_control_tag(text: &str, at: usize) -> Option<TokenMatch> {
    if text[at..].starts_with(DEPLOYMENT_GUIDE_TAG) {
        Some(TokenMatch {
            token: Token::ControlTag,
            end: at + DEPLOYMENT_GUIDE_TAG.len(),
        })
    } else {
        None
    }
}

/// `**text**`, shortest match, at least one character.
fn match_bold(text: &str, at: usize) -> Option<TokenMatch> {
    let rest = text.get(at..)?.strip_prefix("**")?;
    let close = rest.find("**")?;
    if close == 0 {
        return None;
    }
    let content = &rest[..close];
    if content.contains('\n') {
        return None;
    }
    Some(TokenMatch {
        token: Token::Node(InlineNode::Bold(content.to_string())),
        end: at + 2 + close + 2,
    })
}

/// `_text_`, shortest match, no embedded underscore.
fn match_italic(text: &str, at: usize) -> Option<TokenMatch> {
    let bytes = text.as_bytes();
    if bytes[at] != b'_' {
        return None;
    }
    let close = at + 1 + memchr(b'_', &bytes[at + 1..])?;
    if close == at + 1 {
        return None;
    }
    let content = &text[at + 1..close];
    if content.contains('\n') {
        return None;
    }
    Some(TokenMatch {
        token: Token::Node(InlineNode::Italic(content.to_string())),
        end: close + 1,
    })
}

/// `[BUTTON:label|payload]`. The first `|` separates label from payload; the
/// payload ends at the first `]`. Both parts must be non-empty.
fn match_button(text: &str, at: usize) -> Option<TokenMatch> {
    if !text[at..].starts_with(BUTTON_PREFIX) {
        return None;
    }
    let bytes = text.as_bytes();
    let label_start = at + BUTTON_PREFIX.len();
    let pipe = label_start + memchr(b'|', &bytes[label_start..])?;
    if pipe == label_start {
        return None;
    }
    let close = pipe + 1 + memchr(b']', &bytes[pipe + 1..])?;
    if close == pipe + 1 {
        return None;
    }
    Some(TokenMatch {
        token: Token::Button(ButtonDirective {
            label: text[label_start..pipe].to_string(),
            payload: text[pipe + 1..close].to_string(),
        }),
        end: close + 1,
    })
}
