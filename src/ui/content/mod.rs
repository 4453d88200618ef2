//! The message-content rendering pipeline: raw model output in, an ordered
//! sequence of typed content blocks out.
//!
//! [`block`] owns the multi-line constructs (code fences, the data-flow
//! directive, list runs) and paragraph assembly; [`inline`] owns span-level
//! decorations within a line. Both are pure and total: any text that fails to
//! match a construct degrades to plain text, which is what makes re-parsing a
//! half-streamed message safe on every chunk.

mod block;
mod inline;
mod node;

pub use block::{parse_blocks, DATA_FLOW_TAG};
pub use inline::{parse_inline, InlineParse, DEPLOYMENT_GUIDE_TAG};
pub use node::{ButtonDirective, ContentBlock, InlineNode};

#[cfg(test)]
mod tests;
