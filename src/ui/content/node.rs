//! Typed content model produced by the rendering pipeline.
//!
//! Every value here is a fresh, immutable snapshot of one parse call. Nothing
//! aliases back into the transcript: re-parsing a growing message replaces the
//! previous tree wholesale.

/// Span-level node recognized inside a single line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Verbatim text between recognized constructs.
    Text(String),
    /// `**text**`
    Bold(String),
    /// `_text_`
    Italic(String),
    /// `[text](url)` with an http(s) URL.
    Link { text: String, url: String },
}

impl InlineNode {
    /// The text a reader sees for this node.
    pub fn display_text(&self) -> &str {
        match self {
            InlineNode::Text(s) | InlineNode::Bold(s) | InlineNode::Italic(s) => s,
            InlineNode::Link { text, .. } => text,
        }
    }

    /// The exact source span this node was parsed from.
    pub fn source_text(&self) -> String {
        match self {
            InlineNode::Text(s) => s.clone(),
            InlineNode::Bold(s) => format!("**{s}**"),
            InlineNode::Italic(s) => format!("_{s}_"),
            InlineNode::Link { text, url } => format!("[{text}]({url})"),
        }
    }
}

/// A parsed `[BUTTON:label|payload]` directive. Activating the button sends
/// `payload` as the user's next message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDirective {
    pub label: String,
    pub payload: String,
}

impl ButtonDirective {
    pub fn source_text(&self) -> String {
        format!("[BUTTON:{}|{}]", self.label, self.payload)
    }
}

/// Block-level node in a rendered message.
///
/// Buttons never sit inside a paragraph's inline sequence; they are hoisted
/// into a `ButtonRow` sibling immediately after the paragraph (or list) whose
/// source line produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(Vec<InlineNode>),
    CodeBlock { language: String, code: String },
    List { ordered: bool, items: Vec<Vec<InlineNode>> },
    /// The fixed FHEVM data-flow panel, triggered by its directive line.
    DataFlowDiagram,
    ButtonRow(Vec<ButtonDirective>),
}

impl ContentBlock {
    pub fn is_button_row(&self) -> bool {
        matches!(self, ContentBlock::ButtonRow(_))
    }

    /// Concatenated display text of the block, used by coverage tests and by
    /// plain-text transcript export.
    pub fn display_text(&self) -> String {
        match self {
            ContentBlock::Paragraph(nodes) => {
                nodes.iter().map(InlineNode::display_text).collect()
            }
            ContentBlock::CodeBlock { code, .. } => code.clone(),
            ContentBlock::List { items, .. } => items
                .iter()
                .map(|item| item.iter().map(InlineNode::display_text).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n"),
            ContentBlock::DataFlowDiagram => String::new(),
            ContentBlock::ButtonRow(buttons) => buttons
                .iter()
                .map(|b| b.label.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
