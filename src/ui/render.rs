//! Turns parsed content blocks into terminal lines.
//!
//! Parsing and presentation stay separate: this module consumes the node
//! tree from [`crate::ui::content`] and never inspects raw message text,
//! except to hand it to the parser.

use ratatui::text::{Line, Span};

use crate::core::message::Message;
use crate::ui::content::{parse_blocks, ButtonDirective, ContentBlock, InlineNode};
use crate::ui::theme::Theme;
use crate::utils::syntax::highlight_code_block;

/// Terminal rendition of the web tutor's FhevmDataFlow card.
const DATA_FLOW_PANEL: &[&str] = &[
    "FHEVM dApp Data Flow",
    "1. Client (Browser)    plaintext \"Vote Yes\" -> fhevmjs.encrypt() -> ciphertext",
    "2. Blockchain (FHEVM)  contract computes on encrypted state: TFHE.add(votes, one)",
    "3. Client (Browser)    encrypted tally -> fhevmjs.decrypt() -> \"5\"",
];

/// A message rendered to lines, plus its activatable buttons in display
/// order (digit keys map onto this sequence).
pub struct RenderedMessage {
    pub lines: Vec<Line<'static>>,
    pub buttons: Vec<ButtonDirective>,
}

/// Render one transcript message. `can_send` reflects whether a send path is
/// attached at all; without one, button directives degrade to visible text
/// rather than becoming dead controls.
pub fn render_message(
    message: &Message,
    theme: &Theme,
    can_send: bool,
    syntax_enabled: bool,
) -> RenderedMessage {
    if message.is_user() {
        return render_user_message(message, theme);
    }

    let blocks = parse_blocks(&message.content, can_send);
    let mut lines = Vec::new();
    let mut buttons = Vec::new();
    for block in &blocks {
        push_block_lines(block, theme, syntax_enabled, &mut lines, &mut buttons);
    }
    RenderedMessage { lines, buttons }
}

fn render_user_message(message: &Message, theme: &Theme) -> RenderedMessage {
    let style = if message.is_topic_selection() {
        theme.topic_style
    } else {
        theme.user_style
    };
    let lines = message
        .display_content()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect();
    RenderedMessage {
        lines,
        buttons: Vec::new(),
    }
}

fn push_block_lines(
    block: &ContentBlock,
    theme: &Theme,
    syntax_enabled: bool,
    lines: &mut Vec<Line<'static>>,
    buttons: &mut Vec<ButtonDirective>,
) {
    match block {
        ContentBlock::Paragraph(nodes) => {
            lines.push(Line::from(inline_spans(nodes, theme)));
        }
        ContentBlock::CodeBlock { language, code } => {
            let highlighted = if syntax_enabled {
                highlight_code_block(language, code, theme)
            } else {
                None
            };
            let mut produced =
                highlighted.unwrap_or_else(|| plain_code_lines(code, theme));
            if let Some(bg) = theme.code_bg {
                for line in &mut produced {
                    for span in &mut line.spans {
                        span.style = span.style.bg(bg);
                    }
                }
            }
            lines.append(&mut produced);
        }
        ContentBlock::List { ordered, items } => {
            for (index, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("{}. ", index + 1)
                } else {
                    "\u{2022} ".to_string()
                };
                let mut spans = vec![Span::styled(marker, theme.model_style)];
                spans.extend(inline_spans(item, theme));
                lines.push(Line::from(spans));
            }
        }
        ContentBlock::DataFlowDiagram => {
            for panel_line in DATA_FLOW_PANEL {
                lines.push(Line::from(Span::styled(
                    (*panel_line).to_string(),
                    theme.diagram_style,
                )));
            }
        }
        ContentBlock::ButtonRow(row) => {
            let mut spans = Vec::new();
            for button in row {
                let number = buttons.len() + 1;
                spans.push(Span::styled(
                    format!(" [{number}] {} ", button.label),
                    theme.button_style,
                ));
                spans.push(Span::raw("  "));
                buttons.push(button.clone());
            }
            lines.push(Line::from(spans));
        }
    }
}

fn inline_spans(nodes: &[InlineNode], theme: &Theme) -> Vec<Span<'static>> {
    nodes
        .iter()
        .map(|node| match node {
            InlineNode::Text(text) => Span::styled(text.clone(), theme.model_style),
            InlineNode::Bold(text) => Span::styled(text.clone(), theme.bold_style),
            InlineNode::Italic(text) => Span::styled(text.clone(), theme.italic_style),
            InlineNode::Link { text, url } => Span::styled(
                format!("{text} ({url})"),
                theme.link_style,
            ),
        })
        .collect()
}

fn plain_code_lines(code: &str, theme: &Theme) -> Vec<Line<'static>> {
    code.split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), theme.code_style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::{topic_selection, Message};

    fn line_texts(lines: &[Line<'static>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn model_message_renders_paragraphs_and_code() {
        let message = Message::model("Here:\n```plaintext\nhello\n```");
        let rendered = render_message(&message, &Theme::default(), true, true);
        let texts = line_texts(&rendered.lines);
        assert_eq!(texts, ["Here:", "hello"]);
    }

    #[test]
    fn unknown_language_still_renders_code_text() {
        let message = Message::model("```solidity\nuint x = 1;\n```");
        let rendered = render_message(&message, &Theme::default(), true, true);
        assert_eq!(line_texts(&rendered.lines), ["uint x = 1;"]);
    }

    #[test]
    fn buttons_number_in_display_order_across_rows() {
        let message = Message::model("Pick:\n[BUTTON:Yes|1]\n[BUTTON:No|2]");
        let rendered = render_message(&message, &Theme::default(), true, false);
        assert_eq!(rendered.buttons.len(), 2);
        let texts = line_texts(&rendered.lines);
        assert!(texts[1].contains("[1] Yes"));
        assert!(texts[2].contains("[2] No"));
    }

    #[test]
    fn diagram_panel_is_fixed_and_non_empty() {
        let message = Message::model("[FHEVM_DATA_FLOW_VISUALIZATION]");
        let rendered = render_message(&message, &Theme::default(), true, false);
        assert_eq!(rendered.lines.len(), DATA_FLOW_PANEL.len());
        assert!(line_texts(&rendered.lines)[0].contains("Data Flow"));
    }

    #[test]
    fn topic_selection_displays_without_markers() {
        let message = Message::user(topic_selection("What is FHE?"));
        let rendered = render_message(&message, &Theme::default(), true, false);
        assert_eq!(line_texts(&rendered.lines), ["What is FHE?"]);
    }

    #[test]
    fn lists_get_markers_matching_their_kind() {
        let ordered = render_message(
            &Message::model("1. a\n2. b"),
            &Theme::default(),
            true,
            false,
        );
        assert_eq!(line_texts(&ordered.lines), ["1. a", "2. b"]);

        let unordered = render_message(
            &Message::model("- a\n* b"),
            &Theme::default(),
            true,
            false,
        );
        assert_eq!(line_texts(&unordered.lines), ["\u{2022} a", "\u{2022} b"]);
    }
}
