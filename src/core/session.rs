//! Conversation state and the control-tag side channel.
//!
//! The session owns the transcript and applies the guide-mode signal. Signal
//! detection is deliberately independent of rendering: the renderer strips
//! `[DEPLOYMENT_GUIDE_UI]` from view while [`deployment_guide_requested`]
//! observes it on the same raw string, so the two can be tested (and
//! reasoned about) in isolation.

use tracing::debug;

use crate::api::ApiMessage;
use crate::core::message::{Message, Sender};
use crate::ui::content::DEPLOYMENT_GUIDE_TAG;

/// Exact user message that kicks off the interactive deployment guide.
pub const START_DEPLOYMENT_GUIDE: &str = "[START_DEPLOYMENT_GUIDE]";

/// Number of transcript messages sent to the API as context.
const HISTORY_WINDOW: usize = 10;

/// Pure observer for the guide-mode signal, applied to raw message content.
pub fn deployment_guide_requested(content: &str) -> bool {
    content.contains(DEPLOYMENT_GUIDE_TAG)
}

/// Transcript plus streaming bookkeeping for one tutoring conversation.
#[derive(Debug, Default)]
pub struct Session {
    messages: Vec<Message>,
    guide_active: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn guide_active(&self) -> bool {
        self.guide_active
    }

    /// True while the last message is a model reply still being streamed
    /// into (callers flip this off via [`Session::finish_reply`]).
    pub fn last_is_model(&self) -> bool {
        self.messages
            .last()
            .is_some_and(|m| m.role == Sender::Model)
    }

    /// Record a user message and open an empty model reply for streaming.
    /// Returns the index of the reply message.
    pub fn push_exchange(&mut self, text: impl Into<String>) -> usize {
        self.messages.push(Message::user(text));
        self.open_reply()
    }

    /// Open a model reply without a visible user turn, used for system
    /// triggers like the deployment-guide kickoff.
    pub fn open_reply(&mut self) -> usize {
        self.messages.push(Message::model(""));
        self.messages.len() - 1
    }

    /// Append a streamed chunk to the reply at `index`. The content grows
    /// monotonically; each append invalidates the previous render.
    pub fn append_chunk(&mut self, index: usize, chunk: &str) {
        if let Some(message) = self.messages.get_mut(index) {
            message.content.push_str(chunk);
        }
    }

    /// Close out a streamed reply: inspect the raw content for the guide
    /// signal and return whether guide mode just switched on.
    pub fn finish_reply(&mut self, index: usize) -> bool {
        let Some(message) = self.messages.get(index) else {
            return false;
        };
        if !self.guide_active && deployment_guide_requested(&message.content) {
            debug!(index, "deployment guide signal detected");
            self.guide_active = true;
            return true;
        }
        false
    }

    /// Replace a failed reply with an error notice.
    pub fn fail_reply(&mut self, index: usize, notice: impl Into<String>) {
        if let Some(message) = self.messages.get_mut(index) {
            message.content = notice.into();
        }
    }

    /// Reset the transcript, e.g. when restarting into the guide.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The trailing window of the transcript in wire format, excluding the
    /// still-empty reply slot at `reply_index`.
    pub fn api_history(&self, reply_index: usize) -> Vec<ApiMessage> {
        self.messages
            .iter()
            .enumerate()
            .filter(|(i, m)| *i != reply_index && !m.content.is_empty())
            .map(|(_, m)| ApiMessage {
                role: m.role.to_api_role().to_string(),
                content: m.content.clone(),
            })
            .rev()
            .take(HISTORY_WINDOW)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect()
    }
}
