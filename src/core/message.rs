use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sender {
    User,
    Model,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Model => "model",
        }
    }

    /// Role string used on the wire. The tutor API speaks the
    /// OpenAI-compatible dialect, which calls the model "assistant".
    pub fn to_api_role(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Model => "assistant",
        }
    }

    pub fn is_user(self) -> bool {
        self == Sender::User
    }
}

impl TryFrom<&str> for Sender {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Sender::User),
            "model" | "assistant" => Ok(Sender::Model),
            _ => Err(format!("invalid sender role: {value}")),
        }
    }
}

impl TryFrom<String> for Sender {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Sender> for String {
    fn from(value: Sender) -> Self {
        value.as_str().to_string()
    }
}

/// One transcript entry. During a streaming reply the same message's
/// `content` grows monotonically until the stream ends; the renderer
/// re-parses the whole string on each append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Sender,
    pub content: String,
}

impl Message {
    pub fn new(role: Sender, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(Sender::Model, content)
    }

    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }

    /// Topic selections arrive as the prompt wrapped in `*…*`; they are
    /// displayed de-starred and italicized rather than as raw markup.
    pub fn is_topic_selection(&self) -> bool {
        self.role.is_user()
            && self.content.len() >= 2
            && self.content.starts_with('*')
            && self.content.ends_with('*')
    }

    /// Content with the topic-selection markers stripped, when present.
    pub fn display_content(&self) -> &str {
        if self.is_topic_selection() {
            &self.content[1..self.content.len() - 1]
        } else {
            &self.content
        }
    }
}

/// Wrap a learning-path prompt in the topic-selection markers.
pub fn topic_selection(prompt: &str) -> String {
    format!("*{prompt}*")
}
