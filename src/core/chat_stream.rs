//! Streaming transport for tutor replies.
//!
//! Replies arrive as server-sent events from an OpenAI-compatible endpoint.
//! Each `data:` payload becomes a [`StreamEvent::Chunk`] on an unbounded
//! channel; the UI appends chunks to the open reply and re-renders. Events
//! carry a stream id so the receiver can ignore stragglers from a stream the
//! user already cancelled.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use memchr::memchr;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::api::{ApiMessage, ChatRequest, ChatResponse};
use crate::utils::url::construct_api_url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamEvent {
    Chunk(String),
    Error(String),
    End,
}

pub type EventSender = mpsc::UnboundedSender<(StreamEvent, u64)>;
pub type EventReceiver = mpsc::UnboundedReceiver<(StreamEvent, u64)>;

pub struct StreamParams {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub messages: Vec<ApiMessage>,
    pub cancel_token: CancellationToken,
    pub stream_id: u64,
}

/// Transport seam. Production uses [`HttpBackend`]; tests script replies
/// without a network.
#[async_trait]
pub trait ChatBackend: Send + Sync + 'static {
    async fn stream(&self, params: StreamParams, events: EventSender);
}

#[derive(Clone)]
pub struct ChatStreamService {
    backend: Arc<dyn ChatBackend>,
    tx: EventSender,
}

impl ChatStreamService {
    pub fn new(backend: Arc<dyn ChatBackend>) -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { backend, tx }, rx)
    }

    pub fn spawn_stream(&self, params: StreamParams) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            backend.stream(params, tx).await;
        });
    }
}

pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn run(&self, params: &StreamParams, events: &EventSender) -> Result<(), String> {
        let url = construct_api_url(&params.base_url, "chat/completions");
        let request = ChatRequest {
            model: params.model.clone(),
            messages: params.messages.clone(),
            stream: true,
        };
        debug!(model = %params.model, "starting completion stream");

        let response = self
            .client
            .post(url)
            .bearer_auth(&params.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("API returned {status}: {}", body.trim()));
        }

        let mut body = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| format!("stream read failed: {e}"))?;
            buffer.extend_from_slice(&chunk);
            while let Some(nl) = memchr(b'\n', &buffer) {
                let line: Vec<u8> = buffer.drain(..=nl).collect();
                let line = String::from_utf8_lossy(&line);
                if process_sse_line(line.trim_end(), events, params.stream_id) {
                    return Ok(());
                }
            }
        }
        let _ = events.send((StreamEvent::End, params.stream_id));
        Ok(())
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn stream(&self, params: StreamParams, events: EventSender) {
        let stream_id = params.stream_id;
        tokio::select! {
            _ = params.cancel_token.cancelled() => {
                debug!(stream_id, "stream cancelled");
                let _ = events.send((StreamEvent::End, stream_id));
            }
            result = self.run(&params, &events) => {
                if let Err(message) = result {
                    warn!(stream_id, %message, "stream failed");
                    let _ = events.send((StreamEvent::Error(message), stream_id));
                    let _ = events.send((StreamEvent::End, stream_id));
                }
            }
        }
    }
}

fn extract_data_payload(line: &str) -> Option<&str> {
    line.strip_prefix("data:").map(str::trim_start)
}

/// Handle one SSE line. Returns true once the stream is complete.
fn process_sse_line(line: &str, events: &EventSender, stream_id: u64) -> bool {
    let Some(payload) = extract_data_payload(line) else {
        return false;
    };
    if payload == "[DONE]" {
        let _ = events.send((StreamEvent::End, stream_id));
        return true;
    }
    match serde_json::from_str::<ChatResponse>(payload) {
        Ok(response) => {
            if let Some(content) = response
                .choices
                .first()
                .and_then(|choice| choice.delta.content.as_ref())
            {
                let _ = events.send((StreamEvent::Chunk(content.clone()), stream_id));
            }
            false
        }
        Err(_) if payload.trim().is_empty() => false,
        Err(_) => {
            let _ = events.send((StreamEvent::Error(format!("API error: {payload}")), stream_id));
            let _ = events.send((StreamEvent::End, stream_id));
            true
        }
    }
}
