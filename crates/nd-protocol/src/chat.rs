//! Wire types for the streaming answers endpoint.
//!
//! The chat response body is NDJSON: one JSON object per line, each
//! discriminated by a `type` tag field.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Article;

/// Request body for the streaming chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatPrompt {
    /// The user's message.
    pub message: String,
    /// Thread to continue. `None` starts a new conversation; the server
    /// responds with a `THREAD_CREATED` event carrying the new uuid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_uuid: Option<String>,
    /// Restrict retrieval to these source keys. Empty means no restriction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_keys: Vec<String>,
}

impl ChatPrompt {
    /// Prompt that starts a new thread.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            thread_uuid: None,
            source_keys: Vec::new(),
        }
    }

    /// Prompt that continues an existing thread.
    pub fn in_thread(message: impl Into<String>, thread_uuid: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            thread_uuid: Some(thread_uuid.into()),
            source_keys: Vec::new(),
        }
    }
}

/// One decoded event from the streaming chat response.
///
/// Tags this client does not recognize are passed through as
/// [`ChatResponseElement::Unknown`] rather than rejected, so consumers can
/// inspect or skip them.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatResponseElement {
    /// An incremental piece of the model's answer text.
    ResponseChunk { content: String },
    /// Emitted once, when the first message of a conversation implicitly
    /// creates a new thread.
    ThreadCreated { thread_uuid: String },
    /// Supporting source articles associated with the answer.
    NewsArticles { articles: Vec<Article> },
    /// A well-formed event whose tag this client does not know.
    Unknown(Value),
}

/// The known variants in their exact wire form. Private so that unknown tags
/// fall through to [`ChatResponseElement::Unknown`] instead of failing.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum KnownElement {
    ResponseChunk {
        content: String,
    },
    ThreadCreated {
        #[serde(rename = "threadUuid")]
        thread_uuid: String,
    },
    NewsArticles {
        articles: Vec<Article>,
    },
}

const KNOWN_TAGS: [&str; 3] = ["RESPONSE_CHUNK", "THREAD_CREATED", "NEWS_ARTICLES"];

impl From<KnownElement> for ChatResponseElement {
    fn from(known: KnownElement) -> Self {
        match known {
            KnownElement::ResponseChunk { content } => Self::ResponseChunk { content },
            KnownElement::ThreadCreated { thread_uuid } => Self::ThreadCreated { thread_uuid },
            KnownElement::NewsArticles { articles } => Self::NewsArticles { articles },
        }
    }
}

impl ChatResponseElement {
    /// Parse one NDJSON line into an element.
    ///
    /// Fails if the line is not valid JSON, has no string `type` tag, or
    /// carries a known tag with a malformed payload. An unrecognized tag is
    /// not an error.
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(line)?;
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| serde_json::Error::custom("event has no string `type` tag"))?;
        if KNOWN_TAGS.contains(&tag) {
            serde_json::from_value::<KnownElement>(value).map(Into::into)
        } else {
            Ok(Self::Unknown(value))
        }
    }
}
