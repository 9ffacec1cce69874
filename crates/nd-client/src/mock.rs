//! Mock answer streams for testing.
//!
//! Produces the same element sequence shape as the real answers service,
//! allowing consumers to test at every layer without HTTP.

use std::time::Duration;

use async_stream::stream;
use futures::Stream;
use reqwest::StatusCode;
use tokio::time::sleep;

use nd_protocol::{Article, ChatResponseElement};

use crate::error::Error;

/// Configurable mock elements.
#[derive(Debug, Clone)]
pub enum MockElement {
    /// Emit a text chunk.
    Chunk { content: String },
    /// Emit a thread-creation notice.
    ThreadCreated { thread_uuid: String },
    /// Emit a batch of supporting articles.
    Articles { articles: Vec<Article> },
    /// Fail the stream (nothing is emitted afterwards).
    Error { message: String },
    /// Delay before the next element (for timing tests).
    Delay { ms: u64 },
}

/// Configuration for a mock chat stream.
#[derive(Debug, Clone, Default)]
pub struct MockChatConfig {
    /// Sequence of elements to emit.
    pub elements: Vec<MockElement>,
    /// Optional delay between each element (ms).
    pub chunk_delay_ms: Option<u64>,
}

impl MockChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(mut self, elements: Vec<MockElement>) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_chunk_delay(mut self, ms: u64) -> Self {
        self.chunk_delay_ms = Some(ms);
        self
    }
}

/// Create a stream of chat elements from mock config.
pub fn mock_chat_stream(
    config: MockChatConfig,
) -> impl Stream<Item = Result<ChatResponseElement, Error>> {
    stream! {
        for element in config.elements {
            // Apply inter-element delay if configured
            if let Some(delay_ms) = config.chunk_delay_ms {
                sleep(Duration::from_millis(delay_ms)).await;
            }

            match element {
                MockElement::Chunk { content } => {
                    yield Ok(ChatResponseElement::ResponseChunk { content });
                }
                MockElement::ThreadCreated { thread_uuid } => {
                    yield Ok(ChatResponseElement::ThreadCreated { thread_uuid });
                }
                MockElement::Articles { articles } => {
                    yield Ok(ChatResponseElement::NewsArticles { articles });
                }
                MockElement::Error { message } => {
                    yield Err(Error::Api {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        body: message,
                    });
                    return;
                }
                MockElement::Delay { ms } => {
                    sleep(Duration::from_millis(ms)).await;
                    // Delay doesn't emit an element
                }
            }
        }
    }
}

/// Built-in fixtures for common scenarios.
pub mod fixtures {
    use super::*;

    /// A streamed answer in an existing thread.
    pub fn streamed_answer(chunks: &[&str]) -> MockChatConfig {
        let elements = chunks
            .iter()
            .map(|chunk| MockElement::Chunk {
                content: (*chunk).to_string(),
            })
            .collect();

        MockChatConfig::new().with_elements(elements)
    }

    /// A first message: thread creation, streamed text, then articles.
    pub fn fresh_thread_answer(
        thread_uuid: &str,
        chunks: &[&str],
        articles: Vec<Article>,
    ) -> MockChatConfig {
        let mut elements = vec![MockElement::ThreadCreated {
            thread_uuid: thread_uuid.to_string(),
        }];

        for chunk in chunks {
            elements.push(MockElement::Chunk {
                content: (*chunk).to_string(),
            });
        }

        elements.push(MockElement::Articles { articles });

        MockChatConfig::new().with_elements(elements)
    }

    /// An answer that fails partway through.
    pub fn error_mid_stream(text_before: &str, message: &str) -> MockChatConfig {
        MockChatConfig::new().with_elements(vec![
            MockElement::Chunk {
                content: text_before.to_string(),
            },
            MockElement::Error {
                message: message.to_string(),
            },
        ])
    }
}
