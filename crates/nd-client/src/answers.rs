//! The answers service: streaming chat and follow-up suggestions.

use async_stream::stream;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;

use nd_protocol::{ChatPrompt, ChatResponseElement};

use crate::error::Error;
use crate::http::ApiClient;
use crate::ndjson::{ndjson_lines, NdjsonError};

/// Decode a streaming chat response body into typed elements.
///
/// Elements come out in exactly the order their NDJSON lines completed in
/// the input. A malformed line ends the stream with [`Error::Parse`]
/// carrying the raw line; a transport failure ends it with [`Error::Http`].
/// Cancelling the token stops consumption and ends the stream cleanly, with
/// no error element — callers can tell cancellation from failure by the
/// absence of a trailing `Err`.
pub fn decode_chat_stream<S, E>(
    byte_stream: S,
    cancel: CancellationToken,
) -> impl Stream<Item = Result<ChatResponseElement, Error>>
where
    S: Stream<Item = Result<Bytes, E>>,
    Error: From<E>,
{
    stream! {
        let mut lines = ndjson_lines(Box::pin(byte_stream));
        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                item = lines.next() => item,
            };
            let Some(result) = next else { break };
            match result {
                Ok(line) => match ChatResponseElement::from_json_line(&line) {
                    Ok(element) => yield Ok(element),
                    Err(source) => {
                        yield Err(Error::Parse { line, source });
                        break;
                    }
                },
                Err(NdjsonError::Transport(e)) => {
                    yield Err(Error::from(e));
                    break;
                }
                Err(NdjsonError::Utf8(e)) => {
                    yield Err(Error::Utf8(e));
                    break;
                }
            }
        }
    }
}

/// Chat endpoints. Threads are created implicitly server-side: the first
/// message of a new conversation produces a `THREAD_CREATED` element.
pub struct AnswersService {
    api: ApiClient,
}

impl AnswersService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Send a chat message and stream the decoded response elements.
    ///
    /// A request-phase failure is yielded as the stream's only element.
    /// Duplicate `THREAD_CREATED` events are not deduplicated here; that is
    /// the caller's concern.
    pub fn chat(
        &self,
        prompt: &ChatPrompt,
        cancel: CancellationToken,
    ) -> impl Stream<Item = Result<ChatResponseElement, Error>> + Send + 'static {
        let api = self.api.clone();
        let prompt = prompt.clone();

        stream! {
            let response = match api.post_streaming("answers/chat", &prompt).await {
                Ok(response) => response,
                Err(e) => {
                    yield Err(e);
                    return;
                }
            };

            let elements = decode_chat_stream(response.bytes_stream(), cancel);
            let mut elements = std::pin::pin!(elements);
            while let Some(item) = elements.next().await {
                yield item;
            }
        }
    }

    /// Follow-up suggestions for an existing thread.
    pub async fn suggestions(&self, thread_uuid: &str) -> Result<Vec<String>, Error> {
        self.api
            .get(&format!("answers/threads/{thread_uuid}/suggestions"))
            .await
    }
}
