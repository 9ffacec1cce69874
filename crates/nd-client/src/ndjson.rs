//! NDJSON line framing over a byte stream.
//!
//! Splits an arriving byte stream into newline-delimited lines, buffering the
//! partial tail between chunks. Splitting happens on the raw bytes and a line
//! is only decoded as text once its terminating newline has arrived, so a
//! multi-byte UTF-8 character falling across a chunk boundary is reassembled
//! before decoding.

use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;

/// Failure while framing lines from the byte stream.
#[derive(Debug, Error)]
pub enum NdjsonError<E> {
    /// The underlying byte stream failed.
    #[error("stream transport error: {0}")]
    Transport(E),
    /// A completed line was not valid UTF-8.
    #[error("invalid UTF-8 in stream line: {0}")]
    Utf8(std::str::Utf8Error),
}

/// Stream adapter yielding one complete, non-blank line per element.
///
/// Blank and whitespace-only lines are skipped. A trailing `\r` is stripped.
/// When the inner stream ends, a non-empty unterminated tail is yielded as
/// one final line. After end-of-stream or any error the stream is fused.
pub struct NdjsonLines<S> {
    inner: S,
    /// Tail of the stream with no terminating newline yet.
    buf: Vec<u8>,
    /// Complete lines extracted but not yet handed out.
    pending: Vec<String>,
    /// A line failed UTF-8 decoding; reported once the pending queue drains.
    failed: Option<std::str::Utf8Error>,
    done: bool,
}

impl<S> NdjsonLines<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            pending: Vec::new(),
            failed: None,
            done: false,
        }
    }

    /// Move every complete line out of the buffer into the pending queue,
    /// leaving only the unterminated tail.
    fn drain_complete_lines(&mut self) {
        if self.failed.is_some() {
            return;
        }
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let mut line_bytes = std::mem::replace(&mut self.buf, rest);
            line_bytes.pop();
            if line_bytes.last() == Some(&b'\r') {
                line_bytes.pop();
            }
            match std::str::from_utf8(&line_bytes) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.pending.push(line.to_string());
                    }
                }
                Err(e) => {
                    self.failed = Some(e);
                    return;
                }
            }
        }
    }
}

impl<S, E> Stream for NdjsonLines<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
{
    type Item = Result<String, NdjsonError<E>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        // Lines completed earlier are handed out before anything else.
        if !this.pending.is_empty() {
            return Poll::Ready(Some(Ok(this.pending.remove(0))));
        }
        if let Some(e) = this.failed.take() {
            this.done = true;
            return Poll::Ready(Some(Err(NdjsonError::Utf8(e))));
        }
        if this.done {
            return Poll::Ready(None);
        }

        loop {
            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    this.buf.extend_from_slice(&bytes);
                    this.drain_complete_lines();
                    if !this.pending.is_empty() {
                        return Poll::Ready(Some(Ok(this.pending.remove(0))));
                    }
                    if let Some(e) = this.failed.take() {
                        this.done = true;
                        return Poll::Ready(Some(Err(NdjsonError::Utf8(e))));
                    }
                    // No complete line yet; keep polling for more bytes.
                }
                Poll::Ready(Some(Err(e))) => {
                    this.done = true;
                    return Poll::Ready(Some(Err(NdjsonError::Transport(e))));
                }
                Poll::Ready(None) => {
                    this.done = true;
                    // A final line without a trailing newline still counts.
                    if this.buf.is_empty() {
                        return Poll::Ready(None);
                    }
                    let tail = std::mem::take(&mut this.buf);
                    let tail = match std::str::from_utf8(&tail) {
                        Ok(s) => s,
                        Err(e) => return Poll::Ready(Some(Err(NdjsonError::Utf8(e)))),
                    };
                    let tail = tail.strip_suffix('\r').unwrap_or(tail);
                    if tail.trim().is_empty() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(Ok(tail.to_string())));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Frame an NDJSON byte stream into lines.
pub fn ndjson_lines<S, E>(stream: S) -> NdjsonLines<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
{
    NdjsonLines::new(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn byte_stream(chunks: Vec<Vec<u8>>) -> impl Stream<Item = Result<Bytes, std::io::Error>> {
        futures::stream::iter(chunks.into_iter().map(|c| Ok(Bytes::from(c))))
    }

    fn text_stream(chunks: Vec<&str>) -> impl Stream<Item = Result<Bytes, std::io::Error>> {
        byte_stream(chunks.into_iter().map(|s| s.as_bytes().to_vec()).collect())
    }

    async fn collect_lines(
        stream: impl Stream<Item = Result<Bytes, std::io::Error>> + Unpin,
    ) -> Vec<String> {
        ndjson_lines(stream)
            .map(|r| r.expect("line"))
            .collect()
            .await
    }

    #[tokio::test]
    async fn two_lines_in_one_chunk() {
        let lines = collect_lines(std::pin::pin!(text_stream(vec!["{\"a\":1}\n{\"b\":2}\n"]))).await;
        assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[tokio::test]
    async fn line_split_across_chunks() {
        let lines =
            collect_lines(std::pin::pin!(text_stream(vec!["{\"a\":", "1}\n"]))).await;
        assert_eq!(lines, vec!["{\"a\":1}"]);
    }

    #[tokio::test]
    async fn chunk_boundary_between_lines() {
        let lines =
            collect_lines(std::pin::pin!(text_stream(vec!["{\"a\":1}\n", "{\"b\":2}\n"]))).await;
        assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[tokio::test]
    async fn multibyte_char_split_across_chunks() {
        // "é" is 0xC3 0xA9; the boundary falls between the two bytes.
        let text = "{\"c\":\"é\"}\n".as_bytes();
        let split = text.iter().position(|&b| b == 0xC3).unwrap() + 1;
        let chunks = vec![text[..split].to_vec(), text[split..].to_vec()];
        let lines = collect_lines(std::pin::pin!(byte_stream(chunks))).await;
        assert_eq!(lines, vec!["{\"c\":\"é\"}"]);
    }

    #[tokio::test]
    async fn blank_lines_are_skipped() {
        let lines = collect_lines(std::pin::pin!(text_stream(vec![
            "{\"a\":1}\n\n{\"b\":2}\n",
            "   \n",
        ])))
        .await;
        assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[tokio::test]
    async fn crlf_is_stripped() {
        let lines = collect_lines(std::pin::pin!(text_stream(vec!["{\"a\":1}\r\n"]))).await;
        assert_eq!(lines, vec!["{\"a\":1}"]);
    }

    #[tokio::test]
    async fn trailing_line_without_newline() {
        let lines =
            collect_lines(std::pin::pin!(text_stream(vec!["{\"a\":1}\n{\"b\":2}"]))).await;
        assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[tokio::test]
    async fn whitespace_tail_is_not_a_line() {
        let lines = collect_lines(std::pin::pin!(text_stream(vec!["{\"a\":1}\n  "]))).await;
        assert_eq!(lines, vec!["{\"a\":1}"]);
    }

    #[tokio::test]
    async fn byte_at_a_time() {
        let text = "{\"a\":1}\n{\"b\":\"héllo\"}\n".as_bytes();
        let chunks: Vec<Vec<u8>> = text.iter().map(|&b| vec![b]).collect();
        let lines = collect_lines(std::pin::pin!(byte_stream(chunks))).await;
        assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":\"héllo\"}"]);
    }

    #[tokio::test]
    async fn transport_error_is_forwarded_then_stream_ends() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from_static(b"{\"a\":1}\n")),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
        ];
        let stream = std::pin::pin!(futures::stream::iter(chunks));
        let mut lines = ndjson_lines(stream);

        assert_eq!(lines.next().await.unwrap().unwrap(), "{\"a\":1}");
        assert!(matches!(
            lines.next().await.unwrap(),
            Err(NdjsonError::Transport(_))
        ));
        assert!(lines.next().await.is_none());
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_an_error() {
        // A complete line holding a lone continuation byte.
        let chunks = vec![vec![b'{', 0xA9, b'}', b'\n']];
        let stream = std::pin::pin!(byte_stream(chunks));
        let mut lines = ndjson_lines(stream);
        assert!(matches!(
            lines.next().await.unwrap(),
            Err(NdjsonError::Utf8(_))
        ));
        assert!(lines.next().await.is_none());
    }

    #[tokio::test]
    async fn lines_before_invalid_utf8_are_still_yielded() {
        let mut chunk = b"{\"a\":1}\n".to_vec();
        chunk.extend_from_slice(&[0xFF, b'\n']);
        let stream = std::pin::pin!(byte_stream(vec![chunk]));
        let mut lines = ndjson_lines(stream);

        assert_eq!(lines.next().await.unwrap().unwrap(), "{\"a\":1}");
        assert!(matches!(
            lines.next().await.unwrap(),
            Err(NdjsonError::Utf8(_))
        ));
        assert!(lines.next().await.is_none());
    }

    #[tokio::test]
    async fn all_complete_lines_drain_before_next_chunk() {
        // Three lines arriving in a single chunk come out in order without
        // touching the second chunk first.
        let lines = collect_lines(std::pin::pin!(text_stream(vec![
            "{\"n\":1}\n{\"n\":2}\n{\"n\":3}\n",
            "{\"n\":4}\n",
        ])))
        .await;
        assert_eq!(
            lines,
            vec!["{\"n\":1}", "{\"n\":2}", "{\"n\":3}", "{\"n\":4}"]
        );
    }
}
