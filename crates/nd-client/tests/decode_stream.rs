//! Chunk-boundary independence tests for the streaming chat decoder,
//! driven through the public entry point.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use nd_client::{decode_chat_stream, Error};
use nd_protocol::ChatResponseElement;
use tokio_util::sync::CancellationToken;

// A realistic body: thread creation, multibyte answer text, a blank line,
// an unrecognized event, and a final record with no trailing newline.
const BODY: &str = concat!(
    "{\"type\":\"THREAD_CREATED\",\"threadUuid\":\"abc-123\"}\n",
    "{\"type\":\"RESPONSE_CHUNK\",\"content\":\"Märkte \"}\n",
    "\n",
    "{\"type\":\"RESPONSE_CHUNK\",\"content\":\"erholten sich 📈\"}\n",
    "{\"type\":\"COMPLETION_STATS\",\"elapsedMs\":12}\n",
    "{\"type\":\"NEWS_ARTICLES\",\"articles\":[{\"id\":\"a1\",\"headline\":\"Rally\",\"url\":\"https://example.com/a1\",\"sourceKey\":\"reuters\"}]}"
);

fn chunk_stream(chunks: Vec<Vec<u8>>) -> impl Stream<Item = Result<Bytes, std::io::Error>> {
    futures::stream::iter(chunks.into_iter().map(|c| Ok(Bytes::from(c))))
}

fn split_every(bytes: &[u8], n: usize) -> Vec<Vec<u8>> {
    bytes.chunks(n).map(|c| c.to_vec()).collect()
}

async fn decode(chunks: Vec<Vec<u8>>) -> Vec<ChatResponseElement> {
    decode_chat_stream(chunk_stream(chunks), CancellationToken::new())
        .map(|r| r.expect("decode"))
        .collect()
        .await
}

#[tokio::test]
async fn identical_output_regardless_of_chunking() {
    let whole = decode(vec![BODY.as_bytes().to_vec()]).await;
    // Blank line skipped, unknown tag passed through, trailing record kept.
    assert_eq!(whole.len(), 5);

    // Byte-at-a-time splits every multi-byte character; the other sizes
    // exercise assorted boundary placements.
    for n in [1usize, 2, 3, 7, 11, 64] {
        let split = decode(split_every(BODY.as_bytes(), n)).await;
        assert_eq!(split, whole, "chunk size {n} changed the output");
    }
}

#[tokio::test]
async fn multibyte_text_survives_byte_at_a_time_delivery() {
    let elements = decode(split_every(BODY.as_bytes(), 1)).await;
    assert!(matches!(
        &elements[2],
        ChatResponseElement::ResponseChunk { content } if content == "erholten sich 📈"
    ));
}

#[tokio::test]
async fn order_matches_line_order() {
    let mut body = String::new();
    for i in 0..20 {
        body.push_str(&format!(
            "{{\"type\":\"RESPONSE_CHUNK\",\"content\":\"{i}\"}}\n"
        ));
    }

    let elements = decode(split_every(body.as_bytes(), 5)).await;
    let contents: Vec<String> = elements
        .into_iter()
        .map(|e| match e {
            ChatResponseElement::ResponseChunk { content } => content,
            other => panic!("unexpected element {other:?}"),
        })
        .collect();

    let expected: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    assert_eq!(contents, expected);
}

#[tokio::test]
async fn documented_two_chunk_scenario() {
    let chunks = vec![
        b"{\"type\":\"RESPONSE_CHUNK\",\"content\":\"Hel".to_vec(),
        b"lo\"}\n{\"type\":\"THREAD_CREATED\",\"threadUuid\":\"abc-123\"}\n".to_vec(),
    ];

    let elements = decode(chunks).await;
    assert_eq!(
        elements,
        vec![
            ChatResponseElement::ResponseChunk {
                content: "Hello".to_string()
            },
            ChatResponseElement::ThreadCreated {
                thread_uuid: "abc-123".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn blank_line_between_records_yields_two_elements() {
    let body = "{\"type\":\"RESPONSE_CHUNK\",\"content\":\"a\"}\n\n{\"type\":\"RESPONSE_CHUNK\",\"content\":\"b\"}\n";
    let elements = decode(vec![body.as_bytes().to_vec()]).await;
    assert_eq!(elements.len(), 2);
}

#[tokio::test]
async fn malformed_line_fails_the_stream_after_prior_elements() {
    let body = "{\"type\":\"RESPONSE_CHUNK\",\"content\":\"ok\"}\n{broken\n";
    let results: Vec<_> = decode_chat_stream(
        chunk_stream(split_every(body.as_bytes(), 4)),
        CancellationToken::new(),
    )
    .collect()
    .await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(&results[1], Err(Error::Parse { line, .. }) if line == "{broken"));
}
