//! Server-Sent Events decoding for streamed chat completions.
//!
//! The body of a streaming chat call is a sequence of `data: <payload>` lines.
//! Decoding happens in three layers:
//!
//! - [`LineBuffer`] splits raw bytes into lines, across arbitrary chunk
//!   boundaries (including inside a UTF-8 sequence).
//! - [`decode_line`] maps one line to a [`LineOutcome`].
//! - [`ChunkDecoder`] drives the state machine, and
//!   [`chunk_stream_from_bytes`] exposes it as a lazy, cancellable
//!   [`ChatStream`].
//!
//! A stream ends on `data: [DONE]` or on the first `choices[0].finish_reason`
//! string, whichever arrives first. Both produce one terminal chunk with empty
//! content. If the byte source closes before either, the stream yields
//! [`ByokError::IncompleteStream`]; if the caller cancels, it yields
//! [`ByokError::Cancelled`].

use std::collections::VecDeque;
use std::pin::Pin;

use futures::{Stream, StreamExt};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::ByokError;
use crate::types::chat::ChatStreamChunk;

/// Type alias for the chunk stream returned by streaming APIs
pub type ChatStream =
    Pin<Box<dyn Stream<Item = Result<ChatStreamChunk, ByokError>> + Send + 'static>>;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

// =========================================================================
// Line splitting
// =========================================================================

/// Splits a byte stream into text lines
///
/// Lines end at `\n`, `\r\n`, or a bare `\r`. Bytes are buffered until a
/// full line is available, so multi-byte characters split across chunks are
/// reassembled before decoding.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8>,
    // Last chunk ended on `\r`; a leading `\n` in the next one belongs to it.
    after_cr: bool,
}

impl LineBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a chunk of bytes and return every line it completes
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        if chunk.is_empty() {
            return Vec::new();
        }
        self.buf.extend_from_slice(chunk);

        let mut start = 0;
        if std::mem::take(&mut self.after_cr) && self.buf.first() == Some(&b'\n') {
            start = 1;
        }

        let mut lines = Vec::new();
        while let Some(offset) = self.buf[start..]
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
        {
            let end = start + offset;
            lines.push(to_line(&self.buf[start..end]));
            start = end + 1;
            if self.buf[end] == b'\r' {
                match self.buf.get(start) {
                    Some(b'\n') => start += 1,
                    None => self.after_cr = true,
                    Some(_) => {}
                }
            }
        }
        self.buf.drain(..start);
        lines
    }

    /// Take the final line if the input did not end with a newline
    pub fn finish(&mut self) -> Option<String> {
        self.after_cr = false;
        if self.buf.is_empty() {
            return None;
        }
        let line = to_line(&self.buf);
        self.buf.clear();
        Some(line)
    }

    /// Drop any partially buffered line
    pub fn clear(&mut self) {
        self.buf.clear();
        self.after_cr = false;
    }

    /// Number of bytes waiting for a newline
    #[must_use]
    pub fn pending_bytes(&self) -> usize {
        self.buf.len()
    }
}

fn to_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// =========================================================================
// Line decoding
// =========================================================================

/// What a single SSE line contributes to the chunk sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank, non-`data: `, unparsable, or content-free line
    Skip,
    /// Non-empty `choices[0].delta.content`
    Delta(String),
    /// `[DONE]` or a `finish_reason` string
    Done,
}

/// Decodes one SSE line
///
/// Only `choices[0]` is read. A `finish_reason` string (any value, including
/// empty) ends the stream and takes precedence over a delta on the same line.
/// Malformed JSON is skipped, never fatal.
#[must_use]
pub fn decode_line(line: &str) -> LineOutcome {
    let line = line.trim();
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return LineOutcome::Skip;
    };
    if payload == DONE_SENTINEL {
        return LineOutcome::Done;
    }

    let Ok(json) = serde_json::from_str::<Value>(payload) else {
        return LineOutcome::Skip;
    };
    let Some(first) = json
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    else {
        return LineOutcome::Skip;
    };

    if first.get("finish_reason").is_some_and(Value::is_string) {
        return LineOutcome::Done;
    }

    match first
        .get("delta")
        .and_then(|d| d.get("content"))
        .and_then(Value::as_str)
    {
        Some(content) if !content.is_empty() => LineOutcome::Delta(content.to_owned()),
        _ => LineOutcome::Skip,
    }
}

// =========================================================================
// Decoder state machine
// =========================================================================

/// Lifecycle of a [`ChunkDecoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Consuming lines; returned to after every emitted delta
    Reading,
    /// A terminal chunk was emitted; absorbing
    Terminated,
    /// Cancelled, incomplete, or transport failure; absorbing
    Failed,
}

/// Incremental chat-delta decoder
///
/// Bytes go in through [`feed`](Self::feed); lines come out one at a time
/// through [`next_line`](Self::next_line) and are turned into chunks by
/// [`decode`](Self::decode). Splitting line retrieval from decoding lets the
/// caller check for cancellation at every line boundary.
#[derive(Debug)]
pub struct ChunkDecoder {
    lines: LineBuffer,
    pending: VecDeque<String>,
    state: DecoderState,
    delivered: usize,
    input_closed: bool,
}

impl Default for ChunkDecoder {
    fn default() -> Self {
        Self {
            lines: LineBuffer::new(),
            pending: VecDeque::new(),
            state: DecoderState::Reading,
            delivered: 0,
            input_closed: false,
        }
    }
}

impl ChunkDecoder {
    /// Create a decoder in the `Reading` state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> DecoderState {
        self.state
    }

    /// Number of content chunks emitted so far
    #[must_use]
    pub const fn delivered(&self) -> usize {
        self.delivered
    }

    /// `true` once [`close_input`](Self::close_input) has been called
    #[must_use]
    pub const fn input_closed(&self) -> bool {
        self.input_closed
    }

    /// Buffer raw bytes from the source
    pub fn feed(&mut self, bytes: &[u8]) {
        if self.state == DecoderState::Reading {
            self.pending.extend(self.lines.push(bytes));
        }
    }

    /// Mark the source as exhausted, queueing any unterminated last line
    pub fn close_input(&mut self) {
        self.input_closed = true;
        if let Some(line) = self.lines.finish() {
            self.pending.push_back(line);
        }
    }

    /// Next complete line, if one is buffered and decoding is still live
    pub fn next_line(&mut self) -> Option<String> {
        if self.state == DecoderState::Reading {
            self.pending.pop_front()
        } else {
            None
        }
    }

    /// Decode one line, advancing the state machine
    ///
    /// Returns `None` for lines that produce no chunk, and always `None` once
    /// the decoder has left `Reading`.
    pub fn decode(&mut self, line: &str) -> Option<ChatStreamChunk> {
        if self.state != DecoderState::Reading {
            return None;
        }
        tracing::trace!(line, "sse line");
        match decode_line(line) {
            LineOutcome::Skip => None,
            LineOutcome::Delta(content) => {
                self.delivered += 1;
                Some(ChatStreamChunk::delta(content))
            }
            LineOutcome::Done => {
                self.state = DecoderState::Terminated;
                self.pending.clear();
                self.lines.clear();
                Some(ChatStreamChunk::done())
            }
        }
    }

    /// Abandon decoding, discarding buffered input
    pub fn fail(&mut self) {
        self.state = DecoderState::Failed;
        self.pending.clear();
        self.lines.clear();
    }

    /// Decode every chunk currently available without touching the source
    ///
    /// Useful for synchronous callers holding the whole body in memory.
    pub fn drain(&mut self) -> Vec<ChatStreamChunk> {
        let mut out = Vec::new();
        while let Some(line) = self.next_line() {
            if let Some(chunk) = self.decode(&line) {
                out.push(chunk);
            }
        }
        out
    }
}

// =========================================================================
// Stream creation
// =========================================================================

/// Create a chunk stream from any byte source
///
/// The stream owns the source and drops it when it ends or is dropped, which
/// releases the underlying connection. Cancellation is observed before every
/// line and while awaiting more bytes; it yields [`ByokError::Cancelled`]
/// once, after which the stream ends.
pub fn chunk_stream_from_bytes<S, B, E>(source: S, cancel: CancellationToken) -> ChatStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<ByokError> + Send + 'static,
{
    Box::pin(futures::stream::unfold(
        (Box::pin(source), ChunkDecoder::new(), cancel),
        |(mut source, mut decoder, cancel)| async move {
            loop {
                if decoder.state() != DecoderState::Reading {
                    return None;
                }

                if cancel.is_cancelled() {
                    decoder.fail();
                    tracing::debug!(chunks = decoder.delivered(), "stream cancelled");
                    return Some((Err(ByokError::Cancelled), (source, decoder, cancel)));
                }

                if let Some(line) = decoder.next_line() {
                    if let Some(chunk) = decoder.decode(&line) {
                        if chunk.done {
                            tracing::debug!(chunks = decoder.delivered(), "stream terminated");
                        }
                        return Some((Ok(chunk), (source, decoder, cancel)));
                    }
                    continue;
                }

                if decoder.input_closed() {
                    let chunks = decoder.delivered();
                    decoder.fail();
                    tracing::warn!(chunks, "stream closed without a terminal event");
                    return Some((
                        Err(ByokError::IncompleteStream { chunks }),
                        (source, decoder, cancel),
                    ));
                }

                tokio::select! {
                    biased;
                    () = cancel.cancelled() => {
                        decoder.fail();
                        tracing::debug!(chunks = decoder.delivered(), "stream cancelled");
                        return Some((Err(ByokError::Cancelled), (source, decoder, cancel)));
                    }
                    next = source.next() => match next {
                        Some(Ok(bytes)) => decoder.feed(bytes.as_ref()),
                        Some(Err(e)) => {
                            decoder.fail();
                            return Some((Err(e.into()), (source, decoder, cancel)));
                        }
                        None => decoder.close_input(),
                    },
                }
            }
        },
    ))
}

/// Create a chunk stream from a successful reqwest response
///
/// The stream owns the response and closes the connection when dropped.
#[must_use]
pub fn chunk_stream_from_response(
    response: reqwest::Response,
    cancel: CancellationToken,
) -> ChatStream {
    chunk_stream_from_bytes(response.bytes_stream(), cancel)
}

// =========================================================================
// Accumulation
// =========================================================================

/// Folds streamed chunks into the full completion text
///
/// # Example
///
/// ```ignore
/// let mut acc = Accumulator::new();
/// while let Some(chunk) = stream.next().await {
///     if let Some(text) = acc.apply(&chunk?) {
///         return Ok(text);
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct Accumulator {
    text: String,
    chunks: usize,
    complete: bool,
}

impl Accumulator {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a chunk; returns the full text when the terminal chunk arrives
    pub fn apply(&mut self, chunk: &ChatStreamChunk) -> Option<String> {
        if self.complete {
            return None;
        }
        if chunk.done {
            self.complete = true;
            return Some(self.text.clone());
        }
        self.text.push_str(&chunk.content);
        self.chunks += 1;
        None
    }

    /// Text accumulated so far
    #[must_use]
    pub fn current_text(&self) -> &str {
        &self.text
    }

    /// Number of content chunks applied
    #[must_use]
    pub const fn chunks(&self) -> usize {
        self.chunks
    }

    /// `true` after the terminal chunk
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Drive a stream to completion and return its text
    ///
    /// # Errors
    ///
    /// Returns the first error the stream yields, including
    /// [`ByokError::IncompleteStream`] and [`ByokError::Cancelled`].
    pub async fn collect(mut stream: ChatStream) -> Result<String, ByokError> {
        let mut acc = Self::new();
        while let Some(chunk) = stream.next().await {
            if let Some(text) = acc.apply(&chunk?) {
                return Ok(text);
            }
        }
        Err(ByokError::IncompleteStream {
            chunks: acc.chunks(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use proptest::prelude::*;

    const DELTA_X: &str = r#"data: {"choices":[{"delta":{"content":"X"}}]}"#;

    fn delta(content: &str) -> String {
        format!(r#"data: {{"choices":[{{"delta":{{"content":"{content}"}}}}]}}"#)
    }

    fn body(lines: &[String]) -> String {
        lines.iter().map(|l| format!("{l}\n")).collect()
    }

    fn source_of(body: &str) -> impl Stream<Item = Result<Bytes, ByokError>> + Send + 'static {
        futures::stream::iter(vec![Ok(Bytes::from(body.to_owned()))])
    }

    async fn collect_all(mut stream: ChatStream) -> Vec<Result<ChatStreamChunk, ByokError>> {
        let mut out = Vec::new();
        while let Some(item) = stream.next().await {
            out.push(item);
        }
        out
    }

    // ---- decode_line ----

    #[test]
    fn delta_line_yields_content() {
        assert_eq!(decode_line(DELTA_X), LineOutcome::Delta("X".into()));
    }

    #[test]
    fn done_sentinel_terminates() {
        assert_eq!(decode_line("data: [DONE]"), LineOutcome::Done);
        assert_eq!(decode_line("  data: [DONE]  "), LineOutcome::Done);
    }

    #[test]
    fn finish_reason_wins_over_delta() {
        assert_eq!(
            decode_line(r#"data: {"choices":[{"finish_reason":"stop"}]}"#),
            LineOutcome::Done
        );
        assert_eq!(
            decode_line(r#"data: {"choices":[{"delta":{"content":"late"},"finish_reason":"length"}]}"#),
            LineOutcome::Done
        );
        assert_eq!(
            decode_line(r#"data: {"choices":[{"finish_reason":""}]}"#),
            LineOutcome::Done
        );
    }

    #[test]
    fn null_finish_reason_is_not_terminal() {
        assert_eq!(
            decode_line(r#"data: {"choices":[{"delta":{"content":"a"},"finish_reason":null}]}"#),
            LineOutcome::Delta("a".into())
        );
    }

    #[test]
    fn ignorable_lines_skip() {
        for line in [
            "",
            "   ",
            ": keep-alive",
            "event: message",
            "data:{\"choices\":[]}",
            "data: {not valid json",
            r#"data: {"choices":[]}"#,
            r#"data: {"choices":[{"delta":{"content":""}}]}"#,
            r#"data: {"choices":[{"delta":{}}]}"#,
            r#"data: {"choices":[{"delta":{"content":42}}]}"#,
            r#"data: {"id":"x"}"#,
            "data: 17",
        ] {
            assert_eq!(decode_line(line), LineOutcome::Skip, "line: {line:?}");
        }
    }

    #[test]
    fn only_first_choice_is_read() {
        assert_eq!(
            decode_line(
                r#"data: {"choices":[{"delta":{"content":"a"}},{"finish_reason":"stop"}]}"#
            ),
            LineOutcome::Delta("a".into())
        );
    }

    // ---- LineBuffer ----

    #[test]
    fn line_buffer_joins_split_chunks() {
        let mut lb = LineBuffer::new();
        assert!(lb.push(b"data: {\"cho").is_empty());
        let lines = lb.push(b"ices\":[]}\r\nnext");
        assert_eq!(lines, vec!["data: {\"choices\":[]}".to_string()]);
        assert_eq!(lb.pending_bytes(), 4);
        assert_eq!(lb.finish().as_deref(), Some("next"));
        assert_eq!(lb.finish(), None);
    }

    #[test]
    fn line_buffer_reassembles_split_utf8() {
        let text = "data: é\n";
        let bytes = text.as_bytes();
        // 'é' is two bytes; split between them
        let split = "data: ".len() + 1;
        let mut lb = LineBuffer::new();
        assert!(lb.push(&bytes[..split]).is_empty());
        assert_eq!(lb.push(&bytes[split..]), vec!["data: é".to_string()]);
    }

    #[test]
    fn line_buffer_accepts_bare_cr_endings() {
        let mut lb = LineBuffer::new();
        let lines = lb.push(b"data: a\rdata: b\r\n\ndata: c\n");
        assert_eq!(lines, vec!["data: a", "data: b", "", "data: c"]);
        assert_eq!(lb.pending_bytes(), 0);
    }

    #[test]
    fn line_buffer_crlf_split_across_chunks_is_one_ending() {
        let mut lb = LineBuffer::new();
        assert_eq!(lb.push(b"data: a\r"), vec!["data: a"]);
        assert!(lb.push(b"\n").is_empty());
        assert_eq!(lb.push(b"\ndata: b\r"), vec!["", "data: b"]);
        assert_eq!(lb.push(b"data: c\n"), vec!["data: c"]);
    }

    #[tokio::test]
    async fn cr_only_feed_decodes() {
        let text = format!("{}\rdata: [DONE]\r", delta("hi"));
        let stream = chunk_stream_from_bytes(source_of(&text), CancellationToken::new());
        let items: Vec<_> = collect_all(stream)
            .await
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            items,
            vec![ChatStreamChunk::delta("hi"), ChatStreamChunk::done()]
        );
    }

    // ---- ChunkDecoder ----

    #[test]
    fn decoder_stops_reading_after_done() {
        let mut d = ChunkDecoder::new();
        d.feed(body(&[delta("a"), "data: [DONE]".into(), delta("b")]).as_bytes());
        let chunks = d.drain();
        assert_eq!(
            chunks,
            vec![ChatStreamChunk::delta("a"), ChatStreamChunk::done()]
        );
        assert_eq!(d.state(), DecoderState::Terminated);
        assert!(d.next_line().is_none());

        d.feed(delta("c").as_bytes());
        d.feed(b"\n");
        assert!(d.drain().is_empty());
    }

    #[test]
    fn decoder_flushes_trailing_line_on_close() {
        let mut d = ChunkDecoder::new();
        d.feed(delta("tail").as_bytes());
        assert!(d.drain().is_empty());
        d.close_input();
        assert_eq!(d.drain(), vec![ChatStreamChunk::delta("tail")]);
        assert_eq!(d.delivered(), 1);
        assert_eq!(d.state(), DecoderState::Reading);
    }

    // ---- streams ----

    #[tokio::test]
    async fn n_deltas_then_done() {
        let lines = vec![delta("Hel"), delta("lo"), delta("!"), "data: [DONE]".into()];
        let stream = chunk_stream_from_bytes(source_of(&body(&lines)), CancellationToken::new());
        let items: Vec<_> = collect_all(stream)
            .await
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            items,
            vec![
                ChatStreamChunk::delta("Hel"),
                ChatStreamChunk::delta("lo"),
                ChatStreamChunk::delta("!"),
                ChatStreamChunk::done(),
            ]
        );
    }

    #[tokio::test]
    async fn empty_then_terminal() {
        let stream = chunk_stream_from_bytes(
            source_of("data: [DONE]\n"),
            CancellationToken::new(),
        );
        let items = collect_all(stream).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap(), &ChatStreamChunk::done());
    }

    #[tokio::test]
    async fn source_closing_without_marker_is_incomplete() {
        let lines = vec![delta("a"), delta("b")];
        let stream = chunk_stream_from_bytes(source_of(&body(&lines)), CancellationToken::new());
        let items = collect_all(stream).await;
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap().content, "a");
        assert_eq!(items[1].as_ref().unwrap().content, "b");
        assert!(matches!(
            items[2],
            Err(ByokError::IncompleteStream { chunks: 2 })
        ));
    }

    #[tokio::test]
    async fn cancel_after_k_chunks() {
        let lines = vec![delta("1"), delta("2"), delta("3"), "data: [DONE]".into()];
        let cancel = CancellationToken::new();
        let mut stream = chunk_stream_from_bytes(source_of(&body(&lines)), cancel.clone());

        assert_eq!(stream.next().await.unwrap().unwrap().content, "1");
        cancel.cancel();
        assert!(matches!(stream.next().await, Some(Err(ByokError::Cancelled))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn cancel_while_awaiting_bytes() {
        let first = futures::stream::iter(vec![Ok::<_, ByokError>(Bytes::from(format!(
            "{}\n",
            delta("x")
        )))]);
        let source = first.chain(futures::stream::pending());
        let cancel = CancellationToken::new();
        let mut stream = chunk_stream_from_bytes(source, cancel.clone());

        assert_eq!(stream.next().await.unwrap().unwrap().content, "x");

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });
        assert!(matches!(stream.next().await, Some(Err(ByokError::Cancelled))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn transport_error_ends_stream() {
        let source = futures::stream::iter(vec![
            Ok(Bytes::from(format!("{}\n", delta("a")))),
            Err(ByokError::Serde("connection reset".into())),
            Ok(Bytes::from("data: [DONE]\n")),
        ]);
        let items = collect_all(chunk_stream_from_bytes(source, CancellationToken::new())).await;
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(ByokError::Serde(_))));
    }

    #[tokio::test]
    async fn accumulator_collects_text() {
        let lines = vec![delta("Aye, "), delta("traveller."), "data: [DONE]".into()];
        let stream = chunk_stream_from_bytes(source_of(&body(&lines)), CancellationToken::new());
        assert_eq!(Accumulator::collect(stream).await.unwrap(), "Aye, traveller.");
    }

    #[test]
    fn accumulator_ignores_chunks_after_terminal() {
        let mut acc = Accumulator::new();
        assert!(acc.apply(&ChatStreamChunk::delta("a")).is_none());
        assert_eq!(acc.apply(&ChatStreamChunk::done()).as_deref(), Some("a"));
        assert!(acc.is_complete());
        assert!(acc.apply(&ChatStreamChunk::delta("b")).is_none());
        assert_eq!(acc.current_text(), "a");
        assert_eq!(acc.chunks(), 1);
    }

    proptest! {
        #[test]
        fn non_data_lines_never_produce_chunks(line in "[^\n]*") {
            prop_assume!(!line.trim().starts_with(DATA_PREFIX));
            prop_assert_eq!(decode_line(&line), LineOutcome::Skip);
        }

        #[test]
        fn arbitrary_chunking_yields_same_chunks(
            splits in proptest::collection::vec(0usize..200, 0..8),
            eol in prop_oneof![Just("\n"), Just("\r\n"), Just("\r")],
        ) {
            let text: String = [
                ": comment".to_string(),
                delta("grüße"),
                String::new(),
                delta("🐉"),
                "data: [DONE]".to_string(),
            ]
            .iter()
            .map(|l| format!("{l}{eol}"))
            .collect();
            let bytes = text.as_bytes();

            let mut cuts: Vec<usize> = splits.into_iter().map(|s| s % (bytes.len() + 1)).collect();
            cuts.sort_unstable();

            let mut d = ChunkDecoder::new();
            let mut out = Vec::new();
            let mut prev = 0;
            for cut in cuts.into_iter().chain(std::iter::once(bytes.len())) {
                d.feed(&bytes[prev..cut]);
                out.extend(d.drain());
                prev = cut;
            }

            prop_assert_eq!(
                out,
                vec![
                    ChatStreamChunk::delta("grüße"),
                    ChatStreamChunk::delta("🐉"),
                    ChatStreamChunk::done(),
                ]
            );
        }
    }
}
