#![deny(clippy::all)]
#![warn(missing_docs)]

//! # `byok-async`
//!
//! An async client for the BYOK game-AI backend: chat completions (whole-body
//! and SSE streaming), player lifecycle, game events, player state, and wallet.
//!
//! ## Quick Start
//!
//! ```no_run
//! use byok_async::{ByokConfig, Client, types::chat::{ChatMessage, ChatRequest}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_config(ByokConfig::new().with_api_key("byok_sk_..."));
//!
//! let req = ChatRequest::new(vec![ChatMessage::user("Hello, blacksmith!")]);
//! let response = client.chat().send(req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Streaming
//!
//! ```no_run
//! use byok_async::{Client, types::chat::{ChatMessage, ChatRequest}};
//! use futures::StreamExt;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new();
//! let req = ChatRequest::new(vec![ChatMessage::user("Tell me a rumour")]);
//!
//! let mut stream = client.chat().stream(req).await?;
//! while let Some(chunk) = stream.next().await {
//!     let chunk = chunk?;
//!     if chunk.done {
//!         break;
//!     }
//!     print!("{}", chunk.content);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A stream that closes without `[DONE]` or a `finish_reason` yields
//! [`ByokError::IncompleteStream`] as its last item, and a cancelled stream
//! yields [`ByokError::Cancelled`]. See [`sse`] for the decoding rules.
//!
//! ## Errors
//!
//! Non-2xx responses become [`ByokError::Api`] carrying an [`ApiErrorObject`]
//! whose [`ErrorCategory`] mirrors the status code. The client never retries;
//! [`ByokError::retry_after`] exposes the server's `Retry-After` hint.

/// HTTP client implementation
pub mod client;
/// Request composition (identity headers and chat bodies)
pub mod compose;
/// Configuration types for the client
pub mod config;
/// Error types and response classification
pub mod error;
/// API resource implementations
pub mod resources;
/// Advisory retry helpers
pub mod retry;
/// Server-sent events (streaming chat) support
pub mod sse;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::ByokConfig;
pub use crate::error::{ApiErrorObject, ByokError, ErrorCategory};

/// Streaming types
pub mod streaming {
    pub use crate::sse::{
        Accumulator, ChatStream, ChunkDecoder, DecoderState, LineBuffer, LineOutcome,
        chunk_stream_from_bytes, chunk_stream_from_response, decode_line,
    };
    pub use crate::types::chat::ChatStreamChunk;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::chat::*;
    pub use crate::types::events::*;
    pub use crate::types::players::*;
    pub use crate::types::state::*;
    pub use crate::types::wallet::*;
    pub use crate::{ByokConfig, ByokError, Client};
}
