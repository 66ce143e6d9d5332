use tokio_util::sync::CancellationToken;

use crate::{
    client::Client,
    compose::compose_chat,
    config::Config,
    error::ByokError,
    sse::{ChatStream, chunk_stream_from_response},
    types::chat::{ChatRequest, ChatResponse},
};

const CHAT_COMPLETIONS: &str = "/api/v1/chat/completions";

/// API resource for the `/api/v1/chat/completions` endpoint
pub struct Chat<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Chat<'c, C> {
    /// Creates a new Chat resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Send a chat completion and wait for the whole response
    ///
    /// The body is always sent with `"stream": false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns a non-2xx
    /// status, or the response body is empty or malformed.
    pub async fn send(&self, req: ChatRequest) -> Result<ChatResponse, ByokError> {
        let composed = compose_chat(self.client.config(), &req, false)?;
        self.client
            .post(CHAT_COMPLETIONS, &composed.body, composed.headers)
            .await
    }

    /// Stream a chat completion as incremental chunks
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it before
    /// streaming starts. Errors during streaming are yielded by the stream.
    pub async fn stream(&self, req: ChatRequest) -> Result<ChatStream, ByokError> {
        self.stream_with_cancel(req, CancellationToken::new()).await
    }

    /// Stream a chat completion, stopping early when `cancel` fires
    ///
    /// Cancelling makes the stream yield [`ByokError::Cancelled`] and end.
    ///
    /// # Errors
    ///
    /// Same as [`stream`](Self::stream).
    pub async fn stream_with_cancel(
        &self,
        req: ChatRequest,
        cancel: CancellationToken,
    ) -> Result<ChatStream, ByokError> {
        let composed = compose_chat(self.client.config(), &req, true)?;
        let response = self
            .client
            .post_stream(CHAT_COMPLETIONS, &composed.body, composed.headers)
            .await?;
        Ok(chunk_stream_from_response(response, cancel))
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Chat API resource
    #[must_use]
    pub const fn chat(&self) -> Chat<'_, C> {
        Chat::new(self)
    }
}
