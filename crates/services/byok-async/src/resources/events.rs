use crate::{
    client::Client,
    compose::identity_headers,
    config::Config,
    error::ByokError,
    types::events::{
        AcknowledgeBatchRequest, AcknowledgeBatchResponse, AcknowledgeResponse,
        IngestEventRequest, IngestEventResponse, PollEventsParams, PollEventsResponse,
    },
};

/// API resource for game events
pub struct Events<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Events<'c, C> {
    /// Creates a new Events resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Poll for pending events
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn poll(
        &self,
        params: &PollEventsParams,
        user_id: Option<&str>,
    ) -> Result<PollEventsResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .get_with_query("/api/v1/events", params, headers)
            .await
    }

    /// Acknowledge one event
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn ack(
        &self,
        event_id: &str,
        user_id: Option<&str>,
    ) -> Result<AcknowledgeResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        let path = format!("/api/v1/events/{}/ack", urlencoding::encode(event_id));
        self.client.post_empty(&path, headers).await
    }

    /// Acknowledge several events at once
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn ack_batch(
        &self,
        event_ids: &[String],
        user_id: Option<&str>,
    ) -> Result<AcknowledgeBatchResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .post(
                "/api/v1/events/ack",
                &AcknowledgeBatchRequest { event_ids },
                headers,
            )
            .await
    }

    /// Report a game-world event
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn ingest(
        &self,
        req: &IngestEventRequest,
        user_id: Option<&str>,
    ) -> Result<IngestEventResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .post("/api/v1/events/ingest", req, headers)
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Events API resource
    #[must_use]
    pub const fn events(&self) -> Events<'_, C> {
        Events::new(self)
    }
}
