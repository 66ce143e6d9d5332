use reqwest::header::HeaderMap;
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::ByokError};

/// BYOK API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and API configuration. Cloning is cheap and clones share
/// one connection pool.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::ByokConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables:
    /// - `BYOK_API_KEY` for the SDK API key
    /// - `BYOK_BASE_URL` for a custom API base URL
    /// - `BYOK_USER_ID` for the default player id
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::ByokConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a caller-owned one
    ///
    /// The caller keeps control of the pool's lifecycle; this client only
    /// holds a clone.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<O: DeserializeOwned>(
        &self,
        path: &str,
        extra: HeaderMap,
    ) -> Result<O, ByokError> {
        let request = self
            .http
            .get(self.config.url(path))
            .headers(self.config.headers()?)
            .headers(extra)
            .query(&self.config.query())
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn get_with_query<Q, O>(
        &self,
        path: &str,
        query: &Q,
        extra: HeaderMap,
    ) -> Result<O, ByokError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let request = self
            .http
            .get(self.config.url(path))
            .headers(self.config.headers()?)
            .headers(extra)
            .query(&self.config.query())
            .query(query)
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn post<I, O>(
        &self,
        path: &str,
        body: &I,
        extra: HeaderMap,
    ) -> Result<O, ByokError>
    where
        I: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.config.url(path))
            .headers(self.config.headers()?)
            .headers(extra)
            .query(&self.config.query())
            .json(body)
            .build()?;
        self.execute(request).await
    }

    /// Sends a POST without a body
    pub(crate) async fn post_empty<O: DeserializeOwned>(
        &self,
        path: &str,
        extra: HeaderMap,
    ) -> Result<O, ByokError> {
        let request = self
            .http
            .post(self.config.url(path))
            .headers(self.config.headers()?)
            .headers(extra)
            .query(&self.config.query())
            .build()?;
        self.execute(request).await
    }

    /// Sends a POST request and returns the raw response for streaming.
    ///
    /// The status is classified once, before any body bytes are decoded.
    pub(crate) async fn post_stream<I>(
        &self,
        path: &str,
        body: &I,
        extra: HeaderMap,
    ) -> Result<reqwest::Response, ByokError>
    where
        I: Serialize + Sync + ?Sized,
    {
        self.config.validate_auth()?;

        let request = self
            .http
            .post(self.config.url(path))
            .headers(self.config.headers()?)
            .headers(extra)
            .query(&self.config.query())
            .json(body)
            .build()?;

        tracing::debug!(method = %request.method(), url = %request.url(), "opening BYOK stream");
        let response = self.http.execute(request).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(reject_response(response).await)
    }

    async fn execute<O: DeserializeOwned>(&self, request: reqwest::Request) -> Result<O, ByokError> {
        // Validate auth before any request
        self.config.validate_auth()?;

        tracing::debug!(method = %request.method(), url = %request.url(), "sending BYOK request");
        let response = self.http.execute(request).await?;

        if !response.status().is_success() {
            return Err(reject_response(response).await);
        }
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))
    }
}

/// Classifies a non-2xx response; an unreadable body counts as empty
async fn reject_response(response: reqwest::Response) -> ByokError {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to read BYOK error body");
        Default::default()
    });
    crate::error::reject(status, &headers, &body)
}
