use reqwest::header::HeaderMap;

use crate::{
    client::Client,
    compose::identity_headers,
    config::Config,
    error::ByokError,
    types::players::{
        HighlightParams, HighlightReelResponse, PassportConsentRequest, PassportConsentResponse,
        PassportResponse, PlayerProfileResponse, RegisterPlayerRequest, RegisterPlayerResponse,
        SpendingIntelligenceResponse,
    },
};

/// API resource for player registration, profiles, and passports
pub struct Players<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Players<'c, C> {
    /// Creates a new Players resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    fn player_path(player_id: &str, leaf: &str) -> String {
        format!(
            "/api/v1/players/{}/{leaf}",
            urlencoding::encode(player_id)
        )
    }

    /// Register a player (or look up an existing one)
    ///
    /// Only the API key is sent; no player identity header is attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn register(
        &self,
        req: RegisterPlayerRequest,
    ) -> Result<RegisterPlayerResponse, ByokError> {
        self.client
            .post("/api/v1/users/register", &req, HeaderMap::new())
            .await
    }

    /// Get a player's behavioral profile
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn profile(
        &self,
        player_id: &str,
        user_id: Option<&str>,
    ) -> Result<PlayerProfileResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .get(&Self::player_path(player_id, "profile"), headers)
            .await
    }

    /// Get a player's highlight reel
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn highlights(
        &self,
        player_id: &str,
        params: &HighlightParams,
        user_id: Option<&str>,
    ) -> Result<HighlightReelResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .get_with_query(&Self::player_path(player_id, "highlights"), params, headers)
            .await
    }

    /// Get a player's spending intelligence as raw JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn spending(
        &self,
        player_id: &str,
        user_id: Option<&str>,
    ) -> Result<SpendingIntelligenceResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .get(&Self::player_path(player_id, "spending"), headers)
            .await
    }

    /// Get a player's cross-game passport
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn passport(
        &self,
        target_user_id: &str,
        user_id: Option<&str>,
    ) -> Result<PassportResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        let path = format!("/api/v1/passport/{}", urlencoding::encode(target_user_id));
        self.client.get(&path, headers).await
    }

    /// Grant or revoke cross-game passport consent
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_passport_consent(
        &self,
        consent: bool,
        user_id: Option<&str>,
    ) -> Result<PassportConsentResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .post(
                "/api/v1/passport/consent",
                &PassportConsentRequest { consent },
                headers,
            )
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Players API resource
    #[must_use]
    pub const fn players(&self) -> Players<'_, C> {
        Players::new(self)
    }
}
