use crate::{
    client::Client,
    compose::identity_headers,
    config::Config,
    error::ByokError,
    types::state::{PlayerState, UpdateStateRequest},
};

const STATE: &str = "/api/v1/state";

/// API resource for persistent player state
pub struct State<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> State<'c, C> {
    /// Creates a new State resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetch the player's state
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, user_id: Option<&str>) -> Result<PlayerState, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client.get(STATE, headers).await
    }

    /// Merge an update into the player's state and return the result
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(
        &self,
        req: &UpdateStateRequest,
        user_id: Option<&str>,
    ) -> Result<PlayerState, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client.post(STATE, req, headers).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the State API resource
    #[must_use]
    pub const fn state(&self) -> State<'_, C> {
        State::new(self)
    }
}
