use crate::{
    client::Client,
    compose::identity_headers,
    config::Config,
    error::ByokError,
    types::wallet::{CheckoutRequest, CheckoutResponse, WalletResponse},
};

/// API resource for the player wallet
pub struct Wallet<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Wallet<'c, C> {
    /// Creates a new Wallet resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetch the wallet balance
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, user_id: Option<&str>) -> Result<WalletResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client.get("/api/v1/wallet", headers).await
    }

    /// Start a top-up checkout session
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn checkout(
        &self,
        req: &CheckoutRequest,
        user_id: Option<&str>,
    ) -> Result<CheckoutResponse, ByokError> {
        let headers = identity_headers(self.client.config(), user_id, None)?;
        self.client
            .post("/api/v1/wallet/checkout", req, headers)
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Wallet API resource
    #[must_use]
    pub const fn wallet(&self) -> Wallet<'_, C> {
        Wallet::new(self)
    }
}
