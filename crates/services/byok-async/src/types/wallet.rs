use serde::{Deserialize, Serialize};

/// Player wallet balance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletResponse {
    /// Wallet id
    #[serde(default)]
    pub id: String,
    /// Total balance in cents
    #[serde(default)]
    pub balance_cents: i64,
    /// Cents held for in-flight requests
    #[serde(default)]
    pub held_cents: i64,
    /// Spendable cents
    #[serde(default)]
    pub available_cents: i64,
    /// ISO currency code
    #[serde(default)]
    pub currency: String,
    /// Wallet status (e.g. `active`, `frozen`)
    #[serde(default)]
    pub status: String,
    /// Preferred quality tier, if set
    #[serde(default)]
    pub quality_preference: Option<String>,
}

/// Starts a top-up checkout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Amount in cents (100-50000)
    pub amount_cents: u32,
    /// Redirect after success; defaults to a hosted page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Redirect after cancel; defaults to a hosted page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

impl CheckoutRequest {
    /// Checkout for the given amount
    #[must_use]
    pub const fn new(amount_cents: u32) -> Self {
        Self {
            amount_cents,
            success_url: None,
            cancel_url: None,
        }
    }

    /// Sets both redirect URLs
    #[must_use]
    pub fn with_redirects(
        mut self,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        self.success_url = Some(success_url.into());
        self.cancel_url = Some(cancel_url.into());
        self
    }
}

/// Checkout session to open in a browser or webview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Hosted checkout URL
    #[serde(default)]
    pub checkout_url: String,
}
