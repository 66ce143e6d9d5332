//! Outgoing request composition: identity headers and the chat body.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::{
    config::{Config, HDR_BYOK_SESSION, HDR_BYOK_USER},
    error::ByokError,
    types::{
        JsonObject,
        chat::{ChatMessage, ChatRequest, QualityTier},
    },
};

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ByokError> {
    HeaderValue::from_str(value).map_err(|_| ByokError::Config(format!("Invalid {name} header")))
}

/// Builds the per-call identity headers
///
/// `X-Byok-User` is always present: the per-call user id, else the client
/// default, else an empty string. `X-Byok-Session` is only added when a
/// session token is given.
///
/// # Errors
///
/// Returns `ByokError::Config` if a value is not a valid header value.
pub fn identity_headers<C: Config + ?Sized>(
    config: &C,
    user_id: Option<&str>,
    session_token: Option<&str>,
) -> Result<HeaderMap, ByokError> {
    let mut h = HeaderMap::new();

    let user = user_id.or_else(|| config.default_user_id()).unwrap_or("");
    h.insert(
        HeaderName::from_static(HDR_BYOK_USER),
        header_value("X-Byok-User", user)?,
    );

    if let Some(token) = session_token {
        h.insert(
            HeaderName::from_static(HDR_BYOK_SESSION),
            header_value("X-Byok-Session", token)?,
        );
    }

    Ok(h)
}

/// Wire body of `POST /api/v1/chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatBody<'a> {
    /// Messages in caller order
    pub messages: &'a [ChatMessage],
    /// Transport mode of this call
    pub stream: bool,
    /// Lower-cased tier name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_tier: Option<QualityTier>,
    /// Passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lorevault_entity_ref: Option<&'a str>,
    /// Passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_state: Option<&'a JsonObject>,
}

/// Borrows a [`ChatRequest`] as its wire body
///
/// `stream` is the actual transport mode and wins over `req.stream`.
#[must_use]
pub fn chat_body(req: &ChatRequest, stream: bool) -> ChatBody<'_> {
    ChatBody {
        messages: &req.messages,
        stream,
        quality_tier: req.quality_tier,
        lorevault_entity_ref: req.lorevault_entity_ref.as_deref(),
        game_state: req.game_state.as_ref(),
    }
}

/// A fully composed chat call
#[derive(Debug, Clone)]
pub struct ComposedRequest<'a> {
    /// JSON body
    pub body: ChatBody<'a>,
    /// Authorization plus identity headers
    pub headers: HeaderMap,
}

/// Composes body and headers for a chat call
///
/// # Errors
///
/// Returns `ByokError::Config` if any header value is invalid.
pub fn compose_chat<'a, C: Config + ?Sized>(
    config: &C,
    req: &'a ChatRequest,
    stream: bool,
) -> Result<ComposedRequest<'a>, ByokError> {
    let mut headers = config.headers()?;
    headers.extend(identity_headers(
        config,
        req.user_id.as_deref(),
        req.session_token.as_deref(),
    )?);

    Ok(ComposedRequest {
        body: chat_body(req, stream),
        headers,
    })
}
