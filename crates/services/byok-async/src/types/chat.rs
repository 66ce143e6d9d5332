//! Types for the `/api/v1/chat/completions` endpoint

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::JsonObject;

/// AI quality tier selecting the cost/quality level of the backing model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Cheapest model tier
    Budget,
    /// Default tier
    Standard,
    /// Highest quality tier
    Ultra,
}

/// A single message in the conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Speaker role (`user`, `assistant`, `system`)
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Creates a message with an arbitrary role
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a `user` message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an `assistant` message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Creates a `system` message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// A chat completion call
///
/// The wire body is produced by [`crate::compose::chat_body`]; `user_id` and
/// `session_token` travel as headers, never in the body.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct ChatRequest {
    /// Message history in conversation order
    pub messages: Vec<ChatMessage>,
    /// AI quality tier (server default: standard)
    pub quality_tier: Option<QualityTier>,
    /// Caller's streaming preference; `send` and `stream` always use their own mode
    pub stream: bool,
    /// LoreVault entity reference, e.g. `characters/blacksmith-thorn`
    pub lorevault_entity_ref: Option<String>,
    /// Arbitrary game state passed as context to the AI
    pub game_state: Option<JsonObject>,
    /// Player/user id; overrides the client default for this call
    pub user_id: Option<String>,
    /// Worker session token (LoreVault worker sessions)
    pub session_token: Option<String>,
}

impl ChatRequest {
    /// Creates a request with the given message history
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Returns a builder for the request
    #[must_use]
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }

    /// Sets the quality tier
    #[must_use]
    pub fn with_quality_tier(mut self, tier: QualityTier) -> Self {
        self.quality_tier = Some(tier);
        self
    }

    /// Sets the LoreVault entity reference
    #[must_use]
    pub fn with_lorevault_entity_ref(mut self, entity: impl Into<String>) -> Self {
        self.lorevault_entity_ref = Some(entity.into());
        self
    }

    /// Sets the game state object
    #[must_use]
    pub fn with_game_state(mut self, state: JsonObject) -> Self {
        self.game_state = Some(state);
        self
    }

    /// Overrides the acting user for this call
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the worker session token
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

/// A completion choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// Index of the choice
    #[serde(default)]
    pub index: u32,
    /// Generated assistant message
    pub message: ChatMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl Default for ChatMessage {
    fn default() -> Self {
        Self::new("user", "")
    }
}

/// Token usage for a completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUsage {
    /// Prompt tokens
    #[serde(default)]
    pub prompt_tokens: u64,
    /// Completion tokens
    #[serde(default)]
    pub completion_tokens: u64,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: u64,
}

/// Response from a non-streaming chat completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Completion id
    #[serde(default)]
    pub id: String,
    /// Object type
    #[serde(default)]
    pub object: String,
    /// Model that served the request
    #[serde(default)]
    pub model: String,
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: ChatUsage,
}

impl ChatResponse {
    /// Content of the first choice, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// One decoded increment of a streamed completion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStreamChunk {
    /// Text delta; always empty on the terminal chunk
    pub content: String,
    /// `true` on the final chunk only
    pub done: bool,
}

impl ChatStreamChunk {
    /// A non-terminal chunk carrying text
    #[must_use]
    pub fn delta(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    /// The terminal chunk
    #[must_use]
    pub const fn done() -> Self {
        Self {
            content: String::new(),
            done: true,
        }
    }
}
