//! Type definitions for BYOK API requests and responses

/// Chat completion types
pub mod chat;
/// Game event types
pub mod events;
/// Player registration, profile, and passport types
pub mod players;
/// Player state types
pub mod state;
/// Wallet types
pub mod wallet;

/// Free-form JSON object passed through verbatim
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

pub use chat::{
    ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatStreamChunk, QualityTier,
};
pub use events::{GameEvent, IngestEventRequest, PollEventsParams};
pub use players::{HighlightParams, RegisterPlayerRequest, RegisterPlayerResponse};
pub use state::{PlayerState, UpdateStateRequest};
pub use wallet::{CheckoutRequest, CheckoutResponse, WalletResponse};
