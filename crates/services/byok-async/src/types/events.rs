use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::JsonObject;

/// A game event queued for the player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Event id
    #[serde(default)]
    pub id: String,
    /// Event type, e.g. `world.kill`
    #[serde(default)]
    pub event_type: String,
    /// Event-specific payload
    #[serde(default)]
    pub payload: JsonObject,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: String,
}

/// Query parameters for polling events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PollEventsParams {
    /// Only return events after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

impl PollEventsParams {
    /// Polls for events after `since`
    #[must_use]
    pub fn since(since: DateTime<Utc>) -> Self {
        Self { since: Some(since) }
    }
}

/// Pending events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollEventsResponse {
    /// Events in server order
    #[serde(default)]
    pub events: Vec<GameEvent>,
}

/// Result of acknowledging one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgeResponse {
    /// Whether the event was acknowledged
    #[serde(default)]
    pub acknowledged: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AcknowledgeBatchRequest<'a> {
    pub event_ids: &'a [String],
}

/// Result of a batch acknowledgement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgeBatchResponse {
    /// Number of events acknowledged
    #[serde(default)]
    pub acknowledged: u64,
}

/// Reports a game-world event to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestEventRequest {
    /// Event type, e.g. `world.discovery`
    pub event_type: String,
    /// Event-specific payload
    pub payload: JsonObject,
}

impl IngestEventRequest {
    /// Creates an ingest request
    #[must_use]
    pub fn new(event_type: impl Into<String>, payload: JsonObject) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }
}

/// Effects of an ingested event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestEventResponse {
    /// Processed effects (shape defined by the server)
    #[serde(default)]
    pub processed: Vec<serde_json::Value>,
    /// Echoed event type
    #[serde(default)]
    pub event_type: String,
    /// Number of effects produced
    #[serde(default)]
    pub effects_count: u64,
}
