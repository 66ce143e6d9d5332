use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Persistent per-player game state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Activated story markers
    #[serde(default)]
    pub markers_activated: Vec<String>,
    /// Current location
    #[serde(default)]
    pub location: Option<String>,
    /// Custom key-value data
    #[serde(default)]
    pub custom: JsonObject,
}

/// Partial state update
///
/// Markers merge additively and `custom` is deep-merged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateStateRequest {
    /// Markers to add
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers_activated: Option<Vec<String>>,
    /// New location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Custom data to merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonObject>,
}

impl UpdateStateRequest {
    /// Adds markers
    #[must_use]
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers_activated = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets custom data
    #[must_use]
    pub fn with_custom(mut self, custom: JsonObject) -> Self {
        self.custom = Some(custom);
        self
    }
}
