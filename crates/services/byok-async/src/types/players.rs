use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Player registration payload
///
/// Each variant serializes to its own body shape; `display_name` is omitted
/// when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegisterPlayerRequest {
    /// Register via Steam id (e.g. `76561198...`)
    Steam {
        /// Steam id
        steam_id: String,
        /// Optional display name
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
    },
    /// Register via anonymous device UUID
    Device {
        /// Device id
        device_id: String,
        /// Optional display name
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
    },
    /// Register via an external auth provider (e.g. Epic)
    External {
        /// Provider-specific user id
        external_id: String,
        /// Provider name
        external_provider: String,
        /// Optional display name
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
    },
}

impl RegisterPlayerRequest {
    /// Steam registration
    #[must_use]
    pub fn steam(steam_id: impl Into<String>) -> Self {
        Self::Steam {
            steam_id: steam_id.into(),
            display_name: None,
        }
    }

    /// Device registration
    #[must_use]
    pub fn device(device_id: impl Into<String>) -> Self {
        Self::Device {
            device_id: device_id.into(),
            display_name: None,
        }
    }

    /// External-provider registration
    #[must_use]
    pub fn external(external_id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::External {
            external_id: external_id.into(),
            external_provider: provider.into(),
            display_name: None,
        }
    }

    /// Sets the display name on any variant
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        let slot = match &mut self {
            Self::Steam { display_name, .. }
            | Self::Device { display_name, .. }
            | Self::External { display_name, .. } => display_name,
        };
        *slot = Some(name.into());
        self
    }
}

/// Result of a registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPlayerResponse {
    /// BYOK user id for the player
    #[serde(default)]
    pub user_id: String,
    /// `true` if a new player was created, `false` if it already existed
    #[serde(default)]
    pub created: bool,
}

/// Behavioral dimensions of a player profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfileDimensions {
    /// Diplomacy (low) vs. aggression (high)
    #[serde(default)]
    pub diplomacy_vs_aggression: f64,
    /// Curiosity score
    #[serde(default)]
    pub curiosity: f64,
    /// Morality score
    #[serde(default)]
    pub morality: f64,
}

/// A player's behavioral profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfileResponse {
    /// Player id
    #[serde(default)]
    pub player_id: String,
    /// Game id
    #[serde(default)]
    pub game_id: String,
    /// Behavioral dimensions
    #[serde(default)]
    pub dimensions: PlayerProfileDimensions,
    /// Profile tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of recorded interactions
    #[serde(default)]
    pub total_interactions: u64,
    /// Social investment score
    #[serde(default)]
    pub social_investment: f64,
    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: String,
}

/// Query parameters for the highlight reel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightParams {
    /// Maximum number of highlights (server default 50, max 200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only return highlights after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

impl HighlightParams {
    /// Sets the limit
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the lower time bound
    #[must_use]
    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }
}

/// A player's highlight reel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightReelResponse {
    /// Highlight entries (shape defined by the server)
    #[serde(default)]
    pub highlights: Vec<serde_json::Value>,
}

/// Spending intelligence, returned as an opaque JSON object
pub type SpendingIntelligenceResponse = JsonObject;

/// A player's cross-game passport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassportResponse {
    /// Player id
    #[serde(default)]
    pub player_id: String,
    /// Aggregated profile data
    #[serde(default)]
    pub profile: JsonObject,
    /// Number of games contributing to the passport
    #[serde(default)]
    pub game_count: u64,
    /// Interactions across all games
    #[serde(default)]
    pub total_interactions: u64,
    /// Last computation timestamp (ISO 8601)
    #[serde(default)]
    pub last_computed_at: String,
}

/// Grants or revokes cross-game passport consent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportConsentRequest {
    /// Whether consent is granted
    pub consent: bool,
}

/// Consent state after an update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportConsentResponse {
    /// Current consent state
    #[serde(default)]
    pub consent_granted: bool,
    /// Player id
    #[serde(default)]
    pub player_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn registration_variants_serialize_to_distinct_shapes() {
        assert_eq!(
            serde_json::to_value(RegisterPlayerRequest::steam("7656")).unwrap(),
            json!({"steam_id": "7656"})
        );
        assert_eq!(
            serde_json::to_value(RegisterPlayerRequest::device("dev-1").with_display_name("Ada"))
                .unwrap(),
            json!({"device_id": "dev-1", "display_name": "Ada"})
        );
        assert_eq!(
            serde_json::to_value(RegisterPlayerRequest::external("e-9", "epic")).unwrap(),
            json!({"external_id": "e-9", "external_provider": "epic"})
        );
    }

    #[test]
    fn highlight_params_omit_unset_fields() {
        let p = HighlightParams::default().with_limit(10);
        assert_eq!(serde_json::to_value(&p).unwrap(), json!({"limit": 10}));
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let p: PlayerProfileResponse =
            serde_json::from_value(json!({"player_id": "p1", "tags": ["explorer"]})).unwrap();
        assert_eq!(p.player_id, "p1");
        assert_eq!(p.tags, vec!["explorer"]);
        assert!(p.dimensions.curiosity.abs() < f64::EPSILON);
    }
}
