use super::slot::ProviderSlot;
use chrono::{
    DateTime,
    Utc,
};
use podcast_harvester_connectors::Provider;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyPayload {
    pub metadata: Value,
    pub listeners: Value,
    pub aggregate: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplePayload {
    pub overview: Value,
    pub trends: Value,
}

/// Result of one harvest run, the document the dashboard reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub spotify: ProviderSlot<SpotifyPayload>,
    #[serde(default)]
    pub apple: ProviderSlot<ApplePayload>,
}

impl Snapshot {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            spotify: ProviderSlot::NotConfigured,
            apple: ProviderSlot::NotConfigured,
        }
    }

    /// One-line description such as `spotify: harvested, apple: failed (rate limited)`.
    pub fn summary(&self) -> String {
        [
            (Provider::Spotify, self.spotify.status(), self.spotify.error()),
            (Provider::Apple, self.apple.status(), self.apple.error()),
        ]
        .into_iter()
        .map(|(provider, status, error)| match error {
            Some(error) => format!("{provider}: {status} ({error})"),
            None => format!("{provider}: {status}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
    }
}
