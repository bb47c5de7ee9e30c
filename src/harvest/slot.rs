use serde::{
    de::DeserializeOwned,
    ser::SerializeMap,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use std::fmt;

/// Outcome of harvesting one provider.
///
/// Persisted as the payload object itself, `{"error": "..."}` for a failure,
/// or `{}` when the provider is not configured.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderSlot<P> {
    Harvested(P),
    Failed { error: String },
    NotConfigured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SlotStatus {
    #[strum(serialize = "harvested")]
    Harvested,
    #[strum(serialize = "failed")]
    Failed,
    #[strum(serialize = "not configured")]
    NotConfigured,
}

impl<P> ProviderSlot<P> {
    pub fn failed(error: impl fmt::Display) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }

    pub fn status(&self) -> SlotStatus {
        match self {
            Self::Harvested(_) => SlotStatus::Harvested,
            Self::Failed { .. } => SlotStatus::Failed,
            Self::NotConfigured => SlotStatus::NotConfigured,
        }
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            Self::Harvested(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

impl<P> Default for ProviderSlot<P> {
    fn default() -> Self {
        Self::NotConfigured
    }
}

impl<P: Serialize> Serialize for ProviderSlot<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Harvested(payload) => payload.serialize(serializer),
            Self::Failed { error } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
            Self::NotConfigured => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FailedRepr {
    error: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EmptyRepr {}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlotRepr<P> {
    Failed(FailedRepr),
    Harvested(P),
    NotConfigured(EmptyRepr),
}

impl<'de, P: DeserializeOwned> Deserialize<'de> for ProviderSlot<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SlotRepr::<P>::deserialize(deserializer)? {
            SlotRepr::Failed(FailedRepr { error }) => Self::Failed { error },
            SlotRepr::Harvested(payload) => Self::Harvested(payload),
            SlotRepr::NotConfigured(EmptyRepr {}) => Self::NotConfigured,
        })
    }
}
