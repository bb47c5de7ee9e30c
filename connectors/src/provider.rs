use crate::error::ProviderError;
use podcast_harvester_config::ProviderSection;
use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    AsRefStr,
    Display,
    EnumIter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Spotify,
    Apple,
}

/// Validated fields required to build a Spotify connector.
#[derive(Clone, PartialEq, Eq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub podcast_id: String,
    pub sp_dc: String,
    pub sp_key: String,
}

impl SpotifyCredentials {
    pub fn from_section(section: &ProviderSection) -> Result<Self, ProviderError> {
        let provider = Provider::Spotify.as_ref();
        Ok(Self {
            client_id: section.require(provider, "client_id")?,
            podcast_id: section.require(provider, "podcast_id")?,
            sp_dc: section.require(provider, "sp_dc")?,
            sp_key: section.require(provider, "sp_key")?,
        })
    }
}

/// Validated fields required to build an Apple connector.
#[derive(Clone, PartialEq, Eq)]
pub struct AppleCredentials {
    pub podcast_id: String,
    pub myacinfo: String,
    pub itctx: String,
}

impl AppleCredentials {
    pub fn from_section(section: &ProviderSection) -> Result<Self, ProviderError> {
        let provider = Provider::Apple.as_ref();
        Ok(Self {
            podcast_id: section.require(provider, "podcast_id")?,
            myacinfo: section.require(provider, "myacinfo")?,
            itctx: section.require(provider, "itctx")?,
        })
    }
}

// Session cookies stay out of logs.
impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("podcast_id", &self.podcast_id)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for AppleCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppleCredentials")
            .field("podcast_id", &self.podcast_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn provider_names_match_credential_sections() {
        let names: Vec<String> = Provider::iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["spotify", "apple"]);
        assert_eq!(Provider::Apple.as_ref(), "apple");
    }

    #[test]
    fn spotify_credentials_require_every_field() {
        let section: ProviderSection = [("podcast_id", "show"), ("client_id", "client"), ("sp_dc", "dc")]
            .into_iter()
            .collect();

        let err = SpotifyCredentials::from_section(&section).unwrap_err();
        assert_eq!(
            err,
            ProviderError::Configuration("missing required field `sp_key` in the spotify credentials".to_string())
        );
    }

    #[test]
    fn apple_credentials_from_complete_section() {
        let section: ProviderSection = [("podcast_id", "1500"), ("myacinfo", "acinfo"), ("itctx", "ctx")]
            .into_iter()
            .collect();

        let credentials = AppleCredentials::from_section(&section).unwrap();
        assert_eq!(credentials.podcast_id, "1500");
        assert_eq!(credentials.itctx, "ctx");
        assert!(!format!("{credentials:?}").contains("acinfo"));
    }
}
