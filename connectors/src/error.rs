use podcast_harvester_config::ConfigurationError;

/// Failure of a single provider, either while building its connector or while querying it.
///
/// The `Display` output is what ends up in the snapshot's error marker, so the
/// upstream variants print their message verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    Malformed(String),
}

impl From<ConfigurationError> for ProviderError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Upstream(err.to_string())
        }
    }
}
