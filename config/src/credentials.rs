//! Provider credentials and the resolver that picks their source.
//!
//! Credentials come from exactly one place per run: the local JSON document
//! when it exists, otherwise the injected [`SecretStore`]. The two are never
//! merged.

use crate::secret_store::SecretStore;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::BTreeMap,
    io,
    path::{
        Path,
        PathBuf,
    },
};

/// Value of a provider's `podcast_id` meaning "intentionally left unconfigured".
pub const NOT_CONFIGURED: &str = "FILL_ME_IN";

/// Field every provider section is keyed by.
pub const PRIMARY_IDENTIFIER: &str = "podcast_id";

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error(
        "no credentials found: create {} or provide the secrets through the environment",
        .local_path.display()
    )]
    NoSource { local_path: PathBuf },
    #[error("failed to read credentials from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed credential document {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("secret store unavailable: {0}")]
    SecretStore(String),
    #[error("missing required field `{field}` in the {provider} credentials")]
    MissingField { provider: String, field: String },
}

/// Opaque string fields of a single provider's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderSection {
    fields: BTreeMap<String, String>,
}

impl ProviderSection {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the field value, treating absent and empty values alike.
    pub fn require(&self, provider: &str, field: &str) -> Result<String, ConfigurationError> {
        match self.get(field) {
            Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
            _ => Err(ConfigurationError::MissingField {
                provider: provider.to_string(),
                field: field.to_string(),
            }),
        }
    }

    pub fn is_not_configured(&self) -> bool {
        self.get(PRIMARY_IDENTIFIER) == Some(NOT_CONFIGURED)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProviderSection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Provider name to provider configuration, as found in one credential source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials {
    sections: BTreeMap<String, ProviderSection>,
}

impl Credentials {
    pub fn section(&self, provider: &str) -> Option<&ProviderSection> {
        self.sections.get(provider)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn from_json(path: &Path, content: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(content).map_err(|source| ConfigurationError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<K: Into<String>> FromIterator<(K, ProviderSection)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, ProviderSection)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

pub struct CredentialResolver {
    local_path: PathBuf,
    fallback: Box<dyn SecretStore>,
}

impl CredentialResolver {
    pub fn new(local_path: impl Into<PathBuf>, fallback: impl SecretStore + 'static) -> Self {
        Self {
            local_path: local_path.into(),
            fallback: Box::new(fallback),
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Reads the local document if it exists, otherwise asks the fallback store.
    ///
    /// # Errors
    /// Fails with [`ConfigurationError::NoSource`] when neither source has
    /// credentials. A local document that exists but cannot be parsed is an
    /// error of its own; the fallback is not consulted in that case.
    pub fn resolve(&self) -> Result<Credentials, ConfigurationError> {
        match std::fs::read_to_string(&self.local_path) {
            Ok(content) => {
                let credentials = Credentials::from_json(&self.local_path, &content)?;
                info!(path = %self.local_path.display(), "Using local credential document");
                return Ok(credentials);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.local_path.display(), "No local credential document");
            }
            Err(source) => {
                return Err(ConfigurationError::Read {
                    path: self.local_path.clone(),
                    source,
                })
            }
        }

        match self.fallback.load()? {
            Some(credentials) => {
                info!(store = self.fallback.name(), "Using fallback secret store");
                Ok(credentials)
            }
            None => Err(ConfigurationError::NoSource {
                local_path: self.local_path.clone(),
            }),
        }
    }
}
