use crate::credentials::{
    ConfigurationError,
    Credentials,
};
use std::collections::HashMap;

/// Fallback source of credentials, consulted only when no local document exists.
pub trait SecretStore: Send + Sync {
    /// Returns `Ok(None)` when the store holds no credentials at all.
    fn load(&self) -> Result<Option<Credentials>, ConfigurationError>;

    fn name(&self) -> &'static str;
}

/// Secrets taken from `PODCAST_SECRETS__<PROVIDER>__<FIELD>` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore {
    vars: Option<HashMap<String, String>>,
}

impl EnvSecretStore {
    pub const PREFIX: &'static str = "PODCAST_SECRETS";

    /// Reads the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the given variables instead of the process environment.
    pub fn from_vars<K: Into<String>, V: Into<String>>(vars: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }
}

impl SecretStore for EnvSecretStore {
    fn load(&self) -> Result<Option<Credentials>, ConfigurationError> {
        let environment = config::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("__")
            .separator("__")
            .source(self.vars.clone().map(|vars| vars.into_iter().collect()));

        let credentials: Credentials = config::Config::builder()
            .add_source(environment)
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| ConfigurationError::SecretStore(e.to_string()))?;

        if credentials.is_empty() {
            Ok(None)
        } else {
            debug!(providers = ?credentials.providers().collect::<Vec<_>>(), "Loaded secrets from environment");
            Ok(Some(credentials))
        }
    }

    fn name(&self) -> &'static str {
        "environment"
    }
}

/// Fixed in-memory credentials.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretStore {
    credentials: Option<Credentials>,
}

impl StaticSecretStore {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl SecretStore for StaticSecretStore {
    fn load(&self) -> Result<Option<Credentials>, ConfigurationError> {
        Ok(self.credentials.clone().filter(|c| !c.is_empty()))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
