use crate::{
    adapter::{
        AppleAdapter,
        ConnectorFactory,
        SpotifyAdapter,
    },
    apple::AppleConnector,
    error::ProviderError,
    provider::{
        AppleCredentials,
        SpotifyCredentials,
    },
    spotify::SpotifyConnector,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct ConnectorSettings {
    pub spotify_base_url: Url,
    pub spotify_auth_url: Url,
    pub apple_base_url: Url,
    pub request_timeout: Duration,
}

/// Creates the HTTP connectors, all sharing one client and its request timeout.
#[derive(Debug, Clone)]
pub struct HttpConnectorFactory {
    client: Client,
    settings: ConnectorSettings,
}

impl HttpConnectorFactory {
    pub fn new(settings: ConnectorSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: ConnectorSettings) -> Self {
        Self { client, settings }
    }
}

impl ConnectorFactory for HttpConnectorFactory {
    fn spotify(&self, credentials: SpotifyCredentials) -> Result<Box<dyn SpotifyAdapter>, ProviderError> {
        Ok(Box::new(SpotifyConnector::new(
            self.client.clone(),
            self.settings.spotify_base_url.clone(),
            self.settings.spotify_auth_url.clone(),
            credentials,
        )))
    }

    fn apple(&self, credentials: AppleCredentials) -> Result<Box<dyn AppleAdapter>, ProviderError> {
        Ok(Box::new(AppleConnector::new(
            self.client.clone(),
            self.settings.apple_base_url.clone(),
            credentials,
        )))
    }
}
