use crate::{
    harvest::{
        Snapshot,
        SnapshotAggregator,
    },
    store::SnapshotStore,
};
use color_eyre::Result;
use eyre::Context as _;
use podcast_harvester_config::{
    Args,
    Config,
    CredentialResolver,
    EnvSecretStore,
    SecretStore,
};
use podcast_harvester_connectors::{
    ConnectorFactory,
    ConnectorSettings,
    HttpConnectorFactory,
};

/// One harvest run: resolve credentials, query the providers, persist the snapshot.
pub struct App {
    resolver: CredentialResolver,
    aggregator: SnapshotAggregator,
    store: SnapshotStore,
}

impl App {
    pub fn new(args: Args) -> Result<Self> {
        let config = Config::new(args).context("Failed to load configuration")?;
        let settings = ConnectorSettings {
            spotify_base_url: config.spotify.base_url.clone(),
            spotify_auth_url: config.spotify.auth_url.clone(),
            apple_base_url: config.apple.base_url.clone(),
            request_timeout: config.request_timeout()?,
        };
        let factory = HttpConnectorFactory::new(settings).context("Failed to create HTTP client")?;

        Ok(Self::from_parts(&config, EnvSecretStore::new(), factory))
    }

    pub fn from_parts(
        config: &Config,
        secrets: impl SecretStore + 'static,
        factory: impl ConnectorFactory + 'static,
    ) -> Self {
        Self {
            resolver: CredentialResolver::new(config.secrets_file(), secrets),
            aggregator: SnapshotAggregator::new(factory),
            store: SnapshotStore::new(config.output_file()),
        }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Fails only when no credentials can be resolved or the snapshot cannot
    /// be written; provider failures are recorded inside the snapshot.
    pub async fn run(&self) -> Result<Snapshot> {
        let credentials = self.resolver.resolve()?;

        let snapshot = self.aggregator.harvest(&credentials).await;

        self.store.save(&snapshot).await?;
        info!(
            path = %self.store.path().display(),
            summary = %snapshot.summary(),
            "Snapshot written"
        );

        Ok(snapshot)
    }
}
