use super::{
    slot::ProviderSlot,
    snapshot::{
        ApplePayload,
        Snapshot,
        SpotifyPayload,
    },
};
use chrono::{
    DateTime,
    Local,
    Utc,
};
use podcast_harvester_config::{
    Credentials,
    ProviderSection,
};
use podcast_harvester_connectors::{
    AppleCredentials,
    ConnectorFactory,
    DateWindow,
    Provider,
    ProviderError,
    SpotifyCredentials,
};
use std::future::Future;

/// Length of the trailing window used for the Spotify listener and demographic queries.
pub const SPOTIFY_WINDOW_DAYS: u64 = 30;

/// Queries both providers and assembles their results into a [`Snapshot`].
pub struct SnapshotAggregator {
    factory: Box<dyn ConnectorFactory>,
}

impl SnapshotAggregator {
    pub fn new(factory: impl ConnectorFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
        }
    }

    /// Harvests both providers, stamping the snapshot with the current time.
    pub async fn harvest(&self, credentials: &Credentials) -> Snapshot {
        self.harvest_at(credentials, Utc::now()).await
    }

    /// Harvests both providers for a snapshot taken at `timestamp`.
    ///
    /// Never fails: a provider that cannot be harvested ends up as an error
    /// marker in its slot, and the other provider is unaffected.
    #[instrument(level = "debug", skip(self, credentials))]
    pub async fn harvest_at(&self, credentials: &Credentials, timestamp: DateTime<Utc>) -> Snapshot {
        let today = timestamp.with_timezone(&Local).date_naive();
        let window = DateWindow::trailing_days(today, SPOTIFY_WINDOW_DAYS);

        let (spotify, apple) = tokio::join!(
            harvest_provider(Provider::Spotify, credentials, |section| self.spotify(section, window)),
            harvest_provider(Provider::Apple, credentials, |section| self.apple(section)),
        );

        Snapshot {
            spotify,
            apple,
            ..Snapshot::new(timestamp)
        }
    }

    async fn spotify(&self, section: ProviderSection, window: DateWindow) -> Result<SpotifyPayload, ProviderError> {
        let connector = self.factory.spotify(SpotifyCredentials::from_section(&section)?)?;

        let metadata = connector.metadata().await?;
        debug!(%window, "Querying Spotify listeners and demographics");
        let listeners = connector.listeners(window).await?;
        let aggregate = connector.aggregate(window).await?;

        Ok(SpotifyPayload {
            metadata,
            listeners,
            aggregate,
        })
    }

    async fn apple(&self, section: ProviderSection) -> Result<ApplePayload, ProviderError> {
        let connector = self.factory.apple(AppleCredentials::from_section(&section)?)?;

        let overview = connector.overview().await?;
        let trends = connector.trends().await?;

        Ok(ApplePayload { overview, trends })
    }
}

/// Runs one provider's harvest, converting its outcome into a slot.
async fn harvest_provider<P, F, Fut>(provider: Provider, credentials: &Credentials, harvest: F) -> ProviderSlot<P>
where
    F: FnOnce(ProviderSection) -> Fut,
    Fut: Future<Output = Result<P, ProviderError>>,
{
    let section = credentials.section(provider.as_ref()).cloned().unwrap_or_default();
    if section.is_not_configured() {
        debug!(%provider, "Provider not configured, skipping");
        return ProviderSlot::NotConfigured;
    }

    match harvest(section).await {
        Ok(payload) => {
            info!(%provider, "Provider harvested");
            ProviderSlot::Harvested(payload)
        }
        Err(error) => {
            warn!(%provider, %error, "Provider harvest failed");
            ProviderSlot::failed(error)
        }
    }
}
