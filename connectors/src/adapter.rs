use crate::{
    error::ProviderError,
    provider::{
        AppleCredentials,
        SpotifyCredentials,
    },
    window::DateWindow,
};
use futures::future::BoxFuture;
use serde_json::Value;

pub type QueryResult<'a> = BoxFuture<'a, Result<Value, ProviderError>>;

/// Queries exposed by the Spotify podcasters analytics.
///
/// Responses are passed through untouched.
pub trait SpotifyAdapter: Send + Sync {
    /// Show metadata, including all-time follower, start and stream totals.
    fn metadata(&self) -> QueryResult<'_>;

    /// Daily listener counts for every day in `window`.
    fn listeners(&self, window: DateWindow) -> QueryResult<'_>;

    /// Demographic breakdown (age, gender, country) over `window`.
    fn aggregate(&self, window: DateWindow) -> QueryResult<'_>;
}

/// Queries exposed by Apple Podcasts Connect analytics.
pub trait AppleAdapter: Send + Sync {
    /// All-time show overview.
    fn overview(&self) -> QueryResult<'_>;

    /// Play count and listener trend series.
    fn trends(&self) -> QueryResult<'_>;
}

/// Builds provider connectors from validated credentials.
pub trait ConnectorFactory: Send + Sync {
    fn spotify(&self, credentials: SpotifyCredentials) -> Result<Box<dyn SpotifyAdapter>, ProviderError>;

    fn apple(&self, credentials: AppleCredentials) -> Result<Box<dyn AppleAdapter>, ProviderError>;
}
