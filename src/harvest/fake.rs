//! In-memory connectors with canned responses and call recording.

use futures::{
    future,
    FutureExt as _,
};
use podcast_harvester_config::{
    Credentials,
    ProviderSection,
};
use podcast_harvester_connectors::{
    AppleAdapter,
    AppleCredentials,
    ConnectorFactory,
    DateWindow,
    Provider,
    ProviderError,
    QueryResult,
    SpotifyAdapter,
    SpotifyCredentials,
};
use serde_json::{
    json,
    Value,
};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        Mutex,
    },
};

#[derive(Default)]
struct State {
    failures: HashMap<&'static str, ProviderError>,
    builds: Mutex<HashMap<Provider, usize>>,
    queries: Mutex<Vec<(Provider, &'static str)>>,
    windows: Mutex<Vec<DateWindow>>,
}

impl State {
    fn respond(&self, provider: Provider, query: &'static str) -> QueryResult<'static> {
        self.queries.lock().unwrap().push((provider, query));
        let result = match self.failures.get(query) {
            Some(error) => Err(error.clone()),
            None => Ok(FakeConnectors::response(query)),
        };
        future::ready(result).boxed()
    }

    fn build(&self, provider: Provider) -> Result<(), ProviderError> {
        *self.builds.lock().unwrap().entry(provider).or_default() += 1;
        match self.failures.get("build") {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Connector factory whose connectors answer every query with [`FakeConnectors::response`].
#[derive(Clone, Default)]
pub(crate) struct FakeConnectors {
    state: Arc<State>,
}

impl FakeConnectors {
    /// Makes `query` fail with `error`; `"build"` fails connector construction.
    pub(crate) fn failing(self, query: &'static str, error: ProviderError) -> Self {
        let mut failures = self.state.failures.clone();
        failures.insert(query, error);
        Self {
            state: Arc::new(State {
                failures,
                ..State::default()
            }),
        }
    }

    pub(crate) fn response(query: &str) -> Value {
        json!({ "query": query, "values": [1, 2, 3] })
    }

    pub(crate) fn credentials() -> Credentials {
        [
            (
                "spotify",
                [
                    ("client_id", "client-1"),
                    ("podcast_id", "show-1"),
                    ("sp_dc", "dc"),
                    ("sp_key", "key"),
                ]
                .into_iter()
                .collect::<ProviderSection>(),
            ),
            (
                "apple",
                [("podcast_id", "1500"), ("myacinfo", "acinfo"), ("itctx", "ctx")]
                    .into_iter()
                    .collect(),
            ),
        ]
        .into_iter()
        .collect()
    }

    pub(crate) fn credentials_with(provider: &str, fields: &[(&str, &str)]) -> Credentials {
        let base = Self::credentials();
        base.providers()
            .map(|name| {
                let section = if name == provider {
                    fields.iter().copied().collect()
                } else {
                    base.section(name).cloned().unwrap_or_default()
                };
                (name.to_string(), section)
            })
            .collect()
    }

    pub(crate) fn credentials_without(provider: &str) -> Credentials {
        let base = Self::credentials();
        base.providers()
            .filter(|name| *name != provider)
            .map(|name| (name.to_string(), base.section(name).cloned().unwrap_or_default()))
            .collect()
    }

    pub(crate) fn spotify_builds(&self) -> usize {
        self.builds(Provider::Spotify)
    }

    pub(crate) fn apple_builds(&self) -> usize {
        self.builds(Provider::Apple)
    }

    fn builds(&self, provider: Provider) -> usize {
        self.state.builds.lock().unwrap().get(&provider).copied().unwrap_or_default()
    }

    pub(crate) fn queries(&self, provider: Provider) -> Vec<&'static str> {
        self.state
            .queries
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| *p == provider)
            .map(|(_, query)| *query)
            .collect()
    }

    pub(crate) fn windows(&self) -> Vec<DateWindow> {
        self.state.windows.lock().unwrap().clone()
    }
}

struct FakeSpotify(Arc<State>);

impl SpotifyAdapter for FakeSpotify {
    fn metadata(&self) -> QueryResult<'_> {
        self.0.respond(Provider::Spotify, "metadata")
    }

    fn listeners(&self, window: DateWindow) -> QueryResult<'_> {
        self.0.windows.lock().unwrap().push(window);
        self.0.respond(Provider::Spotify, "listeners")
    }

    fn aggregate(&self, window: DateWindow) -> QueryResult<'_> {
        self.0.windows.lock().unwrap().push(window);
        self.0.respond(Provider::Spotify, "aggregate")
    }
}

struct FakeApple(Arc<State>);

impl AppleAdapter for FakeApple {
    fn overview(&self) -> QueryResult<'_> {
        self.0.respond(Provider::Apple, "overview")
    }

    fn trends(&self) -> QueryResult<'_> {
        self.0.respond(Provider::Apple, "trends")
    }
}

impl ConnectorFactory for FakeConnectors {
    fn spotify(&self, _credentials: SpotifyCredentials) -> Result<Box<dyn SpotifyAdapter>, ProviderError> {
        self.state.build(Provider::Spotify)?;
        Ok(Box::new(FakeSpotify(self.state.clone())))
    }

    fn apple(&self, _credentials: AppleCredentials) -> Result<Box<dyn AppleAdapter>, ProviderError> {
        self.state.build(Provider::Apple)?;
        Ok(Box::new(FakeApple(self.state.clone())))
    }
}
