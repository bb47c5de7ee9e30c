//! Connectors for the two podcast analytics providers.
//!
//! The harvester only depends on the [`SpotifyAdapter`], [`AppleAdapter`] and
//! [`ConnectorFactory`] traits; [`HttpConnectorFactory`] provides the
//! reqwest-backed implementations.

#[macro_use]
extern crate tracing;

mod adapter;
mod apple;
mod error;
mod factory;
mod http;
mod provider;
mod spotify;
mod window;

#[cfg(test)]
mod test_server;

pub use adapter::{
    AppleAdapter,
    ConnectorFactory,
    QueryResult,
    SpotifyAdapter,
};
pub use apple::AppleConnector;
pub use error::ProviderError;
pub use factory::{
    ConnectorSettings,
    HttpConnectorFactory,
};
pub use provider::{
    AppleCredentials,
    Provider,
    SpotifyCredentials,
};
pub use spotify::SpotifyConnector;
pub use window::DateWindow;
