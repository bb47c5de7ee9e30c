//! # Podcast Harvester
//!
//! Collects podcast analytics from Spotify and Apple Podcasts and writes them
//! into one JSON snapshot for the dashboard.
//!
//! - **`harvest`**: the snapshot model and the aggregator that fills it, one
//!   provider at a time with failures kept per provider
//! - **`store`**: atomic persistence of the snapshot document
//! - **`app`**: wires credentials, connectors and the store for one run

#[macro_use]
extern crate tracing;

mod app;
pub mod harvest;
mod logging;
pub mod store;

pub use app::App;
pub use harvest::{
    ProviderSlot,
    Snapshot,
    SnapshotAggregator,
};
pub use logging::{
    init_errors,
    init_logging,
};
pub use podcast_harvester_config::Args;
pub use store::{
    PersistenceError,
    SnapshotStore,
};
