//! Turning provider credentials into a [`Snapshot`].

mod aggregator;
mod slot;
mod snapshot;

#[cfg(test)]
pub(crate) mod fake;

pub use aggregator::{
    SnapshotAggregator,
    SPOTIFY_WINDOW_DAYS,
};
pub use slot::{
    ProviderSlot,
    SlotStatus,
};
pub use snapshot::{
    ApplePayload,
    Snapshot,
    SpotifyPayload,
};
