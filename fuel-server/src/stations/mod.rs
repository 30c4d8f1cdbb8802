//! Upstream fuel-station dataset: client, payload handling and record access.
//!
//! The dataset is fetched fresh on every request; nothing is cached.

mod client;
mod error;
mod payload;
mod record;

pub use client::{
    DEFAULT_URL, DEFAULT_USER_AGENT, StationClient, StationClientConfig, UpstreamResponse,
};
pub use error::StationError;
pub use payload::{LIST_WRAPPER_KEY, station_list};
pub use record::{FIELD_ALIASES, StationField, StationRecord};
