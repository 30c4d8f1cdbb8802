//! Station search: parameter normalisation and the filter-and-rank engine.

mod engine;
mod params;

pub use engine::{ScoredStation, StationQueryEngine};
pub use params::{
    DEFAULT_MAX_RESULTS, DEFAULT_RADIUS_KM, MAX_RESULTS_LIMIT, QueryParams, RawQuery,
};
