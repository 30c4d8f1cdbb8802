//! Web layer for the fuel-station proxy.
//!
//! Provides the filtered station endpoint, the raw passthrough and a
//! health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, RAW_STATIONS_PATH, STATIONS_PATH, create_router};
pub use state::AppState;
