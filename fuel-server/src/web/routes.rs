//! HTTP route handlers.

use std::any::Any;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::query::QueryParams;
use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;

/// Filtered station endpoint.
pub const STATIONS_PATH: &str = "/api/EstacionesTerrestres";

/// Unfiltered passthrough of the upstream body.
pub const RAW_STATIONS_PATH: &str = "/api/EstacionesTerrestres/raw";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(STATIONS_PATH, get(query_stations))
        .route(RAW_STATIONS_PATH, get(raw_stations))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fetch the dataset and return stations matching the query.
///
/// Query values are never rejected; see [`QueryParams::from_raw`].
async fn query_stations(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let req = StationQueryRequest::from_pairs(pairs);
    let params = QueryParams::from_raw(&req.as_raw());

    let stations = state.stations.fetch_stations().await?;
    let results = state.engine.query(&stations, &params);

    info!(
        upstream = stations.len(),
        returned = results.len(),
        has_origin = params.origin.is_some(),
        "served station query"
    );

    Ok(Json(results).into_response())
}

/// Forward the upstream body unchanged.
async fn raw_stations(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state.stations.fetch_raw().await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response())
}

/// Turn a handler panic into a 500 instead of a dropped connection.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal { message: details }.into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Upstream failed; the status is forwarded to the caller.
    Upstream { status: StatusCode },
    Internal { message: String },
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        match e {
            StationError::Upstream { status, .. } => AppError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            },
            StationError::Timeout { .. } => AppError::Upstream {
                status: StatusCode::GATEWAY_TIMEOUT,
            },
            StationError::Http(_) => AppError::Upstream {
                status: StatusCode::BAD_GATEWAY,
            },
            StationError::Json { .. } | StationError::InvalidConfig { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Upstream { status } => {
                warn!(status = status.as_u16(), "upstream failure");
                let body = Json(UpstreamErrorResponse::new(status.as_u16()));
                (status, body).into_response()
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                let body = Json(InternalErrorResponse::new(message));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
