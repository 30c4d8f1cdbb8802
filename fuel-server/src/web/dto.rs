//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::query::RawQuery;

/// `error` value used for upstream failures.
pub const UPSTREAM_ERROR: &str = "API upstream error";

/// `error` value used for internal failures.
pub const INTERNAL_ERROR: &str = "Function error";

/// Query-string values for a station search.
///
/// Every field is optional free text; normalisation happens in
/// [`QueryParams::from_raw`](crate::query::QueryParams::from_raw).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationQueryRequest {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub radius_km: Option<String>,
    pub max_results: Option<String>,
    pub include_brands: Option<String>,
    pub exclude_brands: Option<String>,
}

impl StationQueryRequest {
    /// Build from decoded query-string pairs.
    ///
    /// Keys are matched case-sensitively (`radiusKm`, `maxResults`, ...).
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut req = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut req.lat,
                "lon" => &mut req.lon,
                "radiusKm" => &mut req.radius_km,
                "maxResults" => &mut req.max_results,
                "includeBrands" => &mut req.include_brands,
                "excludeBrands" => &mut req.exclude_brands,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        req
    }

    /// Borrow as raw query values.
    pub fn as_raw(&self) -> RawQuery<'_> {
        RawQuery {
            lat: self.lat.as_deref(),
            lon: self.lon.as_deref(),
            radius_km: self.radius_km.as_deref(),
            max_results: self.max_results.as_deref(),
            include_brands: self.include_brands.as_deref(),
            exclude_brands: self.exclude_brands.as_deref(),
        }
    }
}

/// Body returned when the upstream fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamErrorResponse {
    pub error: String,
    pub status: u16,
}

impl UpstreamErrorResponse {
    pub fn new(status: u16) -> Self {
        Self {
            error: UPSTREAM_ERROR.to_string(),
            status,
        }
    }
}

/// Body returned for internal failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalErrorResponse {
    pub error: String,
    pub details: String,
}

impl InternalErrorResponse {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            error: INTERNAL_ERROR.to_string(),
            details: details.into(),
        }
    }
}
