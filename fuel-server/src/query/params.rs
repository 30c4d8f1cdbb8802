//! Query parameters for a station search.

use crate::domain::{BrandList, Coordinate, normalize_brand_list, parse_flexible_str};

/// Search radius used when none (or an unparseable one) is given.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Result count used when none (or an unparseable one) is given.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Upper bound for `max_results`.
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Unvalidated query-string values, exactly as received.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawQuery<'a> {
    pub lat: Option<&'a str>,
    pub lon: Option<&'a str>,
    pub radius_km: Option<&'a str>,
    pub max_results: Option<&'a str>,
    pub include_brands: Option<&'a str>,
    pub exclude_brands: Option<&'a str>,
}

/// Normalised parameters for [`StationQueryEngine`](super::StationQueryEngine).
///
/// Built once per request; never rejected. Bad numbers fall back to
/// defaults, and a missing or bad coordinate means "no origin".
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    /// Caller position; `None` disables distance and brand filtering.
    pub origin: Option<Coordinate>,
    /// Inclusive search radius in kilometres.
    pub radius_km: f64,
    /// Maximum number of records returned, in `1..=MAX_RESULTS_LIMIT`.
    pub max_results: usize,
    pub include_brands: BrandList,
    pub exclude_brands: BrandList,
}

impl QueryParams {
    /// Parameters with no origin and all defaults.
    pub fn new() -> Self {
        Self {
            origin: None,
            radius_km: DEFAULT_RADIUS_KM,
            max_results: DEFAULT_MAX_RESULTS,
            include_brands: BrandList::default(),
            exclude_brands: BrandList::default(),
        }
    }

    /// Build parameters from raw query-string values.
    pub fn from_raw(raw: &RawQuery<'_>) -> Self {
        let lat = raw.lat.and_then(parse_flexible_str);
        let lon = raw.lon.and_then(parse_flexible_str);
        let origin = match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        };

        let radius_km = raw
            .radius_km
            .and_then(parse_flexible_str)
            .unwrap_or(DEFAULT_RADIUS_KM);

        let max_results = raw
            .max_results
            .and_then(parse_flexible_str)
            .map_or(DEFAULT_MAX_RESULTS, clamp_max_results);

        Self {
            origin,
            radius_km,
            max_results,
            include_brands: normalize_brand_list(raw.include_brands),
            exclude_brands: normalize_brand_list(raw.exclude_brands),
        }
    }

    pub fn with_origin(mut self, origin: Coordinate) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Set the result cap, clamped to `1..=MAX_RESULTS_LIMIT`.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULTS_LIMIT);
        self
    }

    pub fn with_include_brands(mut self, raw: &str) -> Self {
        self.include_brands = BrandList::parse(raw);
        self
    }

    pub fn with_exclude_brands(mut self, raw: &str) -> Self {
        self.exclude_brands = BrandList::parse(raw);
        self
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate toward zero and clamp into `1..=MAX_RESULTS_LIMIT`.
fn clamp_max_results(n: f64) -> usize {
    // `as` saturates, so huge values land on the upper bound
    (n.trunc().max(1.0) as usize).min(MAX_RESULTS_LIMIT)
}
