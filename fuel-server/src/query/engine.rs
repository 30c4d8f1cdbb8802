//! Geo filter-and-rank pipeline over upstream station records.
//!
//! Given an origin, stations are kept when they have a usable position,
//! lie within the radius and pass the brand filters; survivors are
//! ordered nearest first and capped at `max_results`. Without an origin
//! the first `max_results` records are returned untouched.

use serde_json::Value;
use tracing::debug;

use crate::domain::Coordinate;
use crate::stations::StationRecord;

use super::params::QueryParams;

/// A station annotated with its distance from the query origin.
#[derive(Debug, Clone)]
pub struct ScoredStation<'a> {
    pub record: StationRecord<'a>,
    pub distance_km: f64,
    pub brand: String,
}

/// Filters and ranks station records for a query.
///
/// Stateless; one instance can serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StationQueryEngine;

impl StationQueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a query and return the matching upstream records.
    ///
    /// The returned references point into `stations`; records are never
    /// copied or modified.
    pub fn query<'a>(&self, stations: &'a [Value], params: &QueryParams) -> Vec<&'a Value> {
        let Some(origin) = params.origin else {
            return stations.iter().take(params.max_results).collect();
        };

        self.rank(stations, origin, params)
            .into_iter()
            .map(|scored| scored.record.raw())
            .collect()
    }

    /// Score, filter, sort and truncate stations around `origin`.
    ///
    /// Records without a parseable position are dropped. The sort is stable,
    /// so equidistant stations keep their upstream order.
    pub fn rank<'a>(
        &self,
        stations: &'a [Value],
        origin: Coordinate,
        params: &QueryParams,
    ) -> Vec<ScoredStation<'a>> {
        let mut scored: Vec<ScoredStation<'a>> = stations
            .iter()
            .map(StationRecord::new)
            .filter_map(|record| {
                let distance_km = origin.distance_km(&record.coordinate()?);
                (distance_km <= params.radius_km).then(|| ScoredStation {
                    record,
                    distance_km,
                    brand: record.brand(),
                })
            })
            .filter(|s| passes_brand_filters(&s.brand, params))
            .collect();

        scored.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        scored.truncate(params.max_results);

        debug!(
            %origin,
            radius_km = params.radius_km,
            input = stations.len(),
            kept = scored.len(),
            "ranked stations"
        );

        scored
    }
}

/// Inclusion first, then exclusion; exclusion wins when both match.
fn passes_brand_filters(brand: &str, params: &QueryParams) -> bool {
    if !params.include_brands.is_empty() && !params.include_brands.matches(brand) {
        return false;
    }
    if !params.exclude_brands.is_empty() && params.exclude_brands.matches(brand) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Kilometres per degree of latitude on the haversine sphere.
    const KM_PER_DEGREE: f64 = crate::domain::EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

    fn origin() -> Coordinate {
        Coordinate::new(40.0, -3.0)
    }

    /// Ministry-style station `km` kilometres due north of the origin.
    fn station_north(id: &str, km: f64, brand: &str) -> Value {
        let lat = 40.0 + km / KM_PER_DEGREE;
        json!({
            "IDEESS": id,
            "Rótulo": brand,
            "Latitud": lat.to_string().replace('.', ","),
            "Longitud (WGS84)": "-3,000000",
        })
    }

    fn ids(results: &[&Value]) -> Vec<String> {
        results
            .iter()
            .map(|v| v["IDEESS"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn sorts_by_distance_and_applies_radius() {
        let stations = vec![
            station_north("a", 2.0, "REPSOL"),
            station_north("b", 4.0, "CEPSA"),
            station_north("c", 6.0, "BP"),
            station_north("d", 1.0, "SHELL"),
        ];
        let params = QueryParams::new().with_origin(origin()).with_radius_km(5.0);

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(ids(&results), ["d", "a", "b"]);
    }

    #[test]
    fn max_results_truncates_after_sorting() {
        let stations = vec![
            station_north("a", 2.0, "REPSOL"),
            station_north("b", 4.0, "CEPSA"),
            station_north("d", 1.0, "SHELL"),
        ];
        let params = QueryParams::new()
            .with_origin(origin())
            .with_radius_km(5.0)
            .with_max_results(2);

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(ids(&results), ["d", "a"]);
    }

    #[test]
    fn radius_is_inclusive() {
        let stations = vec![json!({"IDEESS": "here", "lat": 40.0, "lon": -3.0})];
        let params = QueryParams::new().with_origin(origin()).with_radius_km(0.0);

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(ids(&results), ["here"]);
    }

    #[test]
    fn ties_keep_upstream_order() {
        let stations = vec![
            station_north("first", 3.0, "A"),
            station_north("near", 1.0, "B"),
            station_north("second", 3.0, "C"),
            station_north("third", 3.0, "D"),
        ];
        let params = QueryParams::new().with_origin(origin());

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(ids(&results), ["near", "first", "second", "third"]);
    }

    #[test]
    fn rows_without_position_are_dropped() {
        let stations = vec![
            json!({"IDEESS": "no-lon", "Latitud": "40,0"}),
            json!({"IDEESS": "garbage", "Latitud": "x", "Longitud": "y"}),
            json!(null),
            json!("not a station"),
            station_north("ok", 1.0, "GALP"),
        ];
        let params = QueryParams::new().with_origin(origin());

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(ids(&results), ["ok"]);
    }

    #[test]
    fn include_uses_substring_match() {
        let stations = vec![
            station_north("r", 1.0, "REPSOL BOMBA"),
            station_north("c", 2.0, "CEPSA"),
        ];
        let params = QueryParams::new()
            .with_origin(origin())
            .with_include_brands("repsol");

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(ids(&results), ["r"]);
    }

    #[test]
    fn exclusion_wins_over_inclusion() {
        let stations = vec![station_north("r", 1.0, "REPSOL BOMBA")];
        let params = QueryParams::new()
            .with_origin(origin())
            .with_include_brands("REPSOL")
            .with_exclude_brands("REPSOL");

        let results = StationQueryEngine::new().query(&stations, &params);
        assert!(results.is_empty());
    }

    #[test]
    fn exclude_only() {
        let stations = vec![
            station_north("r", 1.0, "Repsol"),
            station_north("b", 2.0, "BP"),
            station_north("n", 3.0, ""),
        ];
        let params = QueryParams::new()
            .with_origin(origin())
            .with_exclude_brands("repsol");

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(ids(&results), ["b", "n"]);
    }

    #[test]
    fn missing_brand_fails_non_empty_include() {
        let stations = vec![json!({"IDEESS": "x", "lat": "40", "lon": "-3"})];
        let params = QueryParams::new()
            .with_origin(origin())
            .with_include_brands("BP");

        assert!(StationQueryEngine::new().query(&stations, &params).is_empty());
    }

    #[test]
    fn no_origin_returns_prefix_untouched() {
        let stations = vec![
            json!({"IDEESS": "1", "Latitud": "bad"}),
            json!("odd row"),
            json!({"IDEESS": "3"}),
        ];
        let params = QueryParams::new()
            .with_max_results(2)
            .with_include_brands("NOPE")
            .with_radius_km(0.0);

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(results.len(), 2);
        assert!(std::ptr::eq(results[0], &stations[0]));
        assert!(std::ptr::eq(results[1], &stations[1]));
    }

    #[test]
    fn output_records_are_the_input_records() {
        let stations = vec![station_north("a", 1.0, "BP")];
        let params = QueryParams::new().with_origin(origin());

        let results = StationQueryEngine::new().query(&stations, &params);
        assert_eq!(results, vec![&stations[0]]);
        assert!(results[0].get("distance_km").is_none());
    }

    #[test]
    fn rank_exposes_distance_and_brand() {
        let stations = vec![station_north("a", 2.0, "Galp")];
        let params = QueryParams::new().with_origin(origin());

        let ranked = StationQueryEngine::new().rank(&stations, origin(), &params);
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].distance_km - 2.0).abs() < 1e-9);
        assert_eq!(ranked[0].brand, "Galp");
    }

    #[test]
    fn empty_input() {
        let params = QueryParams::new().with_origin(origin());
        assert!(StationQueryEngine::new().query(&[], &params).is_empty());
        assert!(StationQueryEngine::new().query(&[], &QueryParams::new()).is_empty());
    }
}
