//! Read-only view over one upstream station entry.
//!
//! Upstream rows are loosely shaped: the same logical field appears under
//! different keys depending on feed version (accented, unit-qualified, or
//! plain English). Lookups go through [`FIELD_ALIASES`] rather than fixed
//! keys.

use serde_json::Value;

use crate::domain::{Coordinate, parse_flexible_number};

/// A logical station field, resolved through the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationField {
    Latitude,
    Longitude,
    Brand,
}

/// Candidate keys for each logical field, in priority order.
pub const FIELD_ALIASES: &[(StationField, &[&str])] = &[
    (StationField::Latitude, &["Latitud", "lat", "latitude"]),
    (
        StationField::Longitude,
        &["Longitud (WGS84)", "Longitud", "lon", "longitude"],
    ),
    (StationField::Brand, &["Rótulo", "Rotulo", "Marca"]),
];

impl StationField {
    /// Candidate keys for this field, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        FIELD_ALIASES
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, keys)| *keys)
            .unwrap_or(&[])
    }
}

/// A borrowed station record.
///
/// Wraps a reference into the parsed upstream payload; the underlying value
/// is never modified and is what ends up serialised in the response.
/// Values that are not JSON objects behave as records with no fields.
#[derive(Debug, Clone, Copy)]
pub struct StationRecord<'a> {
    raw: &'a Value,
}

impl<'a> StationRecord<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// The untouched upstream value.
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    /// Values of `field` in alias order, skipping keys that are missing.
    fn candidates(self, field: StationField) -> impl Iterator<Item = &'a Value> + 'a {
        let object = self.raw.as_object();
        field
            .aliases()
            .iter()
            .filter_map(move |key| object.and_then(|o| o.get(*key)))
    }

    /// First alias of `field` that holds a finite number.
    pub fn number(&self, field: StationField) -> Option<f64> {
        self.candidates(field).find_map(parse_flexible_number)
    }

    /// Station position, if both latitude and longitude resolve.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.number(StationField::Latitude)?;
        let lon = self.number(StationField::Longitude)?;
        Some(Coordinate::new(lat, lon))
    }

    /// Brand name from the first non-empty alias, or `""`.
    pub fn brand(&self) -> String {
        self.candidates(StationField::Brand)
            .find_map(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_default()
    }
}
