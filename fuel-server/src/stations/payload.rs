//! Extraction of the station list from an upstream payload.

use serde_json::Value;

/// Wrapper key used by the Ministry endpoint.
pub const LIST_WRAPPER_KEY: &str = "ListaEESSPrecio";

/// Unwrap the station list from a decoded upstream body.
///
/// Accepts a bare array or an object carrying the list under
/// [`LIST_WRAPPER_KEY`]. Any other shape yields an empty list.
pub fn station_list(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove(LIST_WRAPPER_KEY) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
