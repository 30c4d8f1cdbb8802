//! Domain types for the fuel-station proxy.
//!
//! Pure, side-effect-free building blocks: coordinates and great-circle
//! distance, lenient number parsing, and brand filter lists.

mod brand;
mod coordinate;
mod number;

pub use brand::{BrandList, brand_matches, normalize_brand_list};
pub use coordinate::{Coordinate, EARTH_RADIUS_KM, haversine_distance_km};
pub use number::{parse_flexible_number, parse_flexible_str};
