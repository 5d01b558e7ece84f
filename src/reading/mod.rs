pub mod field;
pub mod record;
pub mod station;

pub use field::{compass_point, format_field, format_value, FieldSpec, COMPASS_POINTS, MISSING};
pub use record::{parse_records, Record, FIRST_DATA_LINE, MAX_READINGS};
pub use station::{buoy_name, haversine_km, nearest_buoy, Buoy, BUOYS};
