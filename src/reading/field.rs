//! Display formatting for observation fields.

use super::Record;

/// The 16 compass points, clockwise from north in 22.5 degree steps.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// NDBC marker for a missing or malfunctioning instrument reading.
pub const MISSING: &str = "MM";

const NOT_AVAILABLE: &str = "Data not available";

/// How one named observation field is rendered.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub is_bearing: bool,
}

/// Converts bearing degrees to the nearest compass point.
pub fn compass_point(degrees: f64) -> &'static str {
    let index = (degrees / 22.5).round().rem_euclid(16.0) as usize;

    COMPASS_POINTS[index]
}

/// Formats a raw field value for display.
///
/// An absent value and the `MM` sentinel both read as unavailable. Bearing
/// fields render as degrees with a compass point; a bearing that fails to
/// parse as a number is shown verbatim instead.
pub fn format_value(value: Option<&str>, unit: &str, is_bearing: bool) -> String {
    let value = match value {
        None | Some(MISSING) => return NOT_AVAILABLE.to_string(),
        Some(value) => value,
    };

    if is_bearing {
        return match value.parse::<f64>() {
            Ok(degrees) => format!("{}° ({})", value, compass_point(degrees)),
            Err(_) => value.to_string(),
        };
    }

    format!("{} {}", value, unit)
}

/// Renders one labelled report line for a record field.
pub fn format_field(record: &Record, spec: &FieldSpec) -> String {
    format!(
        "{}: {}",
        spec.label,
        format_value(record.get(spec.name), spec.unit, spec.is_bearing)
    )
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::reading::parse_records;

    #[test]
    fn should_convert_degrees_to_compass_point() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(180.0), "S");
        assert_eq!(compass_point(270.0), "W");
        assert_eq!(compass_point(340.0), "NNW");
    }

    #[test]
    fn should_round_degrees_to_nearest_point() {
        assert_eq!(compass_point(22.5), "NNE");
        assert_eq!(compass_point(10.0), "N");
        assert_eq!(compass_point(12.0), "NNE");
    }

    #[test]
    fn should_wrap_bearings_past_360() {
        assert_eq!(compass_point(360.0), "N");
        assert_eq!(compass_point(365.0), "N");
    }

    #[test]
    fn should_format_missing_values_as_not_available() {
        assert_eq!(format_value(None, "m", false), "Data not available");
        assert_eq!(format_value(Some("MM"), "m", false), "Data not available");
        assert_eq!(format_value(Some("MM"), "", true), "Data not available");
    }

    #[test]
    fn should_format_plain_value_with_unit() {
        assert_eq!(format_value(Some("1.5"), "m", false), "1.5 m");
        assert_eq!(format_value(Some("14.3"), "°C", false), "14.3 °C");
    }

    #[test]
    fn should_format_bearing_with_compass_point() {
        assert_eq!(format_value(Some("180"), "", true), "180° (S)");
        assert_eq!(format_value(Some("0"), "", true), "0° (N)");
        assert_eq!(format_value(Some("360"), "", true), "360° (N)");
        assert_eq!(format_value(Some("22.5"), "", true), "22.5° (NNE)");
    }

    #[test]
    fn should_fall_back_to_raw_value_for_unparseable_bearing() {
        assert_eq!(format_value(Some("abc"), "", true), "abc");
    }

    #[test]
    fn should_format_field_with_label() {
        let block = "#WVHT MWD\n#m degT\n1.2 180\n";
        let records = parse_records(block, &[2]).unwrap();

        let height = FieldSpec {
            name: "WVHT",
            label: "Wave Height",
            unit: "m",
            is_bearing: false,
        };
        let direction = FieldSpec {
            name: "MWD",
            label: "Wave Direction",
            unit: "",
            is_bearing: true,
        };

        assert_eq!(format_field(&records[0], &height), "Wave Height: 1.2 m");
        assert_eq!(
            format_field(&records[0], &direction),
            "Wave Direction: 180° (S)"
        );
    }

    #[test]
    fn should_format_identically_on_repeat_calls() {
        let first = format_value(Some("225"), "", true);
        let second = format_value(Some("225"), "", true);

        assert_eq!(first, second);
    }
}
