//! Known buoy and tide stations near San Francisco.

/// San Francisco reference point.
pub const SF_LAT: f64 = 37.7749;
pub const SF_LON: f64 = -122.4194;

/// San Francisco Bar buoy.
pub const DEFAULT_BUOY: &str = "46237";

/// San Francisco tide station.
pub const DEFAULT_TIDE_STATION: &str = "9414290";

/// An NDBC buoy station and its position.
#[derive(Debug, Clone, Copy)]
pub struct Buoy {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// NDBC buoys near San Francisco Bay.
pub const BUOYS: [Buoy; 5] = [
    Buoy {
        id: "46026",
        name: "San Francisco",
        lat: 37.759,
        lon: -122.833,
    },
    Buoy {
        id: "46237",
        name: "San Francisco Bar",
        lat: 37.786,
        lon: -122.634,
    },
    Buoy {
        id: "46214",
        name: "Point Reyes",
        lat: 37.946,
        lon: -123.470,
    },
    Buoy {
        id: "46013",
        name: "Bodega Bay",
        lat: 38.238,
        lon: -123.307,
    },
    Buoy {
        id: "46012",
        name: "Half Moon Bay",
        lat: 37.363,
        lon: -122.881,
    },
];

pub fn buoy_name(id: &str) -> Option<&'static str> {
    BUOYS.iter().find(|buoy| buoy.id == id).map(|buoy| buoy.name)
}

/// Great circle distance between two points, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    c * 6371.0
}

/// Finds the buoy closest to the given point, with its distance in km.
pub fn nearest_buoy(lat: f64, lon: f64) -> (&'static Buoy, f64) {
    let mut nearest = &BUOYS[0];
    let mut min_distance = f64::INFINITY;

    for buoy in &BUOYS {
        let distance = haversine_km(lat, lon, buoy.lat, buoy.lon);
        if distance < min_distance {
            min_distance = distance;
            nearest = buoy;
        }
    }

    (nearest, min_distance)
}

// -- Tests -------------------------------------------------------------------
