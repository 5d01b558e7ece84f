//! Lists the known buoy stations.

use crate::reading::station::{haversine_km, nearest_buoy, BUOYS, SF_LAT, SF_LON};

pub fn stations() -> String {
    let (nearest, _) = nearest_buoy(SF_LAT, SF_LON);

    let mut lines = vec!["Known buoy stations near San Francisco:".to_string()];
    for buoy in &BUOYS {
        let distance = haversine_km(SF_LAT, SF_LON, buoy.lat, buoy.lon);
        let marker = if buoy.id == nearest.id { " (nearest)" } else { "" };
        lines.push(format!(
            "{}  {:<18} {:>6.1} km{}",
            buoy.id, buoy.name, distance, marker
        ));
    }

    lines.join("\n")
}

// -- Tests -------------------------------------------------------------------
