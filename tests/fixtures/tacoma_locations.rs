//! Real Tacoma / Puget Sound locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Typical backflow-test sites:
//! commercial buildings, medical facilities, schools, and restaurants
//! spread across the metro area.

/// A named site with coordinates.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Site {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Central Tacoma (good depot/start locations)
// ============================================================================

pub const CENTRAL_TACOMA: &[Site] = &[
    Site::new("Tacoma Dome", 47.2366, -122.4270),
    Site::new("Union Station", 47.2399, -122.4370),
    Site::new("Wright Park", 47.2632, -122.4443),
    Site::new("St. Joseph Medical Center", 47.2465, -122.4515),
    Site::new("Stadium High School", 47.2661, -122.4513),
    Site::new("Point Defiance Marina", 47.3059, -122.5139),
];

// ============================================================================
// North End / Proctor District
// ============================================================================

pub const NORTH_END: &[Site] = &[
    Site::new("Proctor Farmers Market", 47.2714, -122.4818),
    Site::new("University of Puget Sound", 47.2617, -122.4805),
    Site::new("Metropolitan Market Proctor", 47.2712, -122.4810),
    Site::new("Point Defiance Zoo", 47.3054, -122.5171),
    Site::new("Ruston Way Waterfront", 47.2850, -122.4728),
];

// ============================================================================
// South Tacoma / Lakewood
// ============================================================================

pub const SOUTH_TACOMA: &[Site] = &[
    Site::new("Tacoma Mall", 47.2183, -122.4707),
    Site::new("South Tacoma Way Auto Row", 47.2075, -122.4867),
    Site::new("Lakewood Towne Center", 47.1629, -122.5091),
    Site::new("Clover Park Technical College", 47.1532, -122.5178),
    Site::new("Steilacoom Ferry Landing", 47.1707, -122.6031),
];

// ============================================================================
// East Side / Fife / Puyallup
// ============================================================================

pub const EAST_SIDE: &[Site] = &[
    Site::new("Fife City Hall", 47.2393, -122.3573),
    Site::new("Emerald Queen Casino", 47.2442, -122.3628),
    Site::new("Puyallup Fairgrounds", 47.1832, -122.2968),
    Site::new("Good Samaritan Hospital", 47.1764, -122.2886),
    Site::new("Sumner Station", 47.2032, -122.2443),
];

// ============================================================================
// University Place / Fircrest
// ============================================================================

pub const WEST_SIDE: &[Site] = &[
    Site::new("Chambers Bay", 47.2005, -122.5716),
    Site::new("University Place Library", 47.2179, -122.5369),
    Site::new("Fircrest Golf Club", 47.2343, -122.5134),
    Site::new("Titlow Beach", 47.2470, -122.5539),
];

/// Returns all sites as a single vec.
pub fn all_sites() -> Vec<Site> {
    let mut all = Vec::with_capacity(30);
    all.extend_from_slice(CENTRAL_TACOMA);
    all.extend_from_slice(NORTH_END);
    all.extend_from_slice(SOUTH_TACOMA);
    all.extend_from_slice(EAST_SIDE);
    all.extend_from_slice(WEST_SIDE);
    all
}

/// Returns sites spread across the metro area (good for multi-route tests).
pub fn geographically_diverse_sites() -> Vec<Site> {
    vec![
        Site::new("Point Defiance Zoo", 47.3054, -122.5171),
        Site::new("Wright Park", 47.2632, -122.4443),
        Site::new("Tacoma Mall", 47.2183, -122.4707),
        Site::new("Lakewood Towne Center", 47.1629, -122.5091),
        Site::new("Fife City Hall", 47.2393, -122.3573),
        Site::new("Puyallup Fairgrounds", 47.1832, -122.2968),
        Site::new("Chambers Bay", 47.2005, -122.5716),
        Site::new("Sumner Station", 47.2032, -122.2443),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_in_puget_sound_area() {
        for site in all_sites() {
            assert!(
                site.lat > 47.0 && site.lat < 47.4,
                "{} lat out of range: {}",
                site.name,
                site.lat
            );
            assert!(
                site.lng > -122.7 && site.lng < -122.2,
                "{} lng out of range: {}",
                site.name,
                site.lng
            );
        }
    }
}
