//! Static city catalog
//!
//! A single compiled-in lookup table of known US and Indian cities,
//! used both for region classification of free-text city names and for
//! the city search endpoint. One table, so the classifier and search
//! can never disagree about which cities exist.

use crate::value_objects::RegionTag;

/// Minimum query length for a non-empty search result
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of search results returned
pub const MAX_RESULTS: usize = 10;

/// One catalog row: display name, region tag, coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityEntry {
    /// Display name, title case
    pub name: &'static str,
    /// Region the city belongs to
    pub region: RegionTag,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

const fn us(name: &'static str, latitude: f64, longitude: f64) -> CityEntry {
    CityEntry {
        name,
        region: RegionTag::Us,
        latitude,
        longitude,
    }
}

const fn india(name: &'static str, latitude: f64, longitude: f64) -> CityEntry {
    CityEntry {
        name,
        region: RegionTag::In,
        latitude,
        longitude,
    }
}

/// The full catalog: 48 US cities followed by 50 Indian cities
pub static CITY_CATALOG: &[CityEntry] = &[
    us("New York", 40.7128, -74.0060),
    us("Los Angeles", 34.0522, -118.2437),
    us("Chicago", 41.8781, -87.6298),
    us("Houston", 29.7604, -95.3698),
    us("Phoenix", 33.4484, -112.0740),
    us("Philadelphia", 39.9526, -75.1652),
    us("San Antonio", 29.4241, -98.4936),
    us("San Diego", 32.7157, -117.1611),
    us("Dallas", 32.7767, -96.7970),
    us("San Jose", 37.3382, -121.8863),
    us("Austin", 30.2672, -97.7431),
    us("Jacksonville", 30.3322, -81.6557),
    us("Fort Worth", 32.7555, -97.3308),
    us("Columbus", 39.9612, -82.9988),
    us("Charlotte", 35.2271, -80.8431),
    us("San Francisco", 37.7749, -122.4194),
    us("Indianapolis", 39.7684, -86.1581),
    us("Seattle", 47.6062, -122.3321),
    us("Denver", 39.7392, -104.9903),
    us("Washington", 38.9072, -77.0369),
    us("Boston", 42.3601, -71.0589),
    us("El Paso", 31.7619, -106.4850),
    us("Detroit", 42.3314, -83.0458),
    us("Nashville", 36.1627, -86.7816),
    us("Portland", 45.5152, -122.6784),
    us("Memphis", 35.1495, -90.0490),
    us("Oklahoma City", 35.4676, -97.5164),
    us("Las Vegas", 36.1699, -115.1398),
    us("Louisville", 38.2527, -85.7585),
    us("Baltimore", 39.2904, -76.6122),
    us("Milwaukee", 43.0389, -87.9065),
    us("Albuquerque", 35.0844, -106.6504),
    us("Tucson", 32.2226, -110.9747),
    us("Fresno", 36.7378, -119.7871),
    us("Mesa", 33.4152, -111.8315),
    us("Sacramento", 38.5816, -121.4944),
    us("Atlanta", 33.7490, -84.3880),
    us("Kansas City", 39.0997, -94.5786),
    us("Colorado Springs", 38.8339, -104.8214),
    us("Miami", 25.7617, -80.1918),
    us("Raleigh", 35.7796, -78.6382),
    us("Omaha", 41.2565, -95.9345),
    us("Long Beach", 33.7701, -118.1937),
    us("Virginia Beach", 36.8529, -75.9780),
    us("Oakland", 37.8044, -122.2712),
    us("Minneapolis", 44.9778, -93.2650),
    us("Tulsa", 36.1540, -95.9928),
    us("Arlington", 32.7357, -97.1081),
    india("Mumbai", 19.0760, 72.8777),
    india("Delhi", 28.7041, 77.1025),
    india("Bangalore", 12.9716, 77.5946),
    india("Hyderabad", 17.3850, 78.4867),
    india("Ahmedabad", 23.0225, 72.5714),
    india("Chennai", 13.0827, 80.2707),
    india("Kolkata", 22.5726, 88.3639),
    india("Surat", 21.1702, 72.8311),
    india("Pune", 18.5204, 73.8567),
    india("Jaipur", 26.9124, 75.7873),
    india("Lucknow", 26.8467, 80.9462),
    india("Kanpur", 26.4499, 80.3319),
    india("Nagpur", 21.1458, 79.0882),
    india("Indore", 22.7196, 75.8577),
    india("Thane", 19.2183, 72.9781),
    india("Bhopal", 23.2599, 77.4126),
    india("Visakhapatnam", 17.6868, 83.2185),
    india("Pimpri-Chinchwad", 18.6298, 73.7997),
    india("Patna", 25.5941, 85.1376),
    india("Vadodara", 22.3072, 73.1812),
    india("Ghaziabad", 28.6692, 77.4538),
    india("Ludhiana", 30.9010, 75.8573),
    india("Agra", 27.1767, 78.0081),
    india("Nashik", 19.9975, 73.7898),
    india("Faridabad", 28.4089, 77.3178),
    india("Meerut", 28.9845, 77.7064),
    india("Rajkot", 22.3039, 70.8022),
    india("Kalyan-Dombivli", 19.2403, 73.1305),
    india("Vasai-Virar", 19.3919, 72.8397),
    india("Varanasi", 25.3176, 82.9739),
    india("Srinagar", 34.0837, 74.7973),
    india("Aurangabad", 19.8762, 75.3433),
    india("Dhanbad", 23.7957, 86.4304),
    india("Amritsar", 31.6340, 74.8723),
    india("Navi Mumbai", 19.0330, 73.0297),
    india("Allahabad", 25.4358, 81.8463),
    india("Ranchi", 23.3441, 85.3096),
    india("Howrah", 22.5958, 88.2636),
    india("Coimbatore", 11.0168, 76.9558),
    india("Jabalpur", 23.1815, 79.9864),
    india("Gwalior", 26.2183, 78.1828),
    india("Vijayawada", 16.5062, 80.6480),
    india("Jodhpur", 26.2389, 73.0243),
    india("Madurai", 9.9252, 78.1198),
    india("Raipur", 21.2514, 81.6296),
    india("Kota", 25.2138, 75.8648),
    india("Guwahati", 26.1445, 91.7362),
    india("Chandigarh", 30.7333, 76.7794),
    india("Solapur", 17.6599, 75.9064),
    india("Hubli-Dharwad", 15.3647, 75.1240),
];

/// Classify a free-text city name into a region tag
///
/// Trims and case-folds the input, then tests membership against the
/// catalog. Unmatched names classify as `RegionTag::Unknown`, which
/// callers treat as "look up by name alone".
#[must_use]
pub fn classify(name: &str) -> RegionTag {
    let needle = name.trim();
    CITY_CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(needle))
        .map_or(RegionTag::Unknown, |entry| entry.region)
}

/// Case-insensitive substring search over catalog display names
///
/// Queries shorter than [`MIN_QUERY_LEN`] yield an empty result.
/// Matches are sorted alphabetically and capped at [`MAX_RESULTS`].
#[must_use]
pub fn search(query: &str) -> Vec<&'static CityEntry> {
    let query = query.trim();
    if query.len() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_ascii_lowercase();
    let mut matches: Vec<&'static CityEntry> = CITY_CATALOG
        .iter()
        .filter(|entry| entry.name.to_ascii_lowercase().contains(&needle))
        .collect();

    matches.sort_by(|a, b| a.name.cmp(b.name));
    matches.truncate(MAX_RESULTS);
    matches
}
