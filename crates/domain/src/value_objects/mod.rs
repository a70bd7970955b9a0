//! Value objects for the CityWeather domain

mod geo_location;
mod region_tag;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use region_tag::RegionTag;
