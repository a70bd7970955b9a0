//! Region tag value object
//!
//! A two-letter country-code hint attached to a city name to
//! disambiguate upstream lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Country-code hint for a city name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionTag {
    /// United States
    Us,
    /// India
    In,
    /// Not present in either membership set
    Unknown,
}

impl RegionTag {
    /// Two-letter upstream country code, if the region is known
    #[must_use]
    pub const fn country_code(&self) -> Option<&'static str> {
        match self {
            Self::Us => Some("US"),
            Self::In => Some("IN"),
            Self::Unknown => None,
        }
    }

    /// Whether this tag carries a usable country-code hint
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.country_code().unwrap_or("unknown"))
    }
}
