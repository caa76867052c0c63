use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a physical monitoring site: (State Code, County Code, Site Num).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationKey {
    pub state_code: u32,
    pub county_code: u32,
    pub site_number: u32,
}

impl StationKey {
    pub fn new(state_code: u32, county_code: u32, site_number: u32) -> Self {
        Self {
            state_code,
            county_code,
            site_number,
        }
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:03}-{:04}",
            self.state_code, self.county_code, self.site_number
        )
    }
}

/// Descriptive attributes of a station, taken from the first variable row seen for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMeta {
    pub latitude: f64,
    pub longitude: f64,
    pub state_name: String,
    pub county_name: String,
}

impl StationMeta {
    pub fn new(latitude: f64, longitude: f64, state_name: String, county_name: String) -> Self {
        Self {
            latitude,
            longitude,
            state_name,
            county_name,
        }
    }
}
