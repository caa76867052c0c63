use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::station::{StationKey, StationMeta};

/// Which of the two per-year extracts a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    /// The wind file, e.g. `WIND_1991.csv`.
    Reference,
    /// The target scalar file, e.g. `PM10_1991.csv`.
    Variable,
}

impl Dataset {
    pub fn display_name(&self) -> &'static str {
        match self {
            Dataset::Reference => "reference",
            Dataset::Variable => "variable",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of a year's wind extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceObservation {
    pub station: StationKey,
    pub poc: u32,
    pub parameter_name: String,
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl ReferenceObservation {
    /// True when the row carries the reference sub-type used for matching.
    pub fn is_parameter(&self, parameter: &str) -> bool {
        self.parameter_name == parameter
    }
}

/// One row of a year's target variable extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableObservation {
    pub station: StationKey,
    pub poc: u32,
    pub timestamp: NaiveDateTime,
    pub value: f64,
    pub meta: StationMeta,
}
