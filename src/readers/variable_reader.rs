use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::models::{Dataset, StationKey, StationMeta, VariableObservation};
use crate::readers::extract::{inspect_extract, parse_timestamp, read_extract, ExtractSource};
use crate::utils::constants::VARIABLE_COLUMNS;

#[derive(Debug, Deserialize)]
struct VariableCsvRow {
    #[serde(rename = "State Code")]
    state_code: u32,
    #[serde(rename = "County Code")]
    county_code: u32,
    #[serde(rename = "Site Num")]
    site_number: u32,
    #[serde(rename = "POC")]
    poc: u32,
    #[serde(rename = "Sample Measurement")]
    sample_measurement: f64,
    #[serde(rename = "Date GMT")]
    date_gmt: String,
    #[serde(rename = "Time GMT")]
    time_gmt: String,
    #[serde(rename = "State Name")]
    state_name: String,
    #[serde(rename = "County Name")]
    county_name: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

impl VariableCsvRow {
    fn into_observation(self) -> std::result::Result<VariableObservation, String> {
        Ok(VariableObservation {
            station: StationKey::new(self.state_code, self.county_code, self.site_number),
            poc: self.poc,
            timestamp: parse_timestamp(&self.date_gmt, &self.time_gmt)?,
            value: self.sample_measurement,
            meta: StationMeta::new(self.latitude, self.longitude, self.state_name, self.county_name),
        })
    }
}

/// Reads a year's target variable extract along with the station metadata columns.
pub struct VariableReader;

impl VariableReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_year(&self, path: &Path, year: i32) -> Result<Vec<VariableObservation>> {
        let source = ExtractSource::new(Dataset::Variable, year, path);
        read_extract(&source, VARIABLE_COLUMNS, VariableCsvRow::into_observation)
    }

    pub fn inspect_year(&self, path: &Path, year: i32) -> Result<()> {
        inspect_extract(
            &ExtractSource::new(Dataset::Variable, year, path),
            VARIABLE_COLUMNS,
        )
    }
}

impl Default for VariableReader {
    fn default() -> Self {
        Self::new()
    }
}
