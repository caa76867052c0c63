use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::models::{Dataset, ReferenceObservation, StationKey};
use crate::readers::extract::{inspect_extract, parse_timestamp, read_extract, ExtractSource};
use crate::utils::constants::REFERENCE_COLUMNS;

#[derive(Debug, Deserialize)]
struct ReferenceCsvRow {
    #[serde(rename = "State Code")]
    state_code: u32,
    #[serde(rename = "County Code")]
    county_code: u32,
    #[serde(rename = "Site Num")]
    site_number: u32,
    #[serde(rename = "POC")]
    poc: u32,
    #[serde(rename = "Parameter Name")]
    parameter_name: String,
    #[serde(rename = "Sample Measurement")]
    sample_measurement: f64,
    #[serde(rename = "Date GMT")]
    date_gmt: String,
    #[serde(rename = "Time GMT")]
    time_gmt: String,
}

impl ReferenceCsvRow {
    fn into_observation(self) -> std::result::Result<ReferenceObservation, String> {
        Ok(ReferenceObservation {
            station: StationKey::new(self.state_code, self.county_code, self.site_number),
            poc: self.poc,
            parameter_name: self.parameter_name,
            timestamp: parse_timestamp(&self.date_gmt, &self.time_gmt)?,
            value: self.sample_measurement,
        })
    }
}

/// Reads a year's wind extract. Every parameter sub-type is returned; filtering
/// on the parameter name happens during station resolution.
pub struct ReferenceReader;

impl ReferenceReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_year(&self, path: &Path, year: i32) -> Result<Vec<ReferenceObservation>> {
        let source = ExtractSource::new(Dataset::Reference, year, path);
        read_extract(&source, REFERENCE_COLUMNS, ReferenceCsvRow::into_observation)
    }

    pub fn inspect_year(&self, path: &Path, year: i32) -> Result<()> {
        inspect_extract(
            &ExtractSource::new(Dataset::Reference, year, path),
            REFERENCE_COLUMNS,
        )
    }
}

impl Default for ReferenceReader {
    fn default() -> Self {
        Self::new()
    }
}
