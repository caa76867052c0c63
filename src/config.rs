//! Run configuration.
//!
//! Values are layered with the `config` crate: built-in defaults, then an
//! optional config file, then `EPA_INVENTORY_*` environment variables, then
//! command line overrides. The merged result is validated once, before any
//! input file is opened.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::Dataset;
use crate::utils::constants::*;
use crate::utils::filename::year_file_path;

/// How a roster entry is looked up in a year's inventory when marking availability.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityMatch {
    /// Station, reference channel and variable channel must all reappear.
    #[default]
    Triple,
    /// Only the station must reappear, and in exactly one row that year.
    Station,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisConfig {
    #[validate(range(min = 1000, max = 9999))]
    pub year_s: i32,

    #[validate(range(min = 1000, max = 9999))]
    pub year_e: i32,

    pub files_dir: PathBuf,

    #[validate(length(min = 1))]
    pub fname_prefix_w: String,

    #[validate(length(min = 1))]
    pub fname_prefix_v: String,

    pub out_file_path: PathBuf,

    #[validate(length(min = 1))]
    pub extension: String,

    #[validate(length(min = 1))]
    pub reference_parameter: String,

    #[serde(default)]
    pub availability: AvailabilityMatch,

    #[serde(default)]
    pub label_year_columns: bool,

    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

/// Values supplied on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub year_s: Option<i32>,
    pub year_e: Option<i32>,
    pub files_dir: Option<PathBuf>,
    pub fname_prefix_w: Option<String>,
    pub fname_prefix_v: Option<String>,
    pub out_file_path: Option<PathBuf>,
    pub extension: Option<String>,
    pub reference_parameter: Option<String>,
    pub availability: Option<AvailabilityMatch>,
    pub label_year_columns: Option<bool>,
    pub report_path: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Merge defaults, the optional config file, environment and overrides.
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("year_s", i64::from(DEFAULT_YEAR_START))?
            .set_default("year_e", i64::from(DEFAULT_YEAR_END))?
            .set_default("files_dir", DEFAULT_FILES_DIR)?
            .set_default("fname_prefix_w", DEFAULT_PREFIX_REFERENCE)?
            .set_default("fname_prefix_v", DEFAULT_PREFIX_VARIABLE)?
            .set_default("out_file_path", DEFAULT_OUTPUT_FILE)?
            .set_default("extension", DEFAULT_EXTENSION)?
            .set_default("reference_parameter", DEFAULT_REFERENCE_PARAMETER)?
            .set_default("availability", "triple")?
            .set_default("label_year_columns", false)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .set_override_option("year_s", overrides.year_s.map(i64::from))?
            .set_override_option("year_e", overrides.year_e.map(i64::from))?
            .set_override_option("files_dir", overrides.files_dir.as_deref().map(path_value))?
            .set_override_option("fname_prefix_w", overrides.fname_prefix_w.clone())?
            .set_override_option("fname_prefix_v", overrides.fname_prefix_v.clone())?
            .set_override_option(
                "out_file_path",
                overrides.out_file_path.as_deref().map(path_value),
            )?
            .set_override_option("extension", overrides.extension.clone())?
            .set_override_option("reference_parameter", overrides.reference_parameter.clone())?
            .set_override_option(
                "availability",
                overrides.availability.map(|a| match a {
                    AvailabilityMatch::Triple => "triple",
                    AvailabilityMatch::Station => "station",
                }),
            )?
            .set_override_option("label_year_columns", overrides.label_year_columns)?
            .set_override_option("report_path", overrides.report_path.as_deref().map(path_value))?;

        let config: AnalysisConfig = builder.build()?.try_deserialize()?;
        config.validate_all()?;
        Ok(config)
    }

    /// Field validation plus the cross-field rules.
    pub fn validate_all(&self) -> Result<()> {
        self.validate()?;

        if self.year_e < self.year_s {
            return Err(ProcessingError::Configuration(format!(
                "year_e ({}) must not precede year_s ({})",
                self.year_e, self.year_s
            )));
        }
        if self.files_dir.as_os_str().is_empty() {
            return Err(ProcessingError::Configuration(
                "files_dir must not be empty".to_string(),
            ));
        }
        if self.out_file_path.as_os_str().is_empty() {
            return Err(ProcessingError::Configuration(
                "out_file_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Configured years, inclusive and ascending.
    pub fn years(&self) -> Vec<i32> {
        (self.year_s..=self.year_e).collect()
    }

    pub fn prefix(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Reference => &self.fname_prefix_w,
            Dataset::Variable => &self.fname_prefix_v,
        }
    }

    pub fn year_path(&self, dataset: Dataset, year: i32) -> PathBuf {
        year_file_path(&self.files_dir, self.prefix(dataset), year, &self.extension)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            year_s: DEFAULT_YEAR_START,
            year_e: DEFAULT_YEAR_END,
            files_dir: PathBuf::from(DEFAULT_FILES_DIR),
            fname_prefix_w: DEFAULT_PREFIX_REFERENCE.to_string(),
            fname_prefix_v: DEFAULT_PREFIX_VARIABLE.to_string(),
            out_file_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extension: DEFAULT_EXTENSION.to_string(),
            reference_parameter: DEFAULT_REFERENCE_PARAMETER.to_string(),
            availability: AvailabilityMatch::default(),
            label_year_columns: false,
            report_path: None,
        }
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
