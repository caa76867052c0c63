use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{AvailabilityMatch, ConfigOverrides};

#[derive(Parser)]
#[command(name = "epa-inventory")]
#[command(about = "Inventory of stations reporting both wind and a target variable, year by year")]
#[command(version)]
pub struct Cli {
    /// Defaults to `analyze` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Configuration file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the station / instrument roster and write it to the output file
    Analyze(RunOptions),

    /// Check that every configured year has both input files with the required columns
    Check(RunOptions),
}

/// Overrides for values otherwise taken from the config file or defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct RunOptions {
    #[arg(long = "year-start", help = "First year of the range")]
    pub year_s: Option<i32>,

    #[arg(long = "year-end", help = "Last year of the range (inclusive)")]
    pub year_e: Option<i32>,

    #[arg(short = 'd', long, help = "Directory holding the per-year files")]
    pub files_dir: Option<PathBuf>,

    #[arg(long, help = "File name prefix of the wind files, e.g. WIND")]
    pub reference_prefix: Option<String>,

    #[arg(long, help = "File name prefix of the variable files, e.g. PM10")]
    pub variable_prefix: Option<String>,

    #[arg(short, long, help = "Output roster path")]
    pub output_file: Option<PathBuf>,

    #[arg(long, help = "Extension of the per-year files")]
    pub extension: Option<String>,

    #[arg(long, help = "Parameter name of the wind rows used for matching")]
    pub reference_parameter: Option<String>,

    #[arg(long, value_enum, help = "How roster rows are matched against each year")]
    pub availability: Option<AvailabilityMatch>,

    #[arg(long, help = "Write the year into the header of each year column")]
    pub label_years: bool,

    #[arg(long, help = "Also write the coverage report as JSON to this path")]
    pub report: Option<PathBuf>,
}

impl RunOptions {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            year_s: self.year_s,
            year_e: self.year_e,
            files_dir: self.files_dir.clone(),
            fname_prefix_w: self.reference_prefix.clone(),
            fname_prefix_v: self.variable_prefix.clone(),
            out_file_path: self.output_file.clone(),
            extension: self.extension.clone(),
            reference_parameter: self.reference_parameter.clone(),
            availability: self.availability,
            label_year_columns: self.label_years.then_some(true),
            report_path: self.report.clone(),
        }
    }
}
