use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{Dataset, Roster, YearInventory};
use crate::processors::coverage_report::{CoverageReport, YearStats};
use crate::processors::pair_expander::PairExpander;
use crate::processors::roster_reducer::RosterReducer;
use crate::processors::station_resolver::StationResolver;
use crate::readers::{ReferenceReader, VariableReader};
use crate::utils::progress::ProgressReporter;

/// Output of a complete run.
#[derive(Debug, Clone)]
pub struct InventoryRun {
    pub roster: Roster,
    pub report: CoverageReport,
}

/// Drives the yearly pipeline: read both extracts, resolve stations, expand
/// channel pairs, and once every year is done reduce them into the roster.
pub struct InventoryProcessor {
    config: AnalysisConfig,
    reference_reader: ReferenceReader,
    variable_reader: VariableReader,
    resolver: StationResolver,
    expander: PairExpander,
    reducer: RosterReducer,
}

impl InventoryProcessor {
    pub fn new(config: AnalysisConfig) -> Self {
        let resolver = StationResolver::new(config.reference_parameter.clone());
        let reducer = RosterReducer::new(config.availability);
        Self {
            config,
            reference_reader: ReferenceReader::new(),
            variable_reader: VariableReader::new(),
            resolver,
            expander: PairExpander::new(),
            reducer,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Read, resolve and expand a single year.
    pub fn process_year(&self, year: i32) -> Result<(YearInventory, YearStats)> {
        let reference_path = self.config.year_path(Dataset::Reference, year);
        let reference = self.reference_reader.read_year(&reference_path, year)?;

        let variable_path = self.config.year_path(Dataset::Variable, year);
        let variable = self.variable_reader.read_year(&variable_path, year)?;

        let year_match = self.resolver.resolve(year, &reference, &variable);
        let inventory = self.expander.expand(&year_match);
        let stats = YearStats::from_year(reference.len(), variable.len(), &year_match, &inventory);

        if year_match.is_empty() {
            warn!(
                year,
                reference_stations = stats.reference_stations,
                variable_stations = stats.variable_stations,
                "No station reports both datasets"
            );
        } else {
            info!(
                year,
                reference_rows = stats.reference_rows,
                variable_rows = stats.variable_rows,
                matched_stations = stats.matched_stations,
                inventory_rows = stats.inventory_rows,
                "Processed year"
            );
        }

        Ok((inventory, stats))
    }

    /// Process every configured year in order and reduce the results. Any
    /// failure aborts the run and discards the years already processed.
    pub fn run(&self, progress: Option<&ProgressReporter>) -> Result<InventoryRun> {
        self.config.validate_all()?;

        let years = self.config.years();
        let mut inventories = Vec::with_capacity(years.len());
        let mut report = CoverageReport::new(&self.config.fname_prefix_w, &self.config.fname_prefix_v);

        for &year in &years {
            if let Some(p) = progress {
                p.start_year(year)?;
            }

            let (inventory, stats) = self.process_year(year)?;
            inventories.push(inventory);
            report.push_year(stats);

            if let Some(p) = progress {
                p.finish_year();
            }
        }

        if let Some(p) = progress {
            p.set_message("Reducing yearly inventories...");
        }

        let roster = self.reducer.reduce(&years, &inventories)?;
        report.record_roster(&roster);

        info!(
            entries = report.roster_entries,
            stations = report.roster_stations,
            "Roster built"
        );

        Ok(InventoryRun { roster, report })
    }

    /// Verify every year's files exist and carry the required columns without
    /// reading their rows. Returns all failures found.
    pub fn check_inputs(&self) -> Vec<ProcessingError> {
        let mut failures = Vec::new();

        for year in self.config.years() {
            let reference_path = self.config.year_path(Dataset::Reference, year);
            if let Err(e) = self.reference_reader.inspect_year(&reference_path, year) {
                failures.push(e);
            }

            let variable_path = self.config.year_path(Dataset::Variable, year);
            if let Err(e) = self.variable_reader.inspect_year(&variable_path, year) {
                failures.push(e);
            }
        }

        failures
    }
}
