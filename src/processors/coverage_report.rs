use serde::{Deserialize, Serialize};

use crate::models::{Roster, YearInventory};
use crate::processors::station_resolver::YearMatch;

/// Counts gathered while processing one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearStats {
    pub year: i32,
    pub reference_rows: usize,
    pub variable_rows: usize,
    pub reference_stations: usize,
    pub covered_stations: usize,
    pub variable_stations: usize,
    pub matched_stations: usize,
    pub inventory_rows: usize,
    /// Roster entries marked available this year; filled in after reduction.
    pub available_entries: usize,
}

impl YearStats {
    pub fn from_year(
        reference_rows: usize,
        variable_rows: usize,
        year_match: &YearMatch,
        inventory: &YearInventory,
    ) -> Self {
        Self {
            year: year_match.year,
            reference_rows,
            variable_rows,
            reference_stations: year_match.reference_stations,
            covered_stations: year_match.covered_stations,
            variable_stations: year_match.variable_stations,
            matched_stations: year_match.len(),
            inventory_rows: inventory.rows.len(),
            available_entries: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub reference_prefix: String,
    pub variable_prefix: String,
    pub years: Vec<YearStats>,
    pub roster_entries: usize,
    pub roster_stations: usize,
}

impl CoverageReport {
    pub fn new(reference_prefix: &str, variable_prefix: &str) -> Self {
        Self {
            reference_prefix: reference_prefix.to_string(),
            variable_prefix: variable_prefix.to_string(),
            ..Default::default()
        }
    }

    pub fn push_year(&mut self, stats: YearStats) {
        self.years.push(stats);
    }

    /// Record roster-level totals and per-year availability counts.
    pub fn record_roster(&mut self, roster: &Roster) {
        self.roster_entries = roster.len();

        let mut stations: Vec<_> = roster.entries.iter().map(|e| e.row.station).collect();
        stations.sort();
        stations.dedup();
        self.roster_stations = stations.len();

        for (slot, stats) in self.years.iter_mut().enumerate() {
            stats.available_entries = roster.available_in_slot(slot);
        }
    }

    pub fn empty_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years
            .iter()
            .filter(|s| s.matched_stations == 0)
            .map(|s| s.year)
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Coverage Report ===\n");
        summary.push_str(&format!(
            "Reference: {}  Variable: {}\n",
            self.reference_prefix, self.variable_prefix
        ));
        summary.push_str(&format!(
            "Roster Entries: {} ({} stations)\n",
            self.roster_entries, self.roster_stations
        ));
        summary.push_str(&format!(
            "\n{:>6} {:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>10}\n",
            "Year", "Ref rows", "Var rows", "Ref stn", "Covered", "Var stn", "Matched", "Available"
        ));

        for stats in &self.years {
            summary.push_str(&format!(
                "{:>6} {:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>10}\n",
                stats.year,
                stats.reference_rows,
                stats.variable_rows,
                stats.reference_stations,
                stats.covered_stations,
                stats.variable_stations,
                stats.matched_stations,
                stats.available_entries
            ));
        }

        let empty: Vec<String> = self.empty_years().map(|y| y.to_string()).collect();
        if !empty.is_empty() {
            summary.push_str(&format!("\nYears without matches: {}\n", empty.join(", ")));
        }

        summary
    }
}
