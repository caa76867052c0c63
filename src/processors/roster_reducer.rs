use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::config::AvailabilityMatch;
use crate::error::{ProcessingError, Result};
use crate::models::{InventoryRow, Roster, RosterEntry, StationKey, StationMeta, YearInventory};

/// Occurrence counts of one year's rows under the configured matching rule.
enum YearIndex {
    Triple(HashMap<InventoryRow, usize>),
    Station(HashMap<StationKey, usize>),
}

impl YearIndex {
    fn build(matching: AvailabilityMatch, inventory: &YearInventory) -> Self {
        match matching {
            AvailabilityMatch::Triple => {
                let mut counts = HashMap::with_capacity(inventory.rows.len());
                for row in &inventory.rows {
                    *counts.entry(*row).or_insert(0) += 1;
                }
                YearIndex::Triple(counts)
            }
            AvailabilityMatch::Station => {
                let mut counts = HashMap::new();
                for row in &inventory.rows {
                    *counts.entry(row.station).or_insert(0) += 1;
                }
                YearIndex::Station(counts)
            }
        }
    }

    fn occurrences(&self, row: &InventoryRow) -> usize {
        match self {
            YearIndex::Triple(counts) => counts.get(row).copied().unwrap_or(0),
            YearIndex::Station(counts) => counts.get(&row.station).copied().unwrap_or(0),
        }
    }
}

/// Merges the per-year inventories into one roster and marks, for every
/// roster row, the years in which it is available.
pub struct RosterReducer {
    matching: AvailabilityMatch,
}

impl RosterReducer {
    pub fn new(matching: AvailabilityMatch) -> Self {
        Self { matching }
    }

    /// Union of all years' rows without duplicates, in first-produced order,
    /// each with the metadata its station was first seen with.
    pub fn build_roster(
        &self,
        inventories: &[YearInventory],
    ) -> Result<Vec<(InventoryRow, StationMeta)>> {
        let mut seen: HashSet<InventoryRow> = HashSet::new();
        let mut metadata: HashMap<StationKey, StationMeta> = HashMap::new();
        let mut ordered = Vec::new();

        for inventory in inventories {
            for (station, meta) in &inventory.stations {
                metadata.entry(*station).or_insert_with(|| meta.clone());
            }
            ordered.extend(inventory.rows.iter().filter(|row| seen.insert(**row)).copied());
        }

        ordered
            .into_iter()
            .map(|row| {
                let meta = metadata.get(&row.station).cloned().ok_or_else(|| {
                    ProcessingError::Reduction(format!("no metadata for station {}", row.station))
                })?;
                Ok((row, meta))
            })
            .collect()
    }

    /// Build the roster and fill one availability slot per configured year.
    ///
    /// `inventories` must hold exactly one inventory per entry of `years`, in
    /// the same order. A slot holds the year when the row's lookup finds
    /// exactly one match that year; no match and ambiguous matches both give 0.
    pub fn reduce(&self, years: &[i32], inventories: &[YearInventory]) -> Result<Roster> {
        if years.len() != inventories.len() {
            return Err(ProcessingError::Reduction(format!(
                "{} years configured but {} yearly inventories produced",
                years.len(),
                inventories.len()
            )));
        }
        if let Some((year, inventory)) = years
            .iter()
            .zip(inventories)
            .find(|(year, inventory)| **year != inventory.year)
        {
            return Err(ProcessingError::Reduction(format!(
                "inventory for {} found in the slot of {}",
                inventory.year, year
            )));
        }

        let roster_rows = self.build_roster(inventories)?;
        let indexes: Vec<YearIndex> = inventories
            .iter()
            .map(|inventory| YearIndex::build(self.matching, inventory))
            .collect();

        let entries = roster_rows
            .into_iter()
            .map(|(row, meta)| {
                let markers = years
                    .iter()
                    .zip(&indexes)
                    .map(|(&year, index)| match index.occurrences(&row) {
                        1 => year,
                        _ => 0,
                    })
                    .collect();
                RosterEntry { row, meta, markers }
            })
            .collect::<Vec<_>>();

        debug!(
            entries = entries.len(),
            years = years.len(),
            matching = ?self.matching,
            "Reduced yearly inventories"
        );

        Ok(Roster {
            years: years.to_vec(),
            entries,
        })
    }
}
