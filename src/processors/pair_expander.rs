use tracing::debug;

use crate::models::{InventoryRow, YearInventory};
use crate::processors::station_resolver::{MatchedStation, YearMatch};

/// Turns a year's matched stations into inventory rows, one per
/// reference-channel × variable-channel combination.
pub struct PairExpander;

impl PairExpander {
    pub fn new() -> Self {
        Self
    }

    /// Every (reference, variable) channel pairing of one station, reference
    /// channel major.
    pub fn station_pairs(matched: &MatchedStation) -> impl Iterator<Item = InventoryRow> + '_ {
        matched.reference_channels.iter().flat_map(move |&reference| {
            matched
                .variable_channels
                .iter()
                .map(move |&variable| InventoryRow::new(matched.station, reference, variable))
        })
    }

    pub fn expand(&self, year_match: &YearMatch) -> YearInventory {
        let mut inventory = YearInventory::empty(year_match.year);

        for matched in &year_match.stations {
            let before = inventory.rows.len();
            inventory.rows.extend(Self::station_pairs(matched));
            inventory
                .stations
                .entry(matched.station)
                .or_insert_with(|| matched.meta.clone());

            debug!(
                year = year_match.year,
                station = %matched.station,
                reference_channels = matched.reference_channels.len(),
                variable_channels = matched.variable_channels.len(),
                rows = inventory.rows.len() - before,
                "Expanded channel pairs"
            );
        }

        inventory
    }
}

impl Default for PairExpander {
    fn default() -> Self {
        Self::new()
    }
}
