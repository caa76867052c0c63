use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::station::{StationKey, StationMeta};

/// One station paired with one reference channel and one variable channel.
///
/// Equality covers all three fields; this is the dedup key of the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InventoryRow {
    pub station: StationKey,
    pub reference_channel: u32,
    pub variable_channel: u32,
}

impl InventoryRow {
    pub fn new(station: StationKey, reference_channel: u32, variable_channel: u32) -> Self {
        Self {
            station,
            reference_channel,
            variable_channel,
        }
    }
}

/// Everything one year contributed: its channel pairings and the metadata of
/// each station they reference.
#[derive(Debug, Clone, Default)]
pub struct YearInventory {
    pub year: i32,
    pub rows: Vec<InventoryRow>,
    pub stations: BTreeMap<StationKey, StationMeta>,
}

impl YearInventory {
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn meta(&self, station: &StationKey) -> Option<&StationMeta> {
        self.stations.get(station)
    }
}

/// A roster row with its per-year availability markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub row: InventoryRow,
    pub meta: StationMeta,
    /// One slot per configured year, ascending: the year itself or 0.
    pub markers: Vec<i32>,
}

impl RosterEntry {
    pub fn available_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.markers.iter().copied().filter(|&m| m != 0)
    }

    pub fn is_available(&self, slot: usize) -> bool {
        self.markers.get(slot).is_some_and(|&m| m != 0)
    }
}

/// The final station-instrument inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub years: Vec<i32>,
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries marked available in the given slot.
    pub fn available_in_slot(&self, slot: usize) -> usize {
        self.entries.iter().filter(|e| e.is_available(slot)).count()
    }
}
