pub mod inventory;
pub mod observation;
pub mod station;

pub use inventory::{InventoryRow, Roster, RosterEntry, YearInventory};
pub use observation::{Dataset, ReferenceObservation, VariableObservation};
pub use station::{StationKey, StationMeta};
