pub mod coverage_report;
pub mod inventory_processor;
pub mod pair_expander;
pub mod roster_reducer;
pub mod station_resolver;

pub use coverage_report::{CoverageReport, YearStats};
pub use inventory_processor::{InventoryProcessor, InventoryRun};
pub use pair_expander::PairExpander;
pub use roster_reducer::RosterReducer;
pub use station_resolver::{MatchedStation, StationResolver, YearMatch};
