pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{variable_channel_column, year_file_path};
pub use progress::ProgressReporter;
