pub mod atomic;
pub mod report_writer;
pub mod roster_writer;

pub use atomic::write_atomic;
pub use report_writer::write_report_json;
pub use roster_writer::RosterWriter;
