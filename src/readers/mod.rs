pub mod extract;
pub mod reference_reader;
pub mod variable_reader;

pub use extract::{inspect_extract, read_extract, ExtractSource};
pub use reference_reader::ReferenceReader;
pub use variable_reader::VariableReader;
