//! Lab value input and free-text parsing.

mod lab;
mod parser;

pub use lab::LabInput;
pub use parser::{parse_lab_value, read_input_file, read_input_json};
