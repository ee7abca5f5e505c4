//! CLI command implementations.

pub mod check;
pub mod evaluate;
pub mod thresholds;

use proteinuria::{read_input_file, LabInput};

use crate::cli::LabArgs;

/// Build the lab input from flags or a JSON file.
///
/// Missing flags become empty text, which validation reports as invalid.
pub fn load_input(lab: &LabArgs) -> proteinuria::Result<LabInput> {
    if let Some(ref path) = lab.input {
        tracing::debug!(path = %path.display(), "reading lab input file");
        return read_input_file(path);
    }

    Ok(LabInput::parse(
        lab.albumin.as_deref().unwrap_or_default(),
        lab.protein.as_deref().unwrap_or_default(),
        lab.creatinine.as_deref().unwrap_or_default(),
    ))
}
