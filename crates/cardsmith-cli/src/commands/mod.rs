//! CLI command implementations.

pub mod generate;
pub mod inspect;

use std::io::Read;
use std::path::{Path, PathBuf};

use cardsmith::CardsmithError;

/// Read notes from a file, or from stdin when the path is `-`.
pub fn read_notes(file: &Path) -> Result<String, CardsmithError> {
    if is_stdin(file) {
        let mut notes = String::new();
        std::io::stdin()
            .read_to_string(&mut notes)
            .map_err(|source| CardsmithError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(notes);
    }

    std::fs::read_to_string(file).map_err(|source| CardsmithError::Io {
        path: file.to_path_buf(),
        source,
    })
}

pub fn is_stdin(file: &Path) -> bool {
    file.as_os_str() == "-"
}
