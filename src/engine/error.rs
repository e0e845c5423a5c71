use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchematicError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid number {text:?} at row {row}, column {column}: {source}")]
    InvalidNumber {
        row: usize,
        column: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{quantity} overflowed")]
    Overflow { quantity: &'static str },
}

/// Reads the whole schematic file into memory.
///
/// An empty file is not an error: it is an empty grid.
pub fn load_file_safe(path: &Path) -> Result<String, SchematicError> {
    std::fs::read_to_string(path).map_err(|source| SchematicError::Io {
        path: path.to_path_buf(),
        source,
    })
}
