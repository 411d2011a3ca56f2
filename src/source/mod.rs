//! Board input sources.
//!
//! - [`sample`]: deterministic seed data
//! - [`board_file`]: a board described as JSON
//! - [`replay`]: recorded drop gestures as JSON

use crate::model::InputError;
use std::path::Path;

pub mod board_file;
pub mod replay;
pub mod sample;

pub use board_file::{load_board, parse_board};
pub use replay::{load_replay, parse_replay, RecordedDrop};
pub use sample::{basic_board, PeopleGenerator, DEFAULT_ITEMS_PER_COLUMN};

/// Read a whole input file.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors.
pub(crate) fn read_input(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
