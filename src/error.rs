// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid entry number! (the diary has {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Entry content must be a single line")]
    InvalidContent,

    #[error("Invalid category number: {0} (expected 1-3)")]
    InvalidCategory(usize),

    #[error("Invalid date '{0}'. Use the format: day month year (e.g. 07 Jan 2025)")]
    InvalidDateQuery(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Editor exited with a non-zero status")]
    EditorError,

    #[error("No changes detected in entry content")]
    NoChangesMade,
}

pub type Result<T> = std::result::Result<T, DiaryError>;
