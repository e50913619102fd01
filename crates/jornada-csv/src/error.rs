use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{} does not exist or is not readable", .0.display())]
    NotFound(PathBuf),

    #[error("{file} line {line}: missing {column} column")]
    MissingColumn {
        file: &'static str,
        line: u64,
        column: &'static str,
    },

    #[error("{file} line {line}: invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        file: &'static str,
        line: u64,
        value: String,
    },

    #[error("{file} line {line}: invalid day count {value:?}, expected a non-negative integer")]
    InvalidDays {
        file: &'static str,
        line: u64,
        value: String,
    },
}
