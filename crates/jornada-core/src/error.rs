use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkingDaysError {
    #[error("The end date {end} must not be before the start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Date out of range: cannot advance past {0}")]
    OutOfRange(NaiveDate),
}
